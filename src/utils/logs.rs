// sets up the global subscriber once per process; later calls are ignored
pub fn setup_tracing(json: bool, verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // logs go to stderr so command output on stdout stays parseable.
        .with_writer(std::io::stderr);
    let _ = if json {
        builder.with_ansi(false).json().try_init()
    } else {
        builder.try_init()
    };
}
