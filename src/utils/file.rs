use std::fs::File;
use std::io::Write;
use std::path::Path;
use crate::core::library::{LibraryError, LibraryResult};

// Writes the bytes next to the target, flushes them to disk and renames over
// the target, so readers see either the old or the new value.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> LibraryResult<()> {
    let parent = path.parent().ok_or_else(|| {
        LibraryError::storage(format!("{} has no parent directory", path.display()).as_str(), None)
    })?;
    std::fs::create_dir_all(parent)?;

    let tmp_path = path.with_extension("tmp");
    {
        let mut f = File::create(&tmp_path)?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::utils::file::write_atomically;

    #[tokio::test]
    async fn test_should_write_atomically() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("nested").join("library.json");
        write_atomically(&path, b"{}").expect("should write");
        write_atomically(&path, b"{\"want\":[]}").expect("should overwrite");
        assert_eq!("{\"want\":[]}", std::fs::read_to_string(&path).expect("should read"));
        assert!(!path.with_extension("tmp").exists());
    }
}
