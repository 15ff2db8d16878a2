pub mod add_book_cmd;
pub mod export_library_cmd;
pub mod find_book_cmd;
pub mod list_library_cmd;
pub mod remove_book_cmd;
pub mod sign_in_cmd;
pub mod sign_out_cmd;
pub mod sort_library_cmd;
pub mod sync_library_cmd;
pub mod update_progress_cmd;
