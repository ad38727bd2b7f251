pub mod json_writer;
pub mod loader;
pub mod report;
pub mod summary;
