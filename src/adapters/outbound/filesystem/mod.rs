/// Filesystem adapters for snapshot input, export output and the result store
mod file_writer;
mod result_store;
mod snapshot_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use result_store::{FileSystemResultStore, InMemoryResultStore};
pub use snapshot_reader::FileSystemSnapshotReader;
