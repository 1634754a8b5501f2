mod app_data_dir;
mod download_sink;
mod registry_file_store;

pub use app_data_dir::app_data_dir;
pub use download_sink::DownloadsDirSink;
pub use registry_file_store::FileRegistryStore;
