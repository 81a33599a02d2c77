// Adapters for the external user and team directory

pub mod http_directory_client;

pub use http_directory_client::HttpDirectoryClient;
