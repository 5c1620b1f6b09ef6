pub mod upload;

pub use upload::{ReceivedFile, StoreFailure, UploadService};
