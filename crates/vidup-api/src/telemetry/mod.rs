pub mod init;
pub mod request_log;

pub use init::init_telemetry;
pub use request_log::{RecordLevel, RequestLog};
