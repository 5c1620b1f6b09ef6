pub mod fallback;
pub mod info;
pub mod upload;
