//! Upload form builders.

use axum_test::multipart::{MultipartForm, Part};

/// Minimal bytes that look like the start of an MP4 (`ftyp` box).
pub fn fake_mp4(len: usize) -> Vec<u8> {
    let header: &[u8] = &[
        0x00, 0x00, 0x00, 0x18, b'f', b't', b'y', b'p', b'i', b's', b'o', b'm',
    ];
    let mut data = header.to_vec();
    data.resize(len.max(header.len()), 0);
    data.truncate(len);
    data
}

/// A form with `data` in the `video` field under `filename`.
pub fn video_form(filename: &str, data: Vec<u8>) -> MultipartForm {
    let part = Part::bytes(data)
        .file_name(filename.to_string())
        .mime_type("video/mp4");
    MultipartForm::new().add_part("video", part)
}
