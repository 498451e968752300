// Uploader: submits the export archive to the remote file host

pub mod client;
pub mod response;

pub use client::{send_archive, UploadReport};
pub use response::{interpret_response, UploadOutcome};
