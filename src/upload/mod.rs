//! Uploaded-image handling for the edit endpoint.
//!
//! This module owns the transient upload entity: pulling the photo out of
//! the multipart request, rejecting non-file payloads, and applying the
//! filename/content-type defaults the upstream expects.
//!
//! # Submodules
//!
//! - `models`: The per-request upload entity and validation limits.
//! - `extract`: Multipart field extraction for the edit endpoint.

pub mod extract;
pub mod models;

pub use extract::image_from_multipart;
pub use models::UploadedImage;
