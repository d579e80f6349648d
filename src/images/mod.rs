//! Uploaded image handling
//!
//! Two kinds of image enter a post: the single featured image (validated to
//! exact dimensions, exported under its original filename) and any number of
//! inline images (inserted into the body via a transient preview URI, also
//! exported under their original filenames).
//!
//! Preview URIs are session-local references; they never leave the app. The
//! body renderer rewrites them to real filenames at export time.

use crate::error::{Error, Result};
use log::{debug, info};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Required featured image width in pixels.
pub const REQUIRED_FEATURED_WIDTH: u32 = 1000;

/// Required featured image height in pixels.
pub const REQUIRED_FEATURED_HEIGHT: u32 = 500;

// ─────────────────────────────────────────────────────────────────────────────
// Image Types
// ─────────────────────────────────────────────────────────────────────────────

/// The post's featured image.
///
/// Construction goes through [`load_featured_image`], which decodes the bytes
/// and enforces the exact-dimension rule, so a value of this type is always a
/// valid featured image.
#[derive(Clone)]
pub struct FeaturedImage {
    /// Original filename; the bundle entry name
    pub file_name: String,
    /// Encoded payload, written to the bundle as-is
    pub bytes: Vec<u8>,
    /// Decoded width in pixels
    pub width: u32,
    /// Decoded height in pixels
    pub height: u32,
    /// Decoded RGBA pixels for the in-app thumbnail
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for FeaturedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeaturedImage")
            .field("file_name", &self.file_name)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// An image inserted inline into the body.
#[derive(Debug, Clone)]
pub struct InlineImage {
    /// Original filename; the bundle entry name
    pub file_name: String,
    /// Encoded payload, written to the bundle as-is
    pub bytes: Vec<u8>,
    /// Transient session-local reference used inside the editor body
    pub preview_uri: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Featured Image Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Decode an uploaded featured image and enforce the dimension rule.
///
/// Rejects the upload unless the decoded image is exactly 1000×500 pixels; on
/// rejection the caller's previous featured image (or absence of one) stays
/// untouched.
pub fn load_featured_image(file_name: &str, bytes: Vec<u8>) -> Result<FeaturedImage> {
    let decoded = image::load_from_memory(&bytes).map_err(|source| Error::ImageDecode {
        name: file_name.to_string(),
        source,
    })?;

    let (width, height) = (decoded.width(), decoded.height());
    debug!("Decoded '{}': {}x{}", file_name, width, height);

    if width != REQUIRED_FEATURED_WIDTH || height != REQUIRED_FEATURED_HEIGHT {
        return Err(Error::ImageDimensions {
            width,
            height,
            required_width: REQUIRED_FEATURED_WIDTH,
            required_height: REQUIRED_FEATURED_HEIGHT,
        });
    }

    info!("Featured image accepted: {}", file_name);
    Ok(FeaturedImage {
        file_name: file_name.to_string(),
        rgba: decoded.to_rgba8().into_raw(),
        bytes,
        width,
        height,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Preview URIs
// ─────────────────────────────────────────────────────────────────────────────

/// Build the transient preview URI for an inline image.
///
/// The sequence number makes the URI unique per upload, so rewriting one
/// image's references can never touch another's.
pub fn preview_uri(seq: u64) -> String {
    format!("bytes://inline-image-{}", seq)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
