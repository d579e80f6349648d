//! Bundle archive assembly
//!
//! Builds the downloadable zip archive: the rendered document under a fixed
//! filename plus every image payload under its original filename. The
//! document compresses well and is deflated; image payloads are already
//! compressed formats and are stored as-is.

use crate::error::Result;
use crate::post::DOCUMENT_FILE_NAME;
use std::io::{Cursor, Seek, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

// ─────────────────────────────────────────────────────────────────────────────
// Bundle Contents
// ─────────────────────────────────────────────────────────────────────────────

/// A named binary payload destined for the archive.
#[derive(Debug, Clone)]
pub struct BundleFile {
    /// Entry name inside the archive
    pub name: String,
    /// Raw payload
    pub bytes: Vec<u8>,
}

/// Everything that goes into one exported bundle.
///
/// This is a snapshot taken at export time; mutating the draft afterwards
/// cannot affect an export already in flight.
#[derive(Debug, Clone)]
pub struct BundleContents {
    /// The rendered front-matter + body document
    pub document: String,
    /// The featured image payload
    pub featured: BundleFile,
    /// Every inline image payload, referenced or not
    pub images: Vec<BundleFile>,
}

impl BundleContents {
    /// Number of entries the archive will contain.
    pub fn entry_count(&self) -> usize {
        // document + featured + inline images
        2 + self.images.len()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Archive Writing
// ─────────────────────────────────────────────────────────────────────────────

/// Write the bundle as a zip archive to the given writer.
pub fn write_bundle<W: Write + Seek>(writer: W, contents: &BundleContents) -> Result<()> {
    let text_options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    // Image payloads are already compressed; don't recompress
    let binary_options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    let mut zip = ZipWriter::new(writer);

    zip.start_file(DOCUMENT_FILE_NAME, text_options)?;
    zip.write_all(contents.document.as_bytes())?;

    zip.start_file(contents.featured.name.as_str(), binary_options)?;
    zip.write_all(&contents.featured.bytes)?;

    for image in &contents.images {
        zip.start_file(image.name.as_str(), binary_options)?;
        zip.write_all(&image.bytes)?;
    }

    zip.finish()?;
    Ok(())
}

/// Build the complete archive in memory and return its bytes.
pub fn build_bundle(contents: &BundleContents) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    write_bundle(&mut buffer, contents)?;
    Ok(buffer.into_inner())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
