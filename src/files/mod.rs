//! File operations module for PostForge
//!
//! Native file dialogs plus the small amount of filesystem glue the app
//! needs: reading picked image files into memory as uploads.

pub mod dialogs;

use crate::error::Result;
use std::path::Path;

/// Read a picked file into memory as an upload: its filename plus bytes.
///
/// The filename (not the full path) is what ends up in the bundle and in the
/// front matter.
pub fn read_upload(path: &Path) -> Result<(String, Vec<u8>)> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image")
        .to_string();
    let bytes = std::fs::read(path)?;
    Ok((file_name, bytes))
}
