//! Native file dialog integration using the rfd crate
//!
//! This module provides functions to open native picker dialogs for image
//! uploads and for choosing where the exported bundle lands.

use rfd::FileDialog;
use std::path::PathBuf;

/// File extension filter for supported image uploads.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Opens a native file dialog for picking a single image.
///
/// Returns `Some(PathBuf)` if a file was selected, `None` if cancelled.
pub fn pick_image_dialog(title: &str) -> Option<PathBuf> {
    FileDialog::new()
        .set_title(title)
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_file()
}

/// Opens a native save dialog for the exported archive.
///
/// Returns `Some(PathBuf)` if a location was chosen, `None` if cancelled.
pub fn save_archive_dialog(initial_dir: Option<&PathBuf>, default_name: &str) -> Option<PathBuf> {
    let mut dialog = FileDialog::new()
        .set_title("Export Blog Post Bundle")
        .add_filter("Zip Archives", &["zip"])
        .set_file_name(default_name);

    if let Some(dir) = initial_dir {
        dialog = dialog.set_directory(dir);
    }

    dialog.save_file()
}
