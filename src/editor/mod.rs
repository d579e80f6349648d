//! Body editor for PostForge
//!
//! The markdown editing surface for the post body: a text widget plus a
//! small formatting engine and live text statistics.

mod formatting;
mod stats;
mod widget;

pub use formatting::{
    apply_format, image_alt_from_file_name, insert_image, FormatCommand, FormatResult,
};
pub use stats::TextStats;
pub use widget::BodyEditor;
