use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// An icon could not be rendered; fatal to that entry only
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("icon size must be a positive number of pixels, got {0}")]
    InvalidSize(u32),

    #[error("icon size {size}px exceeds the {max}px drawing surface limit")]
    TooLarge { size: u32, max: u32 },

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
}

/// Both the catalog write and the fallback write failed
#[derive(Debug, Error)]
#[error(
    "failed to write {} ({primary}); fallback {} also failed ({fallback})",
    .primary_path.display(),
    .fallback_path.display()
)]
pub struct WriteError {
    pub primary_path: PathBuf,
    pub primary: io::Error,
    pub fallback_path: PathBuf,
    pub fallback: io::Error,
}

/// Why a single generation entry ended up in the failure column
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("render failed: {0}")]
    Render(#[from] RenderError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("failed to serialize asset catalog manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlarmError {
    #[error("weekday index {0} is outside 0..=6")]
    WeekdayOutOfRange(u8),

    #[error("weekday index {0} listed more than once")]
    DuplicateWeekday(u8),
}
