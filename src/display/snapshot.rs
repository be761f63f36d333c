// SPDX-License-Identifier: MPL-2.0
//! Snapshot export for the displayed frame.
//!
//! Writes the current frame as PNG into the user's pictures directory
//! with a timestamped file name.

use crate::error::{Error, Result};
use image_rs::{ImageBuffer, Rgba};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A frame captured from the display, ready to be written to disk.
///
/// Uses `Arc<Vec<u8>>` so capturing never copies the pixel data; the copy
/// happens only when encoding requires ownership.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotFrame {
    /// RGBA pixel data shared with the display.
    pub rgba: Arc<Vec<u8>>,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
}

impl SnapshotFrame {
    /// Creates a snapshot from RGBA data.
    #[must_use]
    pub fn new(rgba: Arc<Vec<u8>>, width: u32, height: u32) -> Self {
        Self {
            rgba,
            width,
            height,
        }
    }

    /// Writes the frame as PNG to the given path, creating parent
    /// directories as needed.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let buffer =
            ImageBuffer::<Rgba<u8>, _>::from_raw(self.width, self.height, (*self.rgba).clone())
                .ok_or_else(|| {
                    Error::Snapshot("frame buffer does not match its dimensions".to_string())
                })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        buffer
            .save_with_format(path, image_rs::ImageFormat::Png)
            .map_err(|e| Error::Snapshot(e.to_string()))
    }

    /// Writes the frame into the pictures directory under a timestamped
    /// name and returns the path written.
    pub fn save_to_pictures(&self) -> Result<PathBuf> {
        let dir = dirs::picture_dir()
            .ok_or_else(|| Error::Snapshot("no pictures directory available".to_string()))?;
        let path = dir.join(timestamped_name());
        self.save_png(&path)?;
        Ok(path)
    }
}

/// File name of the form `camview-20260830-142501.png`.
fn timestamped_name() -> String {
    format!(
        "camview-{}.png",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    )
}
