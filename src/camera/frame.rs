// SPDX-License-Identifier: MPL-2.0
//! The decoded frame handed from the acquisition pipeline to the display.

use std::sync::Arc;

/// A single decoded camera frame ready for display.
///
/// Frames are immutable once produced; the display replaces its current
/// frame wholesale whenever a new one arrives.
#[derive(Debug, Clone)]
pub struct CameraFrame {
    /// RGBA pixel data (width × height × 4 bytes).
    pub rgba: Arc<Vec<u8>>,

    /// Frame width in pixels.
    pub width: u32,

    /// Frame height in pixels.
    pub height: u32,

    /// Monotonically increasing frame number within one acquisition session.
    pub sequence: u64,
}

impl CameraFrame {
    /// Returns the total pixel payload size in bytes.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.rgba.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_bytes_reports_payload_length() {
        let frame = CameraFrame {
            rgba: Arc::new(vec![0u8; 8 * 4 * 4]),
            width: 8,
            height: 4,
            sequence: 0,
        };
        assert_eq!(frame.size_bytes(), 128);
    }

    #[test]
    fn clone_shares_pixel_data() {
        let frame = CameraFrame {
            rgba: Arc::new(vec![0u8; 16]),
            width: 2,
            height: 2,
            sequence: 7,
        };
        let copy = frame.clone();
        assert!(Arc::ptr_eq(&frame.rgba, &copy.rgba));
        assert_eq!(copy.sequence, 7);
    }
}
