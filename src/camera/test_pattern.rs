// SPDX-License-Identifier: MPL-2.0
//! Synthetic frame source used when no capture hardware is attached.
//!
//! Produces a color gradient with a moving vertical bar so motion is
//! visible in the viewer. Frames are deterministic per sequence number,
//! which keeps them cheap to test.

use super::frame::CameraFrame;
use std::sync::Arc;

/// Width of the moving bar in pixels.
const BAR_WIDTH: u32 = 24;

/// How far the bar advances per frame, in pixels.
const BAR_STEP: u32 = 8;

/// Deterministic RGBA test pattern generator.
#[derive(Debug, Clone, Copy)]
pub struct TestPattern {
    width: u32,
    height: u32,
}

impl TestPattern {
    /// Creates a generator for the given frame geometry.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Renders the frame for the given sequence number.
    #[must_use]
    pub fn frame(&self, sequence: u64) -> CameraFrame {
        let mut rgba = Vec::with_capacity((self.width * self.height * 4) as usize);
        let bar_start = ((sequence as u32).wrapping_mul(BAR_STEP)) % self.width.max(1);

        for y in 0..self.height {
            for x in 0..self.width {
                let in_bar = bar_distance(x, bar_start, self.width) < BAR_WIDTH;
                if in_bar {
                    rgba.extend_from_slice(&[255, 255, 255, 255]);
                } else {
                    let r = scale_channel(x, self.width);
                    let g = scale_channel(y, self.height);
                    rgba.extend_from_slice(&[r, g, 96, 255]);
                }
            }
        }

        CameraFrame {
            rgba: Arc::new(rgba),
            width: self.width,
            height: self.height,
            sequence,
        }
    }
}

/// Horizontal distance from `x` to the bar origin, wrapping at the frame edge.
fn bar_distance(x: u32, bar_start: u32, width: u32) -> u32 {
    if x >= bar_start {
        x - bar_start
    } else {
        x + width - bar_start
    }
}

/// Maps a coordinate to a 0–255 channel value across the frame extent.
fn scale_channel(value: u32, extent: u32) -> u8 {
    if extent <= 1 {
        return 0;
    }
    ((value * 255) / (extent - 1)) as u8
}
