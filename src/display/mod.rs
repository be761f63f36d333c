// SPDX-License-Identifier: MPL-2.0
//! Frame presentation for CamView.
//!
//! The [`fit`] module holds the pure letterboxing computation; [`canvas`]
//! wraps it in an Iced widget that owns the current frame; [`snapshot`]
//! exports the displayed frame as a PNG.

pub mod canvas;
pub mod fit;
pub mod snapshot;

pub use canvas::FrameCanvas;
pub use fit::{fit, Placement};
pub use snapshot::SnapshotFrame;
