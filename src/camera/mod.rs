// SPDX-License-Identifier: MPL-2.0
//! Frame acquisition for CamView.
//!
//! This module models the external camera pipeline: an async task produces
//! decoded RGBA frames and pushes them through channels toward the UI.
//! The built-in test pattern source stands in for real capture hardware.

mod frame;
mod source;
pub mod subscription;
mod test_pattern;

pub use frame::CameraFrame;
pub use source::{AsyncCamera, CameraCommand, CameraEvent, FeedSettings};
pub use subscription::{camera_feed, CameraCommandSender, CameraFeedId, FeedMessage};
pub use test_pattern::TestPattern;
