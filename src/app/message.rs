// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::camera::subscription::FeedMessage;
use crate::error::Error;
use std::path::PathBuf;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Top-level messages consumed by `App::update`. The variants forward
/// feed events while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// An event from the camera feed subscription.
    Feed(FeedMessage),
    /// Pause or resume frame delivery.
    TogglePause,
    /// Save the currently displayed frame as PNG.
    TakeSnapshot,
    /// Result of the async snapshot write.
    SnapshotSaved(Result<PathBuf, Error>),
    /// A different UI language was picked.
    LanguageSelected(LanguageIdentifier),
    /// Periodic tick for the fps readout.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional feed frame rate override.
    pub fps: Option<u32>,
    /// Optional feed geometry override, `WIDTHxHEIGHT`.
    pub resolution: Option<String>,
}
