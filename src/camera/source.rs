// SPDX-License-Identifier: MPL-2.0
//! Async frame acquisition task.
//!
//! The acquisition loop runs in a Tokio task and delivers frames through
//! channels, so the UI thread never touches the producer directly. Events
//! use a small bounded channel: a slow UI applies backpressure instead of
//! piling up frames.

use super::frame::CameraFrame;
use super::test_pattern::TestPattern;
use crate::config::{
    DEFAULT_FEED_FPS, DEFAULT_FEED_HEIGHT, DEFAULT_FEED_WIDTH, MAX_FEED_DIMENSION, MAX_FEED_FPS,
    MIN_FEED_DIMENSION, MIN_FEED_FPS,
};
use crate::error::{CameraError, Error, Result};
use std::time::Duration;
use tokio::sync::mpsc;

/// Geometry and rate of the acquisition feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedSettings {
    /// Frame width in pixels.
    pub width: u32,

    /// Frame height in pixels.
    pub height: u32,

    /// Frames per second.
    pub fps: u32,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_FEED_WIDTH,
            height: DEFAULT_FEED_HEIGHT,
            fps: DEFAULT_FEED_FPS,
        }
    }
}

impl FeedSettings {
    /// Validates the settings against the supported bounds.
    pub fn validate(&self) -> Result<()> {
        let dimension_ok = |v: u32| (MIN_FEED_DIMENSION..=MAX_FEED_DIMENSION).contains(&v);
        if !dimension_ok(self.width) || !dimension_ok(self.height) {
            return Err(Error::Camera(CameraError::InvalidResolution));
        }
        if !(MIN_FEED_FPS..=MAX_FEED_FPS).contains(&self.fps) {
            return Err(Error::Camera(CameraError::InvalidResolution));
        }
        Ok(())
    }

    /// Interval between two consecutive frames.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps))
    }
}

/// Commands sent to the acquisition task.
#[derive(Debug, Clone)]
pub enum CameraCommand {
    /// Resume frame delivery.
    Start,

    /// Pause frame delivery (the task stays alive).
    Stop,
}

/// Events sent from the acquisition task to the UI.
#[derive(Debug, Clone)]
pub enum CameraEvent {
    /// A new frame is ready for display.
    FrameReady(CameraFrame),

    /// Frame delivery was paused in response to `Stop`.
    Stopped,

    /// An error occurred during acquisition.
    Error(String),
}

/// Handle to an acquisition task running in the background.
pub struct AsyncCamera {
    /// Channel for sending commands to the acquisition task.
    command_tx: mpsc::UnboundedSender<CameraCommand>,

    /// Channel for receiving events from the acquisition task.
    /// Bounded so frames cannot accumulate faster than the UI consumes them.
    event_rx: mpsc::Receiver<CameraEvent>,
}

impl AsyncCamera {
    /// Spawns the acquisition task for the given feed settings.
    ///
    /// Commands travel over an unbounded channel (the UI must never block);
    /// events over a bounded channel of capacity 2 for backpressure.
    pub fn new(settings: FeedSettings) -> Result<Self> {
        settings.validate()?;

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel(2);

        tokio::spawn(acquisition_loop(settings, command_rx, event_tx));

        Ok(Self {
            command_tx,
            event_rx,
        })
    }

    /// Sends a command to the acquisition task.
    pub fn send_command(&self, command: CameraCommand) -> Result<()> {
        self.command_tx
            .send(command)
            .map_err(|_| Error::Camera(CameraError::Disconnected))
    }

    /// Receives the next event from the acquisition task (blocking).
    ///
    /// Returns `None` if the task has terminated.
    pub async fn recv_event(&mut self) -> Option<CameraEvent> {
        self.event_rx.recv().await
    }
}

/// Produces frames at the configured rate until the UI drops its handle.
async fn acquisition_loop(
    settings: FeedSettings,
    mut command_rx: mpsc::UnboundedReceiver<CameraCommand>,
    event_tx: mpsc::Sender<CameraEvent>,
) {
    let pattern = TestPattern::new(settings.width, settings.height);
    let mut ticker = tokio::time::interval(settings.frame_interval());
    // Skip missed ticks instead of bursting when the UI falls behind.
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let mut running = true;
    let mut sequence: u64 = 0;

    loop {
        tokio::select! {
            cmd = command_rx.recv() => {
                match cmd {
                    Some(CameraCommand::Start) => {
                        running = true;
                    }
                    Some(CameraCommand::Stop) => {
                        running = false;
                        if event_tx.send(CameraEvent::Stopped).await.is_err() {
                            break;
                        }
                    }
                    // All command senders dropped: the session is over.
                    None => break,
                }
            }

            _ = ticker.tick() => {
                if !running {
                    continue;
                }
                let frame = pattern.frame(sequence);
                sequence += 1;
                if event_tx.send(CameraEvent::FrameReady(frame)).await.is_err() {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_settings() -> FeedSettings {
        FeedSettings {
            width: 32,
            height: 16,
            fps: 60,
        }
    }

    #[test]
    fn default_settings_are_valid() {
        assert!(FeedSettings::default().validate().is_ok());
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let settings = FeedSettings {
            width: 0,
            height: 480,
            fps: 30,
        };
        assert!(matches!(
            settings.validate(),
            Err(Error::Camera(CameraError::InvalidResolution))
        ));
    }

    #[test]
    fn out_of_range_fps_is_rejected() {
        let settings = FeedSettings {
            fps: 0,
            ..FeedSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn frame_interval_matches_fps() {
        let settings = FeedSettings {
            fps: 25,
            ..FeedSettings::default()
        };
        assert_eq!(settings.frame_interval(), Duration::from_millis(40));
    }

    #[tokio::test]
    async fn camera_delivers_sequenced_frames() {
        let mut camera = AsyncCamera::new(small_settings()).expect("failed to spawn camera");

        let first = camera.recv_event().await.expect("camera task ended");
        match first {
            CameraEvent::FrameReady(frame) => {
                assert_eq!(frame.sequence, 0);
                assert_eq!(frame.width, 32);
                assert_eq!(frame.height, 16);
            }
            other => panic!("expected a frame, got {:?}", other),
        }

        let second = camera.recv_event().await.expect("camera task ended");
        match second {
            CameraEvent::FrameReady(frame) => assert_eq!(frame.sequence, 1),
            other => panic!("expected a frame, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn stop_command_pauses_delivery() {
        let mut camera = AsyncCamera::new(small_settings()).expect("failed to spawn camera");
        camera
            .send_command(CameraCommand::Stop)
            .expect("command channel closed");

        // A frame already in flight may precede the Stopped acknowledgement.
        loop {
            match camera.recv_event().await.expect("camera task ended") {
                CameraEvent::Stopped => break,
                CameraEvent::FrameReady(_) => continue,
                CameraEvent::Error(e) => panic!("unexpected error: {}", e),
            }
        }
    }

    #[tokio::test]
    async fn invalid_settings_fail_before_spawning() {
        let settings = FeedSettings {
            width: 8, // below MIN_FEED_DIMENSION
            height: 16,
            fps: 30,
        };
        assert!(AsyncCamera::new(settings).is_err());
    }
}
