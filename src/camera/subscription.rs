// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for the camera feed.
//!
//! This module provides an Iced subscription that connects the async
//! acquisition task to the UI event loop, delivering frames and feed
//! events as messages. The UI receives a command sender first, so it can
//! pause and resume the feed without touching the task directly.

use super::frame::CameraFrame;
use super::source::{AsyncCamera, CameraCommand, CameraEvent, FeedSettings};
use iced::futures::SinkExt;
use iced::stream;
use tokio::sync::mpsc;

/// Subscription ID for the camera feed.
/// Each acquisition session gets a unique ID so the subscription is
/// recreated when the feed restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CameraFeedId(pub u64);

/// Handle for sending commands to the acquisition task from the UI.
/// This is cloneable and can be stored in the application state.
#[derive(Clone)]
pub struct CameraCommandSender {
    tx: mpsc::UnboundedSender<CameraCommand>,
}

impl CameraCommandSender {
    /// Sends a command to the acquisition task.
    pub fn send(&self, command: CameraCommand) -> Result<(), String> {
        self.tx
            .send(command)
            .map_err(|_| "Acquisition task not running".to_string())
    }
}

impl std::fmt::Debug for CameraCommandSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraCommandSender")
            .field("connected", &!self.tx.is_closed())
            .finish()
    }
}

/// Messages emitted by the camera feed subscription.
#[derive(Debug, Clone)]
pub enum FeedMessage {
    /// Subscription started, provides command sender for pause/resume.
    Started(CameraCommandSender),

    /// A new frame is ready for display.
    FrameReady(CameraFrame),

    /// The feed acknowledged a pause request.
    Stopped,

    /// An error occurred.
    Error(String),
}

/// State of the camera feed subscription.
enum State {
    /// Waiting to start.
    Idle,

    /// Acquisition is active and we have a command forwarder.
    Running {
        camera: AsyncCamera,
        external_cmd_rx: mpsc::UnboundedReceiver<CameraCommand>,
    },
}

/// Creates a camera feed subscription.
///
/// This subscription manages the acquisition task lifecycle and translates
/// camera events into Iced messages.
///
/// The `session_id` ensures each acquisition session gets a unique
/// subscription ID, allowing the subscription to be recreated when the
/// feed restarts with different settings.
///
/// The subscription sends a `Started` message with a `CameraCommandSender`
/// that can be used to pause and resume frame delivery.
pub fn camera_feed(settings: FeedSettings, session_id: u64) -> iced::Subscription<FeedMessage> {
    iced::Subscription::run_with((CameraFeedId(session_id), settings), feed_stream)
}

/// Builds the feed stream for [`camera_feed`]. The `(id, settings)` pair is
/// hashed by Iced to identify the subscription, so a new session ID or
/// changed settings recreates the stream.
fn feed_stream(
    &(_, settings): &(CameraFeedId, FeedSettings),
) -> impl iced::futures::Stream<Item = FeedMessage> + Send + 'static {
    stream::channel(
        100,
        move |mut output: iced::futures::channel::mpsc::Sender<FeedMessage>| async move {
            let mut state = State::Idle;

            loop {
                match &mut state {
                    State::Idle => {
                        // External command channel for the UI side
                        let (external_cmd_tx, external_cmd_rx) = mpsc::unbounded_channel();

                        let camera = match AsyncCamera::new(settings) {
                            Ok(camera) => camera,
                            Err(e) => {
                                let _ = output.send(FeedMessage::Error(e.to_string())).await;
                                break;
                            }
                        };

                        let sender = CameraCommandSender {
                            tx: external_cmd_tx,
                        };
                        let _ = output.send(FeedMessage::Started(sender)).await;

                        state = State::Running {
                            camera,
                            external_cmd_rx,
                        };
                    }

                    State::Running {
                        camera,
                        external_cmd_rx,
                    } => {
                        tokio::select! {
                            // Commands from the UI
                            cmd = external_cmd_rx.recv() => {
                                if let Some(command) = cmd {
                                    if let Err(e) = camera.send_command(command) {
                                        let _ = output.send(FeedMessage::Error(e.to_string())).await;
                                    }
                                }
                            }

                            // Events from the acquisition task
                            event = camera.recv_event() => {
                                if let Some(event) = event {
                                    let message = match event {
                                        CameraEvent::FrameReady(frame) => FeedMessage::FrameReady(frame),
                                        CameraEvent::Stopped => FeedMessage::Stopped,
                                        CameraEvent::Error(msg) => FeedMessage::Error(msg),
                                    };

                                    let _ = output.send(message).await;
                                } else {
                                    // Acquisition task closed, exit loop
                                    break;
                                }
                            }
                        }
                    }
                }
            }

            // Keep subscription alive but idle
            std::future::pending::<()>().await;
        },
    )
}
