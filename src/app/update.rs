// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.

use super::{App, Message};
use crate::camera::{CameraCommand, FeedMessage};
use crate::config;
use crate::error::CameraError;
use iced::Task;

impl App {
    /// Handles one message and returns any follow-up task.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Feed(feed) => self.on_feed_message(feed),

            Message::TogglePause => {
                self.toggle_pause();
                Task::none()
            }

            Message::TakeSnapshot => {
                if let Some(snapshot) = self.canvas.snapshot_frame() {
                    return Task::perform(
                        async move { snapshot.save_to_pictures() },
                        Message::SnapshotSaved,
                    );
                }
                Task::none()
            }

            Message::SnapshotSaved(Ok(path)) => {
                self.set_notice(format!(
                    "{} ({})",
                    self.i18n.tr("snapshot-saved"),
                    path.display()
                ));
                Task::none()
            }

            Message::SnapshotSaved(Err(e)) => {
                self.set_notice(format!("{}: {}", self.i18n.tr("error-snapshot"), e));
                Task::none()
            }

            Message::LanguageSelected(locale) => {
                self.i18n.set_locale(locale.clone());
                self.config.general.language = Some(locale.to_string());
                if let Err(e) = config::save(&self.config) {
                    eprintln!("Failed to persist language choice: {}", e);
                }
                Task::none()
            }

            Message::Tick(_) => {
                self.measured_fps =
                    self.frames_since_tick as f32 / config::STATUS_REFRESH_SECS as f32;
                self.frames_since_tick = 0;
                if self.notice.is_some() {
                    self.notice_ticks += 1;
                    if self.notice_ticks >= super::NOTICE_TIMEOUT_TICKS {
                        self.notice = None;
                        self.notice_ticks = 0;
                    }
                }
                Task::none()
            }
        }
    }

    fn on_feed_message(&mut self, feed: FeedMessage) -> Task<Message> {
        match feed {
            FeedMessage::Started(sender) => {
                self.feed_commands = Some(sender);
                self.paused = false;
            }

            FeedMessage::FrameReady(frame) => {
                // Single writer of the frame slot: frames cross from the
                // acquisition task as messages and land here, on the UI loop.
                self.canvas.set_frame(frame);
                self.frame_count += 1;
                self.frames_since_tick += 1;
                self.last_error = None;
            }

            FeedMessage::Stopped => {
                self.paused = true;
            }

            FeedMessage::Error(msg) => {
                self.last_error = Some(CameraError::from_message(&msg));
            }
        }
        Task::none()
    }

    fn set_notice(&mut self, notice: String) {
        self.notice = Some(notice);
        self.notice_ticks = 0;
    }

    fn toggle_pause(&mut self) {
        let Some(sender) = &self.feed_commands else {
            return;
        };
        let command = if self.paused {
            CameraCommand::Start
        } else {
            CameraCommand::Stop
        };
        match sender.send(command) {
            Ok(()) => {
                // `Stopped` will confirm the pause; resuming takes effect
                // with the next delivered frame.
                self.paused = !self.paused;
            }
            Err(msg) => {
                self.last_error = Some(CameraError::from_message(&msg));
            }
        }
    }
}
