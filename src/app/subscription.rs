// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::{App, Message};
use crate::camera::camera_feed;
use crate::config::STATUS_REFRESH_SECS;
use iced::{time, Subscription};
use std::time::Duration;

impl App {
    /// The camera feed plus a periodic tick for the fps readout.
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            camera_feed(self.feed_settings, self.session_id).map(Message::Feed),
            time::every(Duration::from_secs(STATUS_REFRESH_SECS)).map(Message::Tick),
        ])
    }
}
