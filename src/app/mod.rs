// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the camera feed, the display canvas,
//! and localization, and translates messages into side effects like
//! config persistence or snapshot export. Policy decisions (window
//! geometry, feed settings resolution from config and CLI) stay close to
//! the main update loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::camera::{CameraCommandSender, FeedSettings};
use crate::config::{self, Config, ThemeMode};
use crate::display::FrameCanvas;
use crate::error::CameraError;
use crate::i18n::fluent::I18n;
use iced::{window, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 320;
pub const MIN_WINDOW_HEIGHT: u32 = 240;

/// Status-line notices disappear after this many fps ticks.
const NOTICE_TIMEOUT_TICKS: u64 = 5;

/// Root Iced application state bridging the camera feed, the display
/// canvas, localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    /// Geometry and rate the feed was started with.
    feed_settings: FeedSettings,
    /// Bumped whenever the feed must be recreated from scratch.
    session_id: u64,
    /// The frame slot; written only from `App::update`.
    canvas: FrameCanvas,
    /// Pause/resume handle, present once the feed has started.
    feed_commands: Option<CameraCommandSender>,
    paused: bool,
    /// Frames received since the feed started.
    frame_count: u64,
    /// Frames received since the last fps tick.
    frames_since_tick: u64,
    measured_fps: f32,
    last_error: Option<CameraError>,
    /// Transient status-line notice (e.g. snapshot destination).
    notice: Option<String>,
    /// Ticks elapsed since the current notice appeared.
    notice_ticks: u64,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("feed_settings", &self.feed_settings)
            .field("paused", &self.paused)
            .field("frame_count", &self.frame_count)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from persisted config and CLI flags.
    fn new(flags: Flags) -> (Self, iced::Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut feed_settings = FeedSettings {
            width: config.feed.width.unwrap_or(config::DEFAULT_FEED_WIDTH),
            height: config.feed.height.unwrap_or(config::DEFAULT_FEED_HEIGHT),
            fps: config.feed.fps.unwrap_or(config::DEFAULT_FEED_FPS),
        };
        if let Some((width, height)) = flags.resolution.as_deref().and_then(parse_resolution) {
            feed_settings.width = width;
            feed_settings.height = height;
        }
        if let Some(fps) = flags.fps {
            feed_settings.fps = fps;
        }
        if let Err(e) = feed_settings.validate() {
            eprintln!("Ignoring unsupported feed settings: {}", e);
            feed_settings = FeedSettings::default();
        }

        let theme_mode = config.general.theme_mode;

        let app = App {
            i18n,
            config,
            theme_mode,
            feed_settings,
            session_id: 0,
            canvas: FrameCanvas::new(),
            feed_commands: None,
            paused: false,
            frame_count: 0,
            frames_since_tick: 0,
            measured_fps: 0.0,
            last_error: None,
            notice: None,
            notice_ticks: 0,
        };

        (app, iced::Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Parses a `WIDTHxHEIGHT` argument such as `1280x720`.
fn parse_resolution(value: &str) -> Option<(u32, u32)> {
    let (width, height) = value.split_once(['x', 'X'])?;
    Some((width.trim().parse().ok()?, height.trim().parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_resolution_accepts_lower_and_upper_x() {
        assert_eq!(parse_resolution("1280x720"), Some((1280, 720)));
        assert_eq!(parse_resolution("640X480"), Some((640, 480)));
    }

    #[test]
    fn parse_resolution_rejects_garbage() {
        assert_eq!(parse_resolution("1280"), None);
        assert_eq!(parse_resolution("axb"), None);
        assert_eq!(parse_resolution("1280x"), None);
    }

    #[test]
    fn window_defaults_are_above_minimums() {
        assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
        assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
    }
}
