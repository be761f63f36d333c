// SPDX-License-Identifier: MPL-2.0
//! Widget holding and rendering the most recent camera frame.
//!
//! The canvas owns exactly one frame slot, overwritten whenever a new
//! frame arrives from the feed. Rendering reads the live widget bounds,
//! letterboxes the frame via [`fit`](super::fit), and issues a single
//! draw-image call; the viewport size is never cached between draws.

use super::fit;
use super::snapshot::SnapshotFrame;
use crate::camera::CameraFrame;
use iced::widget::{canvas, image, Canvas};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Size, Theme, Vector};
use std::sync::Arc;

/// Backdrop behind the letterbox margins.
const BACKDROP: Color = Color::BLACK;

/// The frame slot plus the handle Iced draws from.
struct CurrentFrame {
    handle: image::Handle,
    rgba: Arc<Vec<u8>>,
    width: u32,
    height: u32,
    sequence: u64,
}

/// Camera frame display widget.
pub struct FrameCanvas {
    frame: Option<CurrentFrame>,
}

impl FrameCanvas {
    /// Creates an empty canvas; nothing is drawn until a frame arrives.
    #[must_use]
    pub fn new() -> Self {
        Self { frame: None }
    }

    /// Replaces the displayed frame.
    ///
    /// The previous frame (if any) is dropped; there is no partial update.
    pub fn set_frame(&mut self, frame: CameraFrame) {
        let CameraFrame {
            rgba,
            width,
            height,
            sequence,
        } = frame;

        let handle = image::Handle::from_rgba(width, height, (*rgba).clone());

        self.frame = Some(CurrentFrame {
            handle,
            rgba,
            width,
            height,
            sequence,
        });
    }

    /// Clears the current frame and releases its memory.
    pub fn clear(&mut self) {
        self.frame = None;
    }

    /// Returns true if the canvas has a frame to display.
    #[must_use]
    pub fn has_frame(&self) -> bool {
        self.frame.is_some()
    }

    /// Returns the dimensions of the displayed frame, if any.
    #[must_use]
    pub fn frame_size(&self) -> Option<(u32, u32)> {
        self.frame.as_ref().map(|f| (f.width, f.height))
    }

    /// Returns the sequence number of the displayed frame, if any.
    #[must_use]
    pub fn frame_sequence(&self) -> Option<u64> {
        self.frame.as_ref().map(|f| f.sequence)
    }

    /// Returns the displayed frame for snapshot export.
    #[must_use]
    pub fn snapshot_frame(&self) -> Option<SnapshotFrame> {
        self.frame
            .as_ref()
            .map(|f| SnapshotFrame::new(Arc::clone(&f.rgba), f.width, f.height))
    }

    /// Renders the frame letterboxed into the available area.
    pub fn view<Message: 'static>(&self) -> Element<'_, Message> {
        let program = FitProgram {
            frame: self.frame.as_ref().map(|f| (f.handle.clone(), f.width, f.height)),
        };

        Canvas::new(program)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl Default for FrameCanvas {
    fn default() -> Self {
        Self::new()
    }
}

/// Canvas program that performs the letterboxed draw.
struct FitProgram {
    frame: Option<(image::Handle, u32, u32)>,
}

impl<Message> canvas::Program<Message> for FitProgram {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), BACKDROP);

        let Some((handle, width, height)) = &self.frame else {
            return vec![frame.into_geometry()];
        };

        // Viewport read fresh from the live bounds on every draw; a window
        // resize changes the placement without a new frame arriving.
        let Some(place) = fit::fit(
            bounds.width,
            bounds.height,
            *width as f32,
            *height as f32,
        ) else {
            return vec![frame.into_geometry()];
        };

        // Placement offsets are relative to the viewport center.
        frame.translate(Vector::new(bounds.width / 2.0, bounds.height / 2.0));
        frame.draw_image(
            Rectangle::new(
                Point::new(place.x as f32, place.y as f32),
                Size::new(place.width, place.height),
            ),
            canvas::Image::new(handle.clone()),
        );

        vec![frame.into_geometry()]
    }
}
