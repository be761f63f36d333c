// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Lays out the frame canvas above a status bar with the feed readout,
//! pause/resume and snapshot controls, and the language picker.

use super::{App, Message};
use iced::widget::{button, container, pick_list, row, text, Column};
use iced::{Alignment, Element, Length};

impl App {
    /// Renders the whole window.
    pub fn view(&self) -> Element<'_, Message> {
        let mut layout = Column::new().push(self.frame_area());
        if self.config.general.show_status_bar {
            layout = layout.push(self.status_bar());
        }
        layout.width(Length::Fill).height(Length::Fill).into()
    }

    /// The canvas when frames have arrived, otherwise a waiting notice.
    fn frame_area(&self) -> Element<'_, Message> {
        if self.canvas.has_frame() {
            container(self.canvas.view())
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        } else {
            container(text(self.i18n.tr("status-waiting")))
                .center(Length::Fill)
                .into()
        }
    }

    fn status_bar(&self) -> Element<'_, Message> {
        let state_label = if self.paused {
            self.i18n.tr("status-paused")
        } else {
            self.i18n.tr("status-live")
        };

        let resolution = match self.canvas.frame_size() {
            Some((width, height)) => format!("{}\u{00d7}{}", width, height),
            None => String::from("\u{2014}"),
        };

        let pause_label = if self.paused {
            self.i18n.tr("feed-resume")
        } else {
            self.i18n.tr("feed-pause")
        };

        let mut bar = row![
            text(state_label),
            text(resolution),
            text(format!("{:.0} fps", self.measured_fps)),
            text(format!("#{}", self.frame_count)),
            button(text(pause_label)).on_press(Message::TogglePause),
            button(text(self.i18n.tr("feed-snapshot"))).on_press(Message::TakeSnapshot),
            pick_list(
                self.i18n.available_locales.clone(),
                Some(self.i18n.current_locale().clone()),
                Message::LanguageSelected,
            ),
        ]
        .spacing(12)
        .padding(8)
        .align_y(Alignment::Center);

        if let Some(error) = &self.last_error {
            bar = bar.push(text(self.i18n.tr(error.i18n_key())).style(text::danger));
        } else if let Some(notice) = &self.notice {
            bar = bar.push(text(notice.clone()));
        }

        container(bar).width(Length::Fill).into()
    }
}
