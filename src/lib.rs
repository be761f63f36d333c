// SPDX-License-Identifier: MPL-2.0
//! `camview` is a live camera viewer built with the Iced GUI framework.
//!
//! It displays frames pushed by an acquisition pipeline, letterboxed and
//! centered inside the window, and demonstrates internationalization with
//! Fluent, user preference management, and modular UI design.

pub mod app;
pub mod camera;
pub mod config;
pub mod display;
pub mod error;
pub mod i18n;
