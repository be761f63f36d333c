// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Feed**: Test pattern resolution and frame rate bounds
//! - **Status**: Status bar refresh interval

// ==========================================================================
// Feed Defaults
// ==========================================================================

/// Default frame width produced by the built-in test pattern source.
pub const DEFAULT_FEED_WIDTH: u32 = 1280;

/// Default frame height produced by the built-in test pattern source.
pub const DEFAULT_FEED_HEIGHT: u32 = 720;

/// Minimum accepted frame dimension (width or height).
pub const MIN_FEED_DIMENSION: u32 = 16;

/// Maximum accepted frame dimension (width or height).
pub const MAX_FEED_DIMENSION: u32 = 8192;

/// Default frame rate of the feed, in frames per second.
pub const DEFAULT_FEED_FPS: u32 = 30;

/// Minimum accepted frame rate.
pub const MIN_FEED_FPS: u32 = 1;

/// Maximum accepted frame rate.
pub const MAX_FEED_FPS: u32 = 240;

// ==========================================================================
// Status Defaults
// ==========================================================================

/// Interval between fps readout refreshes (in seconds).
pub const STATUS_REFRESH_SECS: u64 = 1;
