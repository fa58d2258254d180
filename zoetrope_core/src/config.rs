// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration.

use core::time::Duration;

/// Construction-time options for a [`Carousel`](crate::Carousel).
///
/// Every field has a default, so partial overrides read naturally with struct
/// update syntax:
///
/// ```rust
/// use core::time::Duration;
/// use zoetrope_core::CarouselConfig;
///
/// let config = CarouselConfig {
///     auto_play_delay: Duration::from_secs(5),
///     ..CarouselConfig::default()
/// };
/// assert!(config.auto_play);
/// ```
///
/// The configuration is resolved once at construction and never re-merged;
/// changing behavior afterwards means mounting a new carousel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CarouselConfig {
    /// Start the auto-advance ticker at mount. Default `true`.
    pub auto_play: bool,
    /// Interval between auto-advances. Default 3000 ms.
    pub auto_play_delay: Duration,
    /// Render the two adjacent-slide preview regions. Default `true`.
    pub show_previews: bool,
    /// Render the dot position indicators. Default `true`.
    pub show_dots: bool,
    /// Render the prev/next arrow buttons. Default `true`.
    pub show_arrows: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_play: true,
            auto_play_delay: Duration::from_millis(3000),
            show_previews: true,
            show_dots: true,
            show_arrows: true,
        }
    }
}
