// Copyright 2025 the Lintrans Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunable values for a visualizer session.

use crate::{geometry::Sprite, integrator::Rates};

/// Session configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Rates for held actions.
    pub rates: Rates,
    /// Frames per second the tick loop aims for.
    pub target_fps: u32,
    /// Half the side length of the sprite square.
    pub sprite_half_extent: f64,
}

impl Config {
    /// Replace the rates.
    #[must_use]
    pub fn with_rates(mut self, rates: Rates) -> Self {
        self.rates = rates;
        self
    }

    /// Replace the target frame rate.
    #[must_use]
    pub fn with_target_fps(mut self, target_fps: u32) -> Self {
        self.target_fps = target_fps;
        self
    }

    /// Replace the sprite size.
    #[must_use]
    pub fn with_sprite_half_extent(mut self, half_extent: f64) -> Self {
        self.sprite_half_extent = half_extent;
        self
    }

    /// The sprite described by this configuration.
    pub fn sprite(&self) -> Sprite {
        Sprite::square(self.sprite_half_extent)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rates: Rates::default(),
            target_fps: 60,
            sprite_half_extent: Sprite::DEFAULT_HALF_EXTENT,
        }
    }
}
