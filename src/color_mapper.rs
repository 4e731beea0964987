//! Animated color field
//!
//! Each ring runs its own oscillator over the hue circle. The outer ring
//! follows a sine of elapsed time and the inner ring follows a cosine of
//! the same, so the two rings drift a quarter period apart.
//!
//! Time is the monotonic `embassy_time` clock, not a calendar clock, so the
//! starting phase after boot is arbitrary.

use embassy_time::Instant;

use crate::color::{Hsv, Rgb, float_to_byte_color, hsv_to_rgb};
use crate::config::TrellisConfig;
use crate::key::Key;
use crate::layout::{Ring, RingLayout};

/// Maps a key and a point in time to the animated color of that key
#[derive(Debug, Clone, Copy)]
pub struct ColorMapper {
    layout: RingLayout,
    cadence: f64,
    saturation: f64,
    value: f64,
}

impl ColorMapper {
    pub fn new(layout: RingLayout, config: &TrellisConfig) -> Self {
        Self {
            layout,
            cadence: config.cadence,
            saturation: config.saturation,
            value: config.value,
        }
    }

    /// Hue of the ring at the given time, in `[0.0, 1.0]`
    pub fn hue(&self, ring: Ring, now: Instant) -> f64 {
        let phase = seconds(now) * self.cadence;
        let wave = match ring {
            Ring::Outer => libm::sin(phase),
            Ring::Inner => libm::cos(phase),
        };
        (wave + 1.0) / 2.0
    }

    /// Animated color of the key at the given time
    pub fn target_color(&self, key: Key, now: Instant) -> Rgb {
        let hue = self.hue(self.layout.ring_of(key), now);
        float_to_byte_color(hsv_to_rgb(Hsv::new(hue, self.saturation, self.value)))
    }

}

#[allow(clippy::cast_precision_loss)]
fn seconds(now: Instant) -> f64 {
    now.as_micros() as f64 / 1_000_000.0
}
