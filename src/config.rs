use embassy_time::Duration;

use crate::color::Rgb;
use crate::layout::RingSets;

/// Color shown on a key while it is held down
pub const ACCENT_COLOR: Rgb = Rgb { r: 255, g: 0, b: 127 };

/// Oscillator speed, in radians per second
pub const DEFAULT_CADENCE: f64 = 0.25;

/// Saturation and value of the animated field
pub const DEFAULT_SATURATION: f64 = 0.8;
pub const DEFAULT_VALUE: f64 = 0.8;

/// Nominal frame rate of the board
///
/// Declared for reference only, the loop paces itself with [`TICK_INTERVAL`].
pub const FRAME_RATE: u32 = 30;

/// Pause between two ticks of the render loop
pub const TICK_INTERVAL: Duration = Duration::from_millis(20);

/// Configuration for the render loop
#[derive(Debug, Clone, Copy)]
pub struct TrellisConfig {
    /// Ring definitions, validated at startup
    pub rings: RingSets,
    /// Override color for pressed keys
    pub accent: Rgb,
    /// Oscillator speed of both rings
    pub cadence: f64,
    pub saturation: f64,
    pub value: f64,
    /// Sleep between ticks
    pub tick_interval: Duration,
}

impl TrellisConfig {
    pub const DEFAULT: TrellisConfig = TrellisConfig {
        rings: RingSets::DEFAULT,
        accent: ACCENT_COLOR,
        cadence: DEFAULT_CADENCE,
        saturation: DEFAULT_SATURATION,
        value: DEFAULT_VALUE,
        tick_interval: TICK_INTERVAL,
    };
}

impl Default for TrellisConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
