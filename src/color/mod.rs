mod float;

pub use float::{FloatColor, Hsv, float_to_byte_color, hsv_to_rgb};
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
