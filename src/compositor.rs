use embassy_time::Instant;

use crate::color::Rgb;
use crate::color_mapper::ColorMapper;
use crate::key::{KEY_COUNT, Key};
use crate::key_state::KeyStates;

/// One color per key, in key index order
pub type Frame = [Rgb; KEY_COUNT];

/// Resolve the displayed color of every key
///
/// Overridden keys show their override, all others show the animated color
/// at `now`.
pub fn compose(states: &KeyStates, mapper: &ColorMapper, now: Instant) -> Frame {
    let mut frame = Frame::default();
    for key in Key::all() {
        frame[key.position()] = match states.override_color(key) {
            Some(color) => color,
            None => mapper.target_color(key, now),
        };
    }
    frame
}
