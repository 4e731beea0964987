//! Per-key override state and edge dispatch
//!
//! A pressed key shows a fixed accent color instead of the animated field.
//! The override is set on the Rising edge and cleared on the Falling edge of
//! the same key; nothing else writes it.

use crate::color::Rgb;
use crate::config::ACCENT_COLOR;
use crate::key::{Edge, KEY_COUNT, Key, KeyEvent};

/// Function invoked for every edge event of a registered key
pub type EventCallback = fn(&mut KeyStates, KeyEvent);

/// Override colors of all keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStates {
    overrides: [Option<Rgb>; KEY_COUNT],
    accent: Rgb,
}

impl KeyStates {
    /// All keys animated, pressed keys will show `accent`
    pub const fn new(accent: Rgb) -> Self {
        Self {
            overrides: [None; KEY_COUNT],
            accent,
        }
    }

    /// Override color of the key, if any
    pub const fn override_color(&self, key: Key) -> Option<Rgb> {
        self.overrides[key.position()]
    }

    pub const fn accent(&self) -> Rgb {
        self.accent
    }

    /// Number of keys currently overridden
    pub fn pressed_count(&self) -> usize {
        self.overrides.iter().filter(|o| o.is_some()).count()
    }
}

impl Default for KeyStates {
    fn default() -> Self {
        Self::new(ACCENT_COLOR)
    }
}

/// Apply an edge event to the key it addresses
///
/// Rising sets the accent override, Falling clears it. Repeating an edge is
/// a no-op.
pub fn handle_event(states: &mut KeyStates, event: KeyEvent) {
    let slot = &mut states.overrides[event.key.position()];
    match event.edge {
        Edge::Rising => *slot = Some(states.accent),
        Edge::Falling => *slot = None,
    }
    log::debug!("key {} {:?}", event.key, event.edge);
}

/// Callbacks registered per key
///
/// Gateways embed this table to implement registration and dispatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallbackTable {
    callbacks: [Option<EventCallback>; KEY_COUNT],
}

impl CallbackTable {
    pub const fn new() -> Self {
        Self {
            callbacks: [None; KEY_COUNT],
        }
    }

    /// Register the callback for a key, replacing any previous one
    pub fn register(&mut self, key: Key, callback: EventCallback) {
        self.callbacks[key.position()] = Some(callback);
    }

    pub const fn is_registered(&self, key: Key) -> bool {
        self.callbacks[key.position()].is_some()
    }

    /// Run the callback registered for the event's key
    ///
    /// Returns `false` if no callback is registered; the event is dropped.
    pub fn dispatch(&self, states: &mut KeyStates, event: KeyEvent) -> bool {
        match self.callbacks[event.key.position()] {
            Some(callback) => {
                callback(states, event);
                true
            }
            None => {
                log::trace!("dropping {:?} on unregistered key {}", event.edge, event.key);
                false
            }
        }
    }
}
