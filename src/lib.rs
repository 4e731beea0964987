#![no_std]

pub mod channel;
pub mod color;
pub mod color_mapper;
pub mod compositor;
pub mod config;
pub mod error;
pub mod key;
pub mod key_state;
pub mod layout;
pub mod render_loop;

pub use channel::{EventChannel, EventReceiver, EventSender, QueueFull};
pub use color::{FloatColor, Hsv, Rgb, float_to_byte_color, hsv_to_rgb};
pub use color_mapper::ColorMapper;
pub use compositor::{Frame, compose};
pub use config::{ACCENT_COLOR, FRAME_RATE, TICK_INTERVAL, TrellisConfig};
pub use error::{ConfigurationError, DeviceError, Error};
pub use key::{Edge, KEY_COUNT, Key, KeyEvent};
pub use key_state::{CallbackTable, EventCallback, KeyStates, handle_event};
pub use layout::{INNER_RING, OUTER_RING, Ring, RingLayout, RingSets};
pub use render_loop::{RenderLoop, TickResult};

pub use embassy_time::{Duration, Instant};

/// Hardware driver of the key matrix
///
/// Implement this trait to support a board. The render loop is generic over
/// it and is its only user.
pub trait DeviceGateway {
    /// Enable reporting of one edge kind for a key
    fn activate_key(&mut self, key: Key, edge: Edge);

    /// Set the function to run for edge events of a key
    fn register_callback(&mut self, key: Key, handler: EventCallback);

    /// Run registered callbacks for all pending, activated events
    ///
    /// Must not block waiting for events. Returns how many events were
    /// dispatched.
    fn poll_events(&mut self, states: &mut KeyStates) -> Result<usize, DeviceError>;

    /// Stage a key color; it shows up on the next [`sync`](Self::sync)
    fn set_pixel(&mut self, key: Key, color: Rgb);

    /// Push staged colors to the hardware
    fn sync(&mut self) -> Result<(), DeviceError>;
}
