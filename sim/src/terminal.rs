//! Terminal stand-in for the key matrix
//!
//! Staged colors are drawn as a 4x4 grid of truecolor blocks on every sync.
//! Key edges arrive through an [`EventChannel`] filled by the stdin reader.

use std::io::{self, Write};

use trellis_glow::{
    CallbackTable, DeviceError, DeviceGateway, Edge, EventCallback, EventReceiver, KEY_COUNT,
    Key, KeyStates, Rgb,
};

/// Keys per matrix row
const ROW_LEN: usize = 4;

const SAVE_CURSOR: &str = "\x1B[s";
const RESTORE_CURSOR: &str = "\x1B[u";
const CLEAR_TO_EOL: &str = "\x1B[K";

pub(crate) struct TerminalGateway<W: Write, const SIZE: usize> {
    out: W,
    events: EventReceiver<'static, SIZE>,
    callbacks: CallbackTable,
    /// Activated edges per key, rising then falling
    activated: [[bool; 2]; KEY_COUNT],
    staged: [Rgb; KEY_COUNT],
    drawn: bool,
    buf: String,
}

impl<W: Write, const SIZE: usize> TerminalGateway<W, SIZE> {
    pub(crate) fn new(out: W, events: EventReceiver<'static, SIZE>) -> Self {
        Self {
            out,
            events,
            callbacks: CallbackTable::new(),
            activated: [[false; 2]; KEY_COUNT],
            staged: [Rgb::default(); KEY_COUNT],
            drawn: false,
            buf: String::new(),
        }
    }

    fn is_activated(&self, key: Key, edge: Edge) -> bool {
        self.activated[key.position()][edge_slot(edge)]
    }

    fn render(&mut self) {
        self.buf.clear();
        // Grid is anchored at the cursor position of the first draw
        self.buf
            .push_str(if self.drawn { RESTORE_CURSOR } else { SAVE_CURSOR });
        for row in self.staged.chunks(ROW_LEN) {
            for &led in row {
                push_led(&mut self.buf, led);
            }
            self.buf.push_str(CLEAR_TO_EOL);
            self.buf.push_str("\x1B[0m\n");
        }
        self.buf.push_str(CLEAR_TO_EOL);
    }
}

impl<W: Write, const SIZE: usize> DeviceGateway for TerminalGateway<W, SIZE> {
    fn activate_key(&mut self, key: Key, edge: Edge) {
        self.activated[key.position()][edge_slot(edge)] = true;
    }

    fn register_callback(&mut self, key: Key, handler: EventCallback) {
        self.callbacks.register(key, handler);
    }

    fn poll_events(&mut self, states: &mut KeyStates) -> Result<usize, DeviceError> {
        let mut dispatched = 0;
        while let Some(event) = self.events.try_receive() {
            if !self.is_activated(event.key, event.edge) {
                log::trace!("ignoring inactive {:?} on key {}", event.edge, event.key);
                continue;
            }
            if self.callbacks.dispatch(states, event) {
                dispatched += 1;
            }
        }
        Ok(dispatched)
    }

    fn set_pixel(&mut self, key: Key, color: Rgb) {
        self.staged[key.position()] = color;
    }

    fn sync(&mut self) -> Result<(), DeviceError> {
        self.render();
        self.out
            .write_all(self.buf.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(io_to_device)?;
        self.drawn = true;
        Ok(())
    }
}

fn push_led(buf: &mut String, led: Rgb) {
    use std::fmt::Write as _;

    write!(buf, "\x1B[38;2;{};{};{}m██ ", led.r, led.g, led.b).ok();
}

const fn edge_slot(edge: Edge) -> usize {
    match edge {
        Edge::Rising => 0,
        Edge::Falling => 1,
    }
}

fn io_to_device(err: io::Error) -> DeviceError {
    match err.kind() {
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => DeviceError::Timeout,
        io::ErrorKind::BrokenPipe | io::ErrorKind::NotConnected => DeviceError::Disconnected,
        _ => DeviceError::Bus,
    }
}
