//! Bounded key event queue for `no_std` environments.
//!
//! Gateways that learn about key edges outside of the render loop (an
//! interrupt handler, a reader thread) push them here and drain the queue
//! from `poll_events`. Access is guarded by `critical-section`, so both
//! sides may live in different execution contexts.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::key::KeyEvent;

/// Error returned when the queue is full; carries the rejected event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull(pub KeyEvent);

/// A bounded, interrupt-safe FIFO of key events.
pub struct EventChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<KeyEvent, SIZE>>>,
}

impl<const SIZE: usize> EventChannel<SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Producer handle for this channel.
    pub const fn sender(&self) -> EventSender<'_, SIZE> {
        EventSender { channel: self }
    }

    /// Consumer handle for this channel.
    pub const fn receiver(&self) -> EventReceiver<'_, SIZE> {
        EventReceiver { channel: self }
    }

    /// Queue an event.
    pub fn try_send(&self, event: KeyEvent) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(event).map_err(QueueFull)
        })
    }

    /// Take the oldest queued event, if any. Never blocks.
    pub fn try_receive(&self) -> Option<KeyEvent> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for EventChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer side of an [`EventChannel`].
#[derive(Clone, Copy)]
pub struct EventSender<'a, const SIZE: usize> {
    channel: &'a EventChannel<SIZE>,
}

impl<const SIZE: usize> EventSender<'_, SIZE> {
    pub fn try_send(&self, event: KeyEvent) -> Result<(), QueueFull> {
        self.channel.try_send(event)
    }
}

/// Consumer side of an [`EventChannel`].
#[derive(Clone, Copy)]
pub struct EventReceiver<'a, const SIZE: usize> {
    channel: &'a EventChannel<SIZE>,
}

impl<const SIZE: usize> EventReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Option<KeyEvent> {
        self.channel.try_receive()
    }

    /// Iterate over queued events until the channel is empty.
    pub fn drain(&self) -> impl Iterator<Item = KeyEvent> + '_ {
        core::iter::from_fn(move || self.try_receive())
    }
}
