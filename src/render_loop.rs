//! Fixed-rate render loop.
//!
//! Each tick drains pending key edges, composes the frame, writes it to the
//! gateway and flushes. The loop itself never sleeps: [`RenderLoop::tick`]
//! tells the caller how long to wait, and [`RenderLoop::run`] takes the
//! clock, the sleep and the cancellation check from the caller, so the same
//! loop runs on a board or on a host.

use embassy_time::{Duration, Instant};

use crate::DeviceGateway;
use crate::color::BLACK;
use crate::color_mapper::ColorMapper;
use crate::compositor::{Frame, compose};
use crate::config::TrellisConfig;
use crate::error::{ConfigurationError, DeviceError};
use crate::key::{Edge, KEY_COUNT, Key};
use crate::key_state::{KeyStates, handle_event};
use crate::layout::RingLayout;

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// Events dispatched before the frame was composed.
    pub events: usize,
    /// How long to wait before the next tick.
    pub sleep_duration: Duration,
}

/// Render loop context.
///
/// Owns the gateway, the override state of every key and the color mapper.
/// Nothing else writes to any of them while the loop is alive.
pub struct RenderLoop<G: DeviceGateway> {
    gateway: G,
    states: KeyStates,
    mapper: ColorMapper,
    tick_interval: Duration,
    ticks: u64,
}

impl<G: DeviceGateway> RenderLoop<G> {
    /// Validate the configuration and wire the gateway.
    ///
    /// Every key gets both edges activated and the shared event handler
    /// registered. Nothing is sent to the gateway if the ring layout is
    /// invalid.
    pub fn new(mut gateway: G, config: &TrellisConfig) -> Result<Self, ConfigurationError> {
        let layout = RingLayout::new(&config.rings)?;

        for key in Key::all() {
            for edge in Edge::ALL {
                gateway.activate_key(key, edge);
            }
            gateway.register_callback(key, handle_event);
        }
        log::info!(
            "activated {} keys, tick interval {} ms",
            KEY_COUNT,
            config.tick_interval.as_millis()
        );

        Ok(Self {
            gateway,
            states: KeyStates::new(config.accent),
            mapper: ColorMapper::new(layout, config),
            tick_interval: config.tick_interval,
            ticks: 0,
        })
    }

    /// Process one tick.
    ///
    /// Pending events are drained first, then `clock` is read, so a press
    /// shows up in the very tick it was drained. Gateway errors are returned
    /// as is.
    pub fn tick(&mut self, clock: impl FnOnce() -> Instant) -> Result<TickResult, DeviceError> {
        let events = self.gateway.poll_events(&mut self.states)?;
        let now = clock();
        let frame = compose(&self.states, &self.mapper, now);
        self.write_frame(&frame)?;
        self.ticks += 1;

        Ok(TickResult {
            events,
            sleep_duration: self.tick_interval,
        })
    }

    /// Tick until `cancelled` returns true.
    ///
    /// Cancellation is checked between ticks. The first gateway error stops
    /// the loop and is returned; no further tick runs.
    pub fn run(
        &mut self,
        mut clock: impl FnMut() -> Instant,
        mut sleep: impl FnMut(Duration),
        cancelled: impl Fn() -> bool,
    ) -> Result<(), DeviceError> {
        while !cancelled() {
            let result = self.tick(&mut clock).inspect_err(|err| {
                log::error!("render loop stopped after {} ticks: {}", self.ticks, err);
            })?;
            sleep(result.sleep_duration);
        }
        log::info!("render loop cancelled after {} ticks", self.ticks);
        Ok(())
    }

    /// Turn every key off.
    ///
    /// Best effort: a failed flush is logged and otherwise ignored.
    pub fn shutdown(&mut self) {
        match self.write_frame(&[BLACK; KEY_COUNT]) {
            Ok(()) => log::info!("all keys off"),
            Err(err) => log::warn!("failed to turn keys off: {}", err),
        }
    }

    fn write_frame(&mut self, frame: &Frame) -> Result<(), DeviceError> {
        for key in Key::all() {
            self.gateway.set_pixel(key, frame[key.position()]);
        }
        self.gateway.sync()?;
        log::trace!("frame {} flushed", self.ticks);
        Ok(())
    }

    /// Number of completed ticks.
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    pub const fn states(&self) -> &KeyStates {
        &self.states
    }

    pub const fn mapper(&self) -> &ColorMapper {
        &self.mapper
    }

    pub const fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut G {
        &mut self.gateway
    }

    /// Release the gateway.
    pub fn into_gateway(self) -> G {
        self.gateway
    }
}
