//! Host simulator for trellis-glow
//!
//! Draws the key matrix in the terminal. Type a key index (0-15) and press
//! enter to press that key; enter it again to release it. Ctrl-C turns the
//! keys off and exits.

use std::io::{self, BufRead};
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use spin_sleep::SpinSleeper;
use trellis_glow::{
    Duration, Error, EventChannel, EventSender, Instant, KEY_COUNT, Key, KeyEvent, RenderLoop,
    TrellisConfig,
};

mod terminal;

use terminal::TerminalGateway;

/// Key events that can wait for the next tick
const EVENT_QUEUE_SIZE: usize = 32;

/// Exit code for an unrecoverable device failure
const EXIT_DEVICE: u8 = 1;

/// Exit code for an invalid ring layout
const EXIT_CONFIGURATION: u8 = 2;

/// Key edges from the stdin reader to the gateway
static EVENTS: EventChannel<EVENT_QUEUE_SIZE> = EventChannel::new();

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cancelled = Arc::new(AtomicBool::new(false));
    let flag = cancelled.clone();
    if let Err(err) = ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)) {
        log::error!("failed to set interrupt handler: {}", err);
        return ExitCode::FAILURE;
    }

    let sender = EVENTS.sender();
    if let Err(err) = thread::Builder::new()
        .name("key input".into())
        .spawn(move || read_keys(sender))
    {
        log::error!("failed to spawn key input thread: {}", err);
        return ExitCode::FAILURE;
    }

    match run(&cancelled) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Drive the terminal board until interrupted
///
/// Keys are turned off on the way out, also after a device failure.
fn run(cancelled: &AtomicBool) -> Result<(), Error> {
    let gateway = TerminalGateway::new(io::stdout(), EVENTS.receiver());
    let mut render_loop = RenderLoop::new(gateway, &TrellisConfig::DEFAULT)?;

    let sleeper = SpinSleeper::default();
    let result = render_loop.run(
        Instant::now,
        |duration: Duration| sleeper.sleep(std::time::Duration::from_micros(duration.as_micros())),
        || cancelled.load(Ordering::SeqCst),
    );

    render_loop.shutdown();
    result?;
    Ok(())
}

const fn exit_code(err: &Error) -> u8 {
    match err {
        Error::Configuration(_) => EXIT_CONFIGURATION,
        Error::Device(_) => EXIT_DEVICE,
    }
}

/// Toggle keys from stdin, one index per line
fn read_keys(sender: EventSender<'static, EVENT_QUEUE_SIZE>) {
    let mut pressed = [false; KEY_COUNT];

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::warn!("stopped reading keys: {}", err);
                return;
            }
        };

        let Some(key) = line.trim().parse::<u8>().ok().and_then(Key::new) else {
            log::warn!("not a key index: {:?}", line.trim());
            continue;
        };

        let is_pressed = &mut pressed[key.position()];
        *is_pressed = !*is_pressed;
        let event = if *is_pressed {
            KeyEvent::rising(key)
        } else {
            KeyEvent::falling(key)
        };

        if let Err(full) = sender.try_send(event) {
            log::warn!("event queue full, dropping {:?}", full.0);
            *is_pressed = !*is_pressed;
        }
    }
}

#[cfg(test)]
mod tests {
    use trellis_glow::{ConfigurationError, DeviceError};

    use super::*;

    #[test]
    fn exit_code_follows_error_kind() {
        let unassigned = ConfigurationError::Unassigned(Key::new(6).unwrap());
        assert_eq!(exit_code(&unassigned.into()), EXIT_CONFIGURATION);
        assert_eq!(exit_code(&DeviceError::Bus.into()), EXIT_DEVICE);
    }
}
