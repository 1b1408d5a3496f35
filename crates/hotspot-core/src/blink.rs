//! Cosmetic marker blink.
//!
//! A background thread flips a shared phase on a fixed period, independent of
//! the frame loop. The scene host reads the phase when building marker colors.
//! The thread lives exactly as long as its [`BlinkTimer`] guard.

use crate::marker::MarkerColor;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Shared red/green phase. Cloning shares the same underlying flag.
#[derive(Clone, Debug, Default)]
pub struct BlinkPhase {
    green: Arc<AtomicBool>,
}

impl BlinkPhase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(&self) -> MarkerColor {
        if self.green.load(Ordering::Relaxed) {
            MarkerColor::Green
        } else {
            MarkerColor::Red
        }
    }

    pub fn set(&self, color: MarkerColor) {
        self.green
            .store(color == MarkerColor::Green, Ordering::Relaxed);
    }

    /// Flip the phase and return the new color.
    pub fn toggle(&self) -> MarkerColor {
        let was_green = self.green.fetch_xor(true, Ordering::Relaxed);
        let previous = if was_green {
            MarkerColor::Green
        } else {
            MarkerColor::Red
        };
        previous.toggled()
    }
}

/// Shortest period the timer runs at. Shorter requests are raised to this.
pub const MIN_BLINK_PERIOD: Duration = Duration::from_millis(1);

/// Running blink thread. Dropping it stops and joins the thread.
pub struct BlinkTimer {
    period: Duration,
    stop_tx: Option<mpsc::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl BlinkTimer {
    pub fn start(period: Duration, phase: BlinkPhase) -> std::io::Result<Self> {
        // a zero timeout would turn recv_timeout into a busy loop
        let period = period.max(MIN_BLINK_PERIOD);
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let handle = thread::Builder::new()
            .name("marker-blink".into())
            .spawn(move || loop {
                match stop_rx.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => {
                        let color = phase.toggle();
                        log::trace!("marker blink -> {:?}", color);
                    }
                    // explicit stop or the guard was dropped
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            })?;
        log::debug!("marker blink started ({} ms)", period.as_millis());
        Ok(Self {
            period,
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        })
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }

    /// Signal the thread and wait for it to exit. Idempotent.
    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("marker blink thread panicked");
            }
            log::debug!("marker blink stopped");
        }
    }
}

impl Drop for BlinkTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
