//! # Refresh Scheduler
//!
//! Keeps exactly one repeating task alive that recomputes the elapsed time
//! for a captured birth date and hands it to a publisher. Starting a new
//! refresh always cancels the previous one first, so two timers never tick
//! for the same widget.

use std::time::Duration;

use tracing::{debug, info, trace};

use crate::birth_date::BirthDate;
use crate::clock::Clock;
use crate::elapsed::{elapsed_between, ElapsedTime};

/// Source of repeating timers
///
/// The returned handle keeps the timer alive; dropping it cancels the timer.
pub trait Ticker {
    type Handle;

    fn every(&self, period: Duration, on_tick: Box<dyn FnMut()>) -> Self::Handle;
}

struct ActiveRefresh<H> {
    date: BirthDate,
    _handle: H,
}

/// Owner of the single active refresh timer
pub struct RefreshScheduler<T: Ticker, C> {
    ticker: T,
    clock: C,
    period: Duration,
    active: Option<ActiveRefresh<T::Handle>>,
}

impl<T: Ticker, C: Clock + Clone + 'static> RefreshScheduler<T, C> {
    pub fn new(ticker: T, clock: C, period: Duration) -> Self {
        Self {
            ticker,
            clock,
            period,
            active: None,
        }
    }

    /// Begin ticking against `date`, replacing any running refresh
    pub fn start<F>(&mut self, date: BirthDate, mut publish: F)
    where
        F: FnMut(ElapsedTime) + 'static,
    {
        if self.stop() {
            debug!(%date, "replacing running refresh");
        }

        let clock = self.clock.clone();
        let birth = date.start_instant();
        let handle = self.ticker.every(
            self.period,
            Box::new(move || {
                let elapsed = elapsed_between(birth, clock.now());
                trace!(days = elapsed.days, seconds = elapsed.seconds, "tick");
                publish(elapsed);
            }),
        );

        info!(%date, period_ms = self.period.as_millis() as u64, "refresh started");
        self.active = Some(ActiveRefresh {
            date,
            _handle: handle,
        });
    }
}

impl<T: Ticker, C> RefreshScheduler<T, C> {
    /// Cancel the running refresh; returns whether one was running
    pub fn stop(&mut self) -> bool {
        match self.active.take() {
            Some(active) => {
                info!(date = %active.date, "refresh stopped");
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Date the running refresh was started with
    pub fn active_date(&self) -> Option<&BirthDate> {
        self.active.as_ref().map(|active| &active.date)
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl<T: Ticker, C> Drop for RefreshScheduler<T, C> {
    fn drop(&mut self) {
        self.stop();
    }
}
