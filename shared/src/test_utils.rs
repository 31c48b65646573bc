//! Deterministic clock, ticker and storage doubles for unit tests
//!
//! `ManualTicker` fires its timers only when `advance` is called, moving the
//! shared `ManualClock` to each due instant before invoking the callback, so
//! tick counts over a time window are exact.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};

use crate::clock::Clock;
use crate::elapsed::ElapsedTime;
use crate::error::StoreError;
use crate::scheduler::Ticker;
use crate::store::BirthDateStore;
use crate::widget::Publisher;

pub fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

#[derive(Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        self.now.set(instant);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

struct ManualTimer {
    id: u64,
    period: chrono::Duration,
    next_due: DateTime<Utc>,
    callback: Rc<RefCell<Box<dyn FnMut()>>>,
}

#[derive(Default)]
struct TickerState {
    next_id: u64,
    timers: Vec<ManualTimer>,
    ticks: u64,
}

#[derive(Clone)]
pub struct ManualTicker {
    state: Rc<RefCell<TickerState>>,
    clock: ManualClock,
}

/// Cancels its timer when dropped
pub struct ManualHandle {
    id: u64,
    state: Weak<RefCell<TickerState>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().timers.retain(|timer| timer.id != self.id);
        }
    }
}

impl ManualTicker {
    pub fn new(clock: ManualClock) -> Self {
        Self {
            state: Rc::new(RefCell::new(TickerState::default())),
            clock,
        }
    }

    /// Move time forward, firing every timer that comes due in order
    pub fn advance(&self, by: Duration) {
        let target = self.clock.now() + chrono::Duration::from_std(by).unwrap();

        loop {
            let due = {
                let state = self.state.borrow();
                state
                    .timers
                    .iter()
                    .filter(|timer| timer.next_due <= target)
                    .min_by_key(|timer| (timer.next_due, timer.id))
                    .map(|timer| (timer.id, timer.next_due, timer.callback.clone()))
            };
            let Some((id, at, callback)) = due else {
                break;
            };

            self.clock.set(at);
            {
                let mut state = self.state.borrow_mut();
                state.ticks += 1;
                if let Some(timer) = state.timers.iter_mut().find(|timer| timer.id == id) {
                    timer.next_due = at + timer.period;
                }
            }
            (callback.borrow_mut())();
        }

        self.clock.set(target);
    }

    pub fn active_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Callbacks fired so far across all timers
    pub fn ticks(&self) -> u64 {
        self.state.borrow().ticks
    }
}

impl Ticker for ManualTicker {
    type Handle = ManualHandle;

    fn every(&self, period: Duration, on_tick: Box<dyn FnMut()>) -> ManualHandle {
        let period = chrono::Duration::from_std(period).unwrap();
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.timers.push(ManualTimer {
            id,
            period,
            next_due: self.clock.now() + period,
            callback: Rc::new(RefCell::new(on_tick)),
        });

        ManualHandle {
            id,
            state: Rc::downgrade(&self.state),
        }
    }
}

/// Captures everything a widget publishes
#[derive(Clone, Default)]
pub struct Recorder {
    published: Rc<RefCell<Vec<Option<ElapsedTime>>>>,
}

impl Recorder {
    pub fn publisher(&self) -> Publisher {
        let published = self.published.clone();
        Rc::new(move |elapsed| published.borrow_mut().push(elapsed))
    }

    pub fn last(&self) -> Option<Option<ElapsedTime>> {
        self.published.borrow().last().copied()
    }

    pub fn count(&self) -> usize {
        self.published.borrow().len()
    }
}

/// Store whose every operation fails
pub struct BrokenStore;

impl BirthDateStore for BrokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn save(&self, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    fn delete(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}
