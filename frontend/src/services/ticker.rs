use std::time::Duration;

use gloo::timers::callback::Interval;
use shared::Ticker;

/// Browser timers via `setInterval`; dropping the `Interval` clears it
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTicker;

impl Ticker for GlooTicker {
    type Handle = Interval;

    fn every(&self, period: Duration, on_tick: Box<dyn FnMut()>) -> Interval {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        Interval::new(millis, on_tick)
    }
}
