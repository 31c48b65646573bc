//! Core of the lived time widget: birth date model, elapsed-time
//! calculation, the one-second refresh scheduler and the presentation
//! controller. Nothing in this crate touches the browser; the frontend
//! supplies the timer, clock and storage implementations.

pub mod birth_date;
pub mod clock;
pub mod config;
pub mod display;
pub mod elapsed;
pub mod error;
pub mod scheduler;
pub mod store;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_utils;

pub use birth_date::BirthDate;
pub use clock::{Clock, SystemClock};
pub use config::WidgetConfig;
pub use display::{DisplayView, Layout};
pub use elapsed::{calculate, elapsed_between, elapsed_since, ElapsedTime};
pub use error::{BirthDateError, StoreError};
pub use scheduler::{RefreshScheduler, Ticker};
pub use store::{BirthDateStore, MemoryStore};
pub use widget::{LivedTimeWidget, Publisher};
