//! # Lived Time Widget
//!
//! Presentation controller tying storage, the refresh scheduler and the
//! display together. The hosting view owns one widget, calls
//! [`LivedTimeWidget::initialize`] once on mount and
//! [`LivedTimeWidget::dispose`] on teardown; user actions map to
//! `submit`, `clear`, `cancel` and `open_prompt`.
//!
//! Every elapsed value the widget publishes is derived from the current birth
//! date and the clock at that moment.

use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::birth_date::BirthDate;
use crate::clock::Clock;
use crate::config::WidgetConfig;
use crate::display::{DisplayView, Layout};
use crate::elapsed::{elapsed_between, elapsed_since, ElapsedTime};
use crate::error::BirthDateError;
use crate::scheduler::{RefreshScheduler, Ticker};
use crate::store::BirthDateStore;

/// Receives every recomputed value; `None` means "show the placeholder"
pub type Publisher = Rc<dyn Fn(Option<ElapsedTime>)>;

pub struct LivedTimeWidget<S, T: Ticker, C> {
    config: WidgetConfig,
    store: S,
    clock: C,
    scheduler: RefreshScheduler<T, C>,
    birth_date: Option<BirthDate>,
    prompt_open: bool,
    publish: Publisher,
}

impl<S, T, C> LivedTimeWidget<S, T, C>
where
    S: BirthDateStore,
    T: Ticker,
    C: Clock + Clone + 'static,
{
    pub fn new(config: WidgetConfig, store: S, ticker: T, clock: C, publish: Publisher) -> Self {
        let scheduler = RefreshScheduler::new(ticker, clock.clone(), config.refresh_interval());
        Self {
            config,
            store,
            clock,
            scheduler,
            birth_date: None,
            prompt_open: false,
            publish,
        }
    }

    /// Load the persisted date and either start refreshing or open the prompt
    pub fn initialize(&mut self) -> Option<BirthDate> {
        let stored = match self.store.load() {
            Ok(stored) => stored,
            Err(e) => {
                warn!(error = %e, key = %self.config.storage_key, "failed to read stored birth date");
                None
            }
        };

        match stored.as_deref().map(BirthDate::parse) {
            Some(Ok(date)) => {
                info!(%date, "restored birth date");
                self.activate(date);
                Some(date)
            }
            Some(Err(e)) => {
                warn!(error = %e, "ignoring unreadable stored birth date");
                self.prompt_open = true;
                None
            }
            None => {
                debug!("no stored birth date, prompting");
                self.prompt_open = true;
                None
            }
        }
    }

    /// Persist a new birth date and restart the refresh against it
    pub fn submit(&mut self, input: &str) -> Result<ElapsedTime, BirthDateError> {
        let date = BirthDate::parse(input).inspect_err(|e| {
            debug!(error = %e, "rejected birth date input");
        })?;

        if let Err(e) = self.store.save(&date.to_iso_string()) {
            warn!(error = %e, %date, "failed to persist birth date");
        }

        info!(%date, "birth date submitted");
        let elapsed = self.activate(date);
        self.prompt_open = false;
        Ok(elapsed)
    }

    /// Forget the birth date and stop refreshing
    pub fn clear(&mut self) {
        if let Err(e) = self.store.delete() {
            warn!(error = %e, "failed to delete stored birth date");
        }

        self.birth_date = None;
        self.scheduler.stop();
        (self.publish)(None);
        self.prompt_open = false;
        info!("birth date cleared");
    }

    /// Dismiss the prompt without changing anything
    pub fn cancel(&mut self) {
        self.prompt_open = false;
    }

    pub fn open_prompt(&mut self) {
        self.prompt_open = true;
    }

    /// Elapsed time right now, derived from the current birth date
    pub fn current(&self) -> Option<ElapsedTime> {
        elapsed_since(self.birth_date.as_ref(), self.clock.now())
    }

    pub fn view(&self, layout: Layout) -> DisplayView {
        DisplayView::render(self.current().as_ref(), layout, &self.config.title)
    }

    fn activate(&mut self, date: BirthDate) -> ElapsedTime {
        self.birth_date = Some(date);

        let elapsed = elapsed_between(date.start_instant(), self.clock.now());
        (self.publish)(Some(elapsed));

        let publish = self.publish.clone();
        self.scheduler.start(date, move |elapsed| publish(Some(elapsed)));
        elapsed
    }
}

impl<S, T: Ticker, C> LivedTimeWidget<S, T, C> {
    /// Stop background refresh; called when the hosting view goes away
    pub fn dispose(&mut self) {
        if self.scheduler.stop() {
            debug!("widget disposed with refresh running");
        }
    }

    pub fn birth_date(&self) -> Option<BirthDate> {
        self.birth_date
    }

    pub fn prompt_open(&self) -> bool {
        self.prompt_open
    }

    pub fn is_ticking(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }
}
