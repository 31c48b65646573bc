use std::rc::Rc;

use shared::{BirthDate, BirthDateStore, ElapsedTime, LivedTimeWidget, Publisher, SystemClock, WidgetConfig};
use yew::prelude::*;

use crate::services::logging::Logger;
use crate::services::storage::open_store;
use crate::services::ticker::GlooTicker;

type BrowserWidget = LivedTimeWidget<Box<dyn BirthDateStore>, GlooTicker, SystemClock>;

#[derive(Clone, PartialEq)]
pub struct LivedTimeState {
    pub elapsed: Option<ElapsedTime>,
    pub birth_date: Option<BirthDate>,
    pub prompt_open: bool,
    /// Why the last submission was rejected
    pub input_error: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct UseLivedTimeActions {
    pub submit: Callback<String>,
    pub clear: Callback<()>,
    pub cancel: Callback<()>,
    pub open_prompt: Callback<()>,
}

pub struct UseLivedTimeResult {
    pub state: LivedTimeState,
    pub actions: UseLivedTimeActions,
}

/// Owns the widget controller for the lifetime of the component
///
/// Initializes once on mount and disposes on unmount, so no interval outlives
/// the view. Ticks publish straight into component state.
#[hook]
pub fn use_lived_time(config: &WidgetConfig) -> UseLivedTimeResult {
    let elapsed = use_state(|| Option::<ElapsedTime>::None);
    let birth_date = use_state(|| Option::<BirthDate>::None);
    let prompt_open = use_state(|| false);
    let input_error = use_state(|| Option::<String>::None);

    let widget = {
        let elapsed = elapsed.clone();
        let config = config.clone();
        use_mut_ref(move || {
            let store = open_store(&config.storage_key);
            let publish: Publisher = Rc::new(move |value| elapsed.set(value));
            BrowserWidget::new(config, store, GlooTicker, SystemClock, publish)
        })
    };

    // Mirror the controller's view-relevant state into component state
    let sync = {
        let birth_date = birth_date.clone();
        let prompt_open = prompt_open.clone();
        Rc::new(move |widget: &BrowserWidget| {
            birth_date.set(widget.birth_date());
            prompt_open.set(widget.prompt_open());
        })
    };

    {
        let widget = widget.clone();
        let sync = sync.clone();
        use_effect_with((), move |_| {
            let restored = widget.borrow_mut().initialize();
            match restored {
                Some(date) => Logger::info_with_component("lived-time", &format!("tracking time since {date}")),
                None => Logger::info_with_component("lived-time", "waiting for a birth date"),
            }
            sync(&*widget.borrow());

            move || widget.borrow_mut().dispose()
        });
    }

    let submit = {
        let widget = widget.clone();
        let sync = sync.clone();
        let input_error = input_error.clone();
        use_callback((), move |input: String, _| {
            let result = widget.borrow_mut().submit(&input);
            match result {
                Ok(_) => input_error.set(None),
                Err(e) => {
                    Logger::debug_with_component("lived-time", &format!("submit rejected: {e}"));
                    input_error.set(Some(e.to_string()));
                }
            }
            sync(&*widget.borrow());
        })
    };

    let clear = {
        let widget = widget.clone();
        let sync = sync.clone();
        let input_error = input_error.clone();
        use_callback((), move |_: (), _| {
            widget.borrow_mut().clear();
            input_error.set(None);
            sync(&*widget.borrow());
        })
    };

    let cancel = {
        let widget = widget.clone();
        let sync = sync.clone();
        let input_error = input_error.clone();
        use_callback((), move |_: (), _| {
            widget.borrow_mut().cancel();
            input_error.set(None);
            sync(&*widget.borrow());
        })
    };

    let open_prompt = {
        let widget = widget.clone();
        let sync = sync.clone();
        use_callback((), move |_: (), _| {
            widget.borrow_mut().open_prompt();
            sync(&*widget.borrow());
        })
    };

    UseLivedTimeResult {
        state: LivedTimeState {
            elapsed: *elapsed,
            birth_date: *birth_date,
            prompt_open: *prompt_open,
            input_error: (*input_error).clone(),
        },
        actions: UseLivedTimeActions {
            submit,
            clear,
            cancel,
            open_prompt,
        },
    }
}
