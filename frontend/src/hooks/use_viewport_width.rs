use gloo::events::EventListener;
use yew::prelude::*;

/// Current `window.innerWidth` in CSS pixels, or 0 when unknown
pub fn current_viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

/// Viewport width that re-renders the component on window resize
#[hook]
pub fn use_viewport_width() -> f64 {
    let width = use_state_eq(current_viewport_width);

    {
        let width = width.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_| {
                    width.set(current_viewport_width());
                })
            });

            // Listener is removed when dropped
            move || drop(listener)
        });
    }

    *width
}
