use shared::{DisplayView, ElapsedTime, Layout};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LivedTimeDisplayProps {
    pub elapsed: Option<ElapsedTime>,
    pub layout: Layout,
    /// Shown while no birth date is set
    pub placeholder: AttrValue,
}

#[function_component(LivedTimeDisplay)]
pub fn lived_time_display(props: &LivedTimeDisplayProps) -> Html {
    let view = DisplayView::render(props.elapsed.as_ref(), props.layout, &props.placeholder);

    let layout_class = match props.layout {
        Layout::Wide => "lived-time lived-time-wide",
        Layout::Compact => "lived-time lived-time-compact",
    };

    html! {
        <main class={layout_class}>
            <h1 class="lived-time-headline">{view.headline}</h1>
            {if let Some(subline) = view.subline {
                html! { <p class="lived-time-subline"><b>{subline}</b></p> }
            } else {
                html! {}
            }}
        </main>
    }
}
