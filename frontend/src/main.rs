use shared::Layout;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::birth_date_modal::BirthDateModal;
use components::header::Header;
use components::lived_time_display::LivedTimeDisplay;
use hooks::use_lived_time::use_lived_time;
use hooks::use_viewport_width::use_viewport_width;
use services::config::load_config;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| load_config());
    let lived_time = use_lived_time(&config);
    let viewport_width = use_viewport_width();

    let layout = Layout::for_width(viewport_width, config.wide_layout_min_width_px);
    let state = lived_time.state;
    let actions = lived_time.actions;

    html! {
        <div class="app">
            <Header
                has_birth_date={state.birth_date.is_some()}
                on_open_prompt={actions.open_prompt.clone()}
            />
            <LivedTimeDisplay
                elapsed={state.elapsed}
                layout={layout}
                placeholder={config.title.clone()}
            />
            <BirthDateModal
                is_open={state.prompt_open}
                title={config.title.clone()}
                message={config.prompt_message.clone()}
                current_date={state.birth_date}
                error={state.input_error.clone()}
                on_submit={actions.submit.clone()}
                on_clear={actions.clear.clone()}
                on_cancel={actions.cancel.clone()}
            />
        </div>
    }
}

fn main() {
    services::logging::Logger::init();
    yew::Renderer::<App>::new().render();
}
