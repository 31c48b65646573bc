use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub has_birth_date: bool,
    pub on_open_prompt: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let onclick = {
        let on_open_prompt = props.on_open_prompt.clone();
        Callback::from(move |_: MouseEvent| on_open_prompt.emit(()))
    };

    // Red "add" until a date exists, then a quiet settings button
    let (class, icon, label) = if props.has_birth_date {
        ("header-button header-button-settings", "⚙", "Change birth date")
    } else {
        ("header-button header-button-add", "+", "Set birth date")
    };

    html! {
        <header class="header">
            <button type="button" class={class} aria-label={label} title={label} onclick={onclick}>
                {icon}
            </button>
        </header>
    }
}
