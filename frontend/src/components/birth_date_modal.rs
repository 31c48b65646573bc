use shared::BirthDate;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BirthDateModalProps {
    pub is_open: bool,
    pub title: AttrValue,
    pub message: AttrValue,
    /// Date currently in effect, pre-filled into the input
    pub current_date: Option<BirthDate>,
    pub error: Option<String>,
    pub on_submit: Callback<String>,
    pub on_clear: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(BirthDateModal)]
pub fn birth_date_modal(props: &BirthDateModalProps) -> Html {
    let draft = use_state(String::new);

    // Reset the draft to the active date whenever the modal opens
    use_effect_with((props.is_open, props.current_date), {
        let draft = draft.clone();
        move |(is_open, current_date)| {
            if *is_open {
                draft.set(current_date.map(|date| date.to_iso_string()).unwrap_or_default());
            }
            || ()
        }
    });

    let on_date_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*draft).clone());
        })
    };

    let on_clear = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| on_clear.emit(()))
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let on_backdrop_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_cancel.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="birth-date-modal-backdrop" onclick={on_backdrop_click}>
            <div class="birth-date-modal" role="alertdialog" onclick={on_modal_click}>
                <div class="birth-date-modal-header">
                    <h3 class="birth-date-title">{props.title.clone()}</h3>
                    <button
                        type="button"
                        class="birth-date-close"
                        aria-label="Close"
                        onclick={on_cancel.clone()}
                    >
                        {"×"}
                    </button>
                </div>

                <form class="birth-date-form" onsubmit={on_submit}>
                    <label for="birth-date-input">{props.message.clone()}</label>
                    <input
                        id="birth-date-input"
                        type="date"
                        class="birth-date-input"
                        value={(*draft).clone()}
                        onchange={on_date_change}
                        autofocus=true
                    />

                    {if let Some(error) = props.error.clone() {
                        html! { <div class="birth-date-error">{error}</div> }
                    } else {
                        html! {}
                    }}

                    <div class="birth-date-buttons">
                        <button type="button" class="btn btn-danger" onclick={on_clear}>
                            {"Clear"}
                        </button>
                        <div class="birth-date-buttons-right">
                            <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                                {"Cancel"}
                            </button>
                            <button type="submit" class="btn btn-primary">
                                {"Done"}
                            </button>
                        </div>
                    </div>
                </form>
            </div>
        </div>
    }
}
