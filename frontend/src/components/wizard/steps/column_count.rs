use common::model::sequence::{MAX_COLUMNS, MIN_COLUMNS};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::wizard::{Msg, TableWizardComponent};

pub fn column_count_step(component: &TableWizardComponent, link: &Scope<TableWizardComponent>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitColumnCount
    });
    let oninput = link.callback(|e: InputEvent| {
        Msg::SetColumnCount(e.target_unchecked_into::<HtmlInputElement>().value())
    });

    html! {
        <form class="wizard-form" {onsubmit}>
            <div class="field">
                <label for="column-count">{"How many columns do you need?"}</label>
                <input
                    id="column-count"
                    type="number"
                    min={MIN_COLUMNS.to_string()}
                    max={MAX_COLUMNS.to_string()}
                    value={component.column_count_input.clone()}
                    {oninput}
                />
                <p class="muted">{ format!("Enter a number between {} and {}", MIN_COLUMNS, MAX_COLUMNS) }</p>
            </div>
            <button type="submit" class="btn primary">{"Continue"}</button>
        </form>
    }
}
