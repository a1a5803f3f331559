//! View rendering for the table creator wizard.
//!
//! Renders the card header, a step indicator, and the active step. Each
//! step is built by a function in `steps` taking the component and its link.

use yew::html::Scope;
use yew::prelude::*;

use super::state::{Step, TableWizardComponent};
use super::steps::{code_preview, column_count_step, column_form_step, preview_step};

pub fn view(component: &TableWizardComponent, ctx: &Context<TableWizardComponent>) -> Html {
    let link = ctx.link();

    html! {
        <section class="wizard-root">
            <div class="wizard-card">
                <header class="wizard-header">
                    <h1>{"Table Creator Wizard"}</h1>
                    <p class="muted">{"Create your Shadcn table configuration in a few steps"}</p>
                </header>
                { build_step_indicator(component) }
                { build_active_step(component, link) }
            </div>
        </section>
    }
}

fn build_active_step(component: &TableWizardComponent, link: &Scope<TableWizardComponent>) -> Html {
    match component.step {
        Step::Count => column_count_step(component, link),
        Step::Configure => column_form_step(component, link),
        Step::Preview => preview_step(component, link, code_preview(component, link)),
    }
}

/// Numbered step labels, highlighting the active one.
fn build_step_indicator(component: &TableWizardComponent) -> Html {
    let steps = [
        (Step::Count, "Columns"),
        (Step::Configure, "Configure"),
        (Step::Preview, "Preview"),
    ];
    html! {
        <ol class="step-indicator">
            { for steps.iter().enumerate().map(|(i, (step, label))| html! {
                <li class={classes!(if *step == component.step { "active" } else { "" })}>
                    { format!("{}. {}", i + 1, label) }
                </li>
            }) }
        </ol>
    }
}
