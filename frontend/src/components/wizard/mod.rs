//! Table creator wizard: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `TableWizardComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//!
//! The three steps (column count, column configuration, preview) live in
//! `steps` as plain view functions over the shared component state.

use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod steps;
mod update;
mod view;

pub use messages::Msg;
pub use state::TableWizardComponent;

impl Component for TableWizardComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        TableWizardComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
