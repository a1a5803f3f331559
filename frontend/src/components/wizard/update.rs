//! Update function for the table creator wizard.
//!
//! Elm-style: receives the current `TableWizardComponent` state, the
//! `Context`, and a `Msg`, mutates the state accordingly, and returns a
//! `bool` indicating whether the view should re-render.
//!
//! Key behaviors
//! - Creating the column sequence from the requested count.
//! - Editing one column at a time; type changes reset type-specific fields.
//! - Validating before the preview, then generating sample rows and the
//!   listing once per visit.
//! - Copying the listing, with a transient "Copied!" state.

use common::codegen::compile;
use common::model::column::{ColumnDescriptor, ColumnKind};
use common::model::error::ConfigError;
use common::model::sequence::ColumnConfigSequence;
use common::sample::{synthesize, DEFAULT_ROW_COUNT};
use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{copy_to_clipboard, parse_column_count, show_toast};
use super::messages::Msg;
use super::state::{PreviewTab, Step, TableWizardComponent};

/// How long the copy button shows "Copied!".
const COPIED_MS: u32 = 2000;

pub fn update(component: &mut TableWizardComponent, ctx: &Context<TableWizardComponent>, msg: Msg) -> bool {
    match msg {
        Msg::SetColumnCount(value) => {
            component.column_count_input = value;
            true
        }
        Msg::SubmitColumnCount => {
            let count = parse_column_count(&component.column_count_input);
            match ColumnConfigSequence::with_len(count) {
                Ok(columns) => {
                    component.option_inputs = vec![String::new(); columns.len()];
                    component.columns = columns;
                    component.step = Step::Configure;
                }
                Err(err) => notify(&err),
            }
            true
        }
        Msg::SetLabel(index, label) => edit_column(component, index, |c| c.label = label),
        Msg::SetDataType(index, data_type) => {
            if let Some(input) = component.option_inputs.get_mut(index) {
                input.clear();
            }
            edit_column(component, index, |c| c.set_data_type(data_type))
        }
        Msg::SetOptionInput(index, value) => match component.option_inputs.get_mut(index) {
            Some(input) => {
                *input = value;
                true
            }
            None => false,
        },
        Msg::AddOption(index) => {
            let Some(pending) = component.option_inputs.get_mut(index) else {
                return false;
            };
            let option = pending.trim().to_string();
            pending.clear();
            if option.is_empty() {
                return true;
            }
            edit_column(component, index, |c| {
                if let ColumnKind::Enum { options, .. } = &c.kind {
                    if !options.contains(&option) {
                        let mut options = options.clone();
                        options.push(option);
                        c.set_options(options);
                    }
                }
            })
        }
        Msg::RemoveOption(index, position) => edit_column(component, index, |c| {
            if let ColumnKind::Enum { options, .. } = &c.kind {
                let mut options = options.clone();
                if position < options.len() {
                    options.remove(position);
                    c.set_options(options);
                }
            }
        }),
        Msg::SetRenderAsBadge(index, enabled) => {
            edit_column(component, index, |c| c.set_render_as_badge(enabled))
        }
        Msg::SetCurrencySymbol(index, symbol) => {
            edit_column(component, index, |c| c.set_currency_symbol(symbol))
        }
        Msg::SetActionType(index, action_type) => {
            edit_column(component, index, |c| c.set_action_type(action_type))
        }
        Msg::SetActionStyle(index, style) => edit_column(component, index, |c| c.set_action_style(style)),
        Msg::SetCustomActionLabel(index, label) => {
            edit_column(component, index, |c| c.set_custom_action_label(label))
        }
        Msg::SubmitConfiguration => {
            match component.columns.validate() {
                Ok(()) => {
                    component.sample_rows = synthesize(&component.columns, DEFAULT_ROW_COUNT);
                    component.snippet = compile(component.columns.columns());
                    component.active_tab = PreviewTab::Table;
                    component.copied = false;
                    component.step = Step::Preview;
                    log!(format!(
                        "generated table for {} columns ({} bytes)",
                        component.columns.len(),
                        component.snippet.len()
                    ));
                }
                Err(err) => notify(&err),
            }
            true
        }
        Msg::BackToCount => {
            component.step = Step::Count;
            true
        }
        Msg::BackToConfiguration => {
            component.step = Step::Configure;
            true
        }
        Msg::Reset => {
            *component = TableWizardComponent::new();
            true
        }
        Msg::SetTab(tab) => {
            component.active_tab = tab;
            true
        }
        Msg::CopySnippet => {
            let snippet = component.snippet.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match copy_to_clipboard(&snippet).await {
                    Ok(()) => {
                        link.send_message(Msg::CopySucceeded);
                        show_toast("Copied to clipboard!", "");
                        gloo_timers::future::TimeoutFuture::new(COPIED_MS).await;
                        link.send_message(Msg::ClearCopied);
                    }
                    Err(err) => {
                        error!(format!("clipboard write failed: {}", err));
                        show_toast("Could not copy the code", &err);
                    }
                }
            });
            false
        }
        Msg::CopySucceeded => {
            component.copied = true;
            true
        }
        Msg::ClearCopied => {
            component.copied = false;
            true
        }
    }
}

/// Applies `edit` to the column at `index`; re-renders only if it exists.
fn edit_column<F>(component: &mut TableWizardComponent, index: usize, edit: F) -> bool
where
    F: FnOnce(&mut ColumnDescriptor),
{
    match component.columns.get_mut(index) {
        Some(column) => {
            edit(column);
            true
        }
        None => false,
    }
}

fn notify(err: &ConfigError) {
    show_toast(err.title(), &describe(err));
}

/// User-facing description shown under the toast title.
fn describe(err: &ConfigError) -> String {
    match err {
        ConfigError::ColumnCountOutOfRange { count, min, .. } if count < min => {
            format!("Please enter at least {} column", min)
        }
        ConfigError::ColumnCountOutOfRange { max, .. } => {
            format!("For better performance, please limit to {} columns", max)
        }
        ConfigError::MissingLabel { .. } => "Please provide names for all columns".to_string(),
        ConfigError::MissingEnumOptions { label } => {
            format!("Please provide options for enum column \"{}\"", label)
        }
    }
}
