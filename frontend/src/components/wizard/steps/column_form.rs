//! Configuration step: one card per column with the fields its type needs.

use common::model::column::{
    ActionStyle, ActionType, ColumnDescriptor, ColumnKind, DataType, CURRENCY_SYMBOLS,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::wizard::{Msg, TableWizardComponent};

pub fn column_form_step(component: &TableWizardComponent, link: &Scope<TableWizardComponent>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitConfiguration
    });

    html! {
        <form class="wizard-form" {onsubmit}>
            <div class="column-cards">
                { for component.columns.iter().enumerate().map(|(index, column)| {
                    let pending = component.option_inputs.get(index).cloned().unwrap_or_default();
                    column_card(index, column, pending, link)
                }) }
            </div>
            <div class="actions">
                <button type="button" class="btn outline" onclick={link.callback(|_| Msg::BackToCount)}>
                    {"Back"}
                </button>
                <button type="submit" class="btn primary">{"Generate Table"}</button>
            </div>
        </form>
    }
}

fn column_card(
    index: usize,
    column: &ColumnDescriptor,
    pending_option: String,
    link: &Scope<TableWizardComponent>,
) -> Html {
    let name_id = format!("column-{}-name", index);
    let type_id = format!("column-{}-type", index);
    let current_type = column.data_type();

    let on_label = link.callback(move |e: InputEvent| {
        Msg::SetLabel(index, e.target_unchecked_into::<HtmlInputElement>().value())
    });
    let on_type = link.batch_callback(move |e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        DataType::from_str_opt(&value).map(|t| Msg::SetDataType(index, t))
    });

    let type_fields = match &column.kind {
        ColumnKind::Enum {
            options,
            render_as_badge,
        } => enum_fields(index, options, *render_as_badge, pending_option, link),
        ColumnKind::Price { currency_symbol } => price_fields(index, currency_symbol, link),
        ColumnKind::Action {
            action_type,
            action_style,
            custom_action_label,
        } => action_fields(
            index,
            *action_type,
            *action_style,
            custom_action_label.as_deref(),
            link,
        ),
        _ => html! {},
    };

    html! {
        <div class="column-card" key={column.id.clone()}>
            <span class="column-badge">{ format!("Column {}", index + 1) }</span>
            <div class="grid-2">
                <div class="field">
                    <label for={name_id.clone()}>{"Column Name"}</label>
                    <input
                        id={name_id}
                        value={column.label.clone()}
                        oninput={on_label}
                        placeholder="e.g., User Name, Product ID"
                    />
                </div>
                <div class="field">
                    <label for={type_id.clone()}>{"Data Type"}</label>
                    <select id={type_id} onchange={on_type}>
                        { for DataType::ALL.iter().map(|t| html! {
                            <option value={t.as_str()} selected={*t == current_type}>
                                { t.display_name() }
                            </option>
                        }) }
                    </select>
                </div>
            </div>
            { type_fields }
        </div>
    }
}

/// Tag input for options plus the badge switch.
fn enum_fields(
    index: usize,
    options: &[String],
    render_as_badge: bool,
    pending_option: String,
    link: &Scope<TableWizardComponent>,
) -> Html {
    let options_id = format!("column-{}-options", index);
    let badge_id = format!("column-{}-badge", index);

    let on_input = link.callback(move |e: InputEvent| {
        Msg::SetOptionInput(index, e.target_unchecked_into::<HtmlInputElement>().value())
    });
    // Enter adds the pending option instead of submitting the form.
    let on_keydown = link.batch_callback(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            e.prevent_default();
            vec![Msg::AddOption(index)]
        } else {
            vec![]
        }
    });
    let on_badge = link.callback(move |e: Event| {
        Msg::SetRenderAsBadge(index, e.target_unchecked_into::<HtmlInputElement>().checked())
    });

    html! {
        <div class="type-fields">
            <hr />
            <div class="field">
                <label for={options_id.clone()}>{"Enum Options"}</label>
                <div class="tags">
                    { for options.iter().enumerate().map(|(position, option)| html! {
                        <span class="tag">
                            { option.clone() }
                            <button
                                type="button"
                                class="tag-remove"
                                title="Remove option"
                                onclick={link.callback(move |_| Msg::RemoveOption(index, position))}
                            >
                                {"×"}
                            </button>
                        </span>
                    }) }
                    <input
                        id={options_id}
                        value={pending_option}
                        oninput={on_input}
                        onkeydown={on_keydown}
                        placeholder="Enter options then press enter (e.g., Active, Pending, Completed)"
                    />
                </div>
            </div>
            <div class="switch">
                <input id={badge_id.clone()} type="checkbox" checked={render_as_badge} onchange={on_badge} />
                <label for={badge_id}>{"Render as Badge"}</label>
            </div>
        </div>
    }
}

fn price_fields(index: usize, currency_symbol: &str, link: &Scope<TableWizardComponent>) -> Html {
    let currency_id = format!("column-{}-currency", index);
    let on_change = link.callback(move |e: Event| {
        Msg::SetCurrencySymbol(index, e.target_unchecked_into::<HtmlSelectElement>().value())
    });

    html! {
        <div class="type-fields">
            <hr />
            <div class="field narrow">
                <label for={currency_id.clone()}>{"Currency Symbol"}</label>
                <select id={currency_id} onchange={on_change}>
                    { for CURRENCY_SYMBOLS.iter().map(|(symbol, name)| html! {
                        <option value={*symbol} selected={*symbol == currency_symbol}>
                            { format!("{} ({})", symbol, name) }
                        </option>
                    }) }
                </select>
            </div>
        </div>
    }
}

fn action_fields(
    index: usize,
    action_type: ActionType,
    action_style: ActionStyle,
    custom_label: Option<&str>,
    link: &Scope<TableWizardComponent>,
) -> Html {
    let type_id = format!("column-{}-action-type", index);
    let style_id = format!("column-{}-action-style", index);
    let label_id = format!("column-{}-custom-label", index);

    let on_type = link.batch_callback(move |e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        ActionType::from_str_opt(&value).map(|t| Msg::SetActionType(index, t))
    });
    let on_style = link.batch_callback(move |e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        ActionStyle::from_str_opt(&value).map(|s| Msg::SetActionStyle(index, s))
    });
    let on_label = link.callback(move |e: InputEvent| {
        Msg::SetCustomActionLabel(index, e.target_unchecked_into::<HtmlInputElement>().value())
    });

    html! {
        <div class="type-fields">
            <hr />
            <div class="grid-2">
                <div class="field">
                    <label for={type_id.clone()}>{"Action Type"}</label>
                    <select id={type_id} onchange={on_type}>
                        { for ActionType::ALL.iter().map(|t| html! {
                            <option value={t.as_str()} selected={*t == action_type}>
                                { t.capitalized() }
                            </option>
                        }) }
                    </select>
                </div>
                <div class="field">
                    <label for={style_id.clone()}>{"Display Style"}</label>
                    <select id={style_id} onchange={on_style}>
                        { for ActionStyle::ALL.iter().map(|s| html! {
                            <option value={s.as_str()} selected={*s == action_style}>
                                { s.display_name() }
                            </option>
                        }) }
                    </select>
                </div>
            </div>
            if action_type == ActionType::Custom {
                <div class="field">
                    <label for={label_id.clone()}>{"Custom Label"}</label>
                    <input
                        id={label_id}
                        value={custom_label.unwrap_or_default().to_string()}
                        oninput={on_label}
                        placeholder="e.g., Download, Process, Approve"
                    />
                </div>
            }
        </div>
    }
}
