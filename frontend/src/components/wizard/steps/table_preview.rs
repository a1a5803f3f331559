//! Preview step: tab bar with the live table and the generated code.

use common::model::column::ActionStyle;
use common::plan::{ColumnPlan, Icon};
use common::preview::{preview_grid, PreviewCell};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::wizard::state::PreviewTab;
use crate::components::wizard::{Msg, TableWizardComponent};

pub fn preview_step(
    component: &TableWizardComponent,
    link: &Scope<TableWizardComponent>,
    code_pane: Html,
) -> Html {
    let tab_class = |tab: PreviewTab| {
        classes!("tab-btn", if component.active_tab == tab { "active" } else { "" })
    };

    html! {
        <>
            <div class="tab-bar">
                <button class={tab_class(PreviewTab::Table)} onclick={link.callback(|_| Msg::SetTab(PreviewTab::Table))}>
                    {"Table Preview"}
                </button>
                <button class={tab_class(PreviewTab::Code)} onclick={link.callback(|_| Msg::SetTab(PreviewTab::Code))}>
                    {"Code Snippet"}
                </button>
            </div>
            {
                match component.active_tab {
                    PreviewTab::Table => build_table(component),
                    PreviewTab::Code => code_pane,
                }
            }
            <div class="actions">
                <button class="btn outline" onclick={link.callback(|_| Msg::BackToConfiguration)}>
                    {"Back to Configuration"}
                </button>
                <button class="btn primary" onclick={link.callback(|_| Msg::Reset)}>
                    {"Start New Table"}
                </button>
            </div>
        </>
    }
}

fn build_table(component: &TableWizardComponent) -> Html {
    if component.columns.is_empty() {
        return html! { <div class="empty">{"No columns defined"}</div> };
    }

    let plans = ColumnPlan::all(&component.columns);
    let grid = preview_grid(&plans, &component.sample_rows);

    html! {
        <div class="table-frame">
            <table class="preview-table">
                <thead>
                    <tr>
                        { for component.columns.iter().map(|c| html! {
                            <th key={c.id.clone()}>{ c.label.clone() }</th>
                        }) }
                    </tr>
                </thead>
                <tbody>
                    { for component.sample_rows.iter().zip(grid).map(|(row, cells)| html! {
                        <tr key={row.id.clone()}>
                            { for cells.into_iter().map(|cell| html! { <td>{ render_cell(cell) }</td> }) }
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

fn render_cell(cell: PreviewCell) -> Html {
    match cell {
        PreviewCell::Empty => html! {},
        PreviewCell::Plain(text) | PreviewCell::Price(text) => html! { <>{ text }</> },
        PreviewCell::Badge(text) => html! { <span class="badge">{ text }</span> },
        PreviewCell::Action {
            label,
            style,
            destructive,
            icon,
        } => {
            let tone = if destructive { "destructive" } else { "default" };
            match style {
                ActionStyle::Button => html! {
                    <button type="button" class={classes!("btn", "sm", tone)}>{ label }</button>
                },
                ActionStyle::Link => html! {
                    <a
                        href="#"
                        class={classes!("action-link", tone)}
                        onclick={Callback::from(|e: MouseEvent| e.prevent_default())}
                    >
                        { label }
                    </a>
                },
                ActionStyle::Icon => html! {
                    <button type="button" class="btn icon ghost" title={label}>
                        <i class="material-icons">{ material_icon(icon.unwrap_or(Icon::Eye)) }</i>
                    </button>
                },
            }
        }
    }
}

/// Material icon closest to each generated `lucide-react` glyph.
fn material_icon(icon: Icon) -> &'static str {
    match icon {
        Icon::Edit => "edit",
        Icon::Trash2 => "delete",
        Icon::Eye => "visibility",
    }
}
