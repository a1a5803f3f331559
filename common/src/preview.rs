//! Cell contents of the live preview table.
//!
//! The preview reads the same [`CellRenderer`] that drives the generated
//! column definitions, so both show a column the same way. Prices are
//! formatted like `Intl.NumberFormat("en-US")` in the generated code: two
//! decimals with thousands grouping, prefixed by the configured symbol.

use num_format::{Locale, ToFormattedString};

use crate::model::column::ActionStyle;
use crate::plan::{CellRenderer, ColumnPlan, Icon};
use crate::sample::{SampleRow, SampleValue};

#[derive(Debug, Clone, PartialEq)]
pub enum PreviewCell {
    /// No sample value for a data column.
    Empty,
    Plain(String),
    Badge(String),
    Price(String),
    Action {
        label: String,
        style: ActionStyle,
        destructive: bool,
        icon: Option<Icon>,
    },
}

/// Renders the cell of `plan`'s column in `row`.
pub fn preview_cell(plan: &ColumnPlan<'_>, row: &SampleRow) -> PreviewCell {
    if let Some(CellRenderer::Action {
        action_type,
        style,
        label,
    }) = &plan.cell
    {
        return PreviewCell::Action {
            label: label.clone(),
            style: *style,
            destructive: action_type.is_destructive(),
            icon: plan.cell.as_ref().and_then(CellRenderer::icon),
        };
    }

    let Some(value) = row.get(&plan.column.id) else {
        return PreviewCell::Empty;
    };
    match &plan.cell {
        Some(CellRenderer::Badge) => PreviewCell::Badge(value.to_string()),
        Some(CellRenderer::Currency { symbol }) => match value.as_f64() {
            Some(amount) => PreviewCell::Price(format_currency(amount, symbol)),
            None => PreviewCell::Plain(value.to_string()),
        },
        _ => PreviewCell::Plain(match value {
            SampleValue::Price(p) => format!("{:.2}", p),
            other => other.to_string(),
        }),
    }
}

/// Full grid of preview cells, one inner vector per row.
pub fn preview_grid(plans: &[ColumnPlan<'_>], rows: &[SampleRow]) -> Vec<Vec<PreviewCell>> {
    rows.iter()
        .map(|row| plans.iter().map(|plan| preview_cell(plan, row)).collect())
        .collect()
}

/// `1234.5` with `"€"` → `"€1,234.50"`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!(
        "{}{}{}.{:02}",
        sign,
        symbol,
        (cents / 100).to_formatted_string(&Locale::en),
        cents % 100
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::column::{ActionType, ColumnDescriptor, ColumnKind};
    use crate::sample::synthesize;

    #[test]
    fn currency_uses_grouping_and_two_decimals() {
        assert_eq!(format_currency(19.99, "$"), "$19.99");
        assert_eq!(format_currency(1234.5, "€"), "€1,234.50");
        assert_eq!(format_currency(1_000_000.0, "₹"), "₹1,000,000.00");
        assert_eq!(format_currency(-3.456, "£"), "-£3.46");
    }

    #[test]
    fn preview_matches_cell_renderers() {
        let columns = vec![
            ColumnDescriptor::new(
                "status",
                "Status",
                ColumnKind::Enum {
                    options: vec!["Active".into(), "Inactive".into()],
                    render_as_badge: true,
                },
            ),
            ColumnDescriptor::new(
                "price",
                "Price",
                ColumnKind::Price {
                    currency_symbol: "€".into(),
                },
            ),
            ColumnDescriptor::new(
                "remove",
                "Remove",
                ColumnKind::Action {
                    action_type: ActionType::Delete,
                    action_style: ActionStyle::Icon,
                    custom_action_label: None,
                },
            ),
            ColumnDescriptor::new("n", "Count", ColumnKind::Number),
        ];
        let plans = ColumnPlan::all(&columns);
        let rows = synthesize(&columns, 3);
        let grid = preview_grid(&plans, &rows);

        assert_eq!(grid[1][0], PreviewCell::Badge("Inactive".into()));
        assert_eq!(grid[2][1], PreviewCell::Price("€59.97".into()));
        assert_eq!(
            grid[0][2],
            PreviewCell::Action {
                label: "Delete".into(),
                style: ActionStyle::Icon,
                destructive: true,
                icon: Some(Icon::Trash2),
            }
        );
        assert_eq!(grid[0][3], PreviewCell::Plain("10".into()));
    }

    #[test]
    fn missing_value_renders_empty() {
        let column = ColumnDescriptor::new("t", "Title", ColumnKind::Text);
        let plan = ColumnPlan::of(&column);
        let row = SampleRow {
            id: "row-1".into(),
            values: Default::default(),
        };
        assert_eq!(preview_cell(&plan, &row), PreviewCell::Empty);
    }
}
