//! `ColumnDef` entries of the generated listing.

use super::handlers::handler_name;
use super::{jsx_text, quoted};
use crate::model::column::{ActionStyle, ActionType};
use crate::plan::{Accessor, CellRenderer, ColumnPlan, Icon};

/// `const columns: ColumnDef<Data>[] = [...]`.
pub fn generate_column_definitions(plans: &[ColumnPlan<'_>]) -> String {
    let entries = plans
        .iter()
        .map(column_definition)
        .collect::<Vec<_>>()
        .join("\n");
    format!("const columns: ColumnDef<Data>[] = [\n{}\n]", entries)
}

fn column_definition(plan: &ColumnPlan<'_>) -> String {
    let accessor = match &plan.accessor {
        Accessor::Key(key) => format!("accessorKey: {},", quoted(key)),
        Accessor::Id(id) => format!("id: {},", quoted(id)),
    };
    let cell = plan
        .cell
        .as_ref()
        .map(|cell| cell_renderer(cell, &plan.field))
        .unwrap_or_default();
    format!(
        "    {{\n      {}\n      header: {},{}\n    }},",
        accessor,
        quoted(&plan.column.label),
        cell
    )
}

fn cell_renderer(cell: &CellRenderer, field: &str) -> String {
    match cell {
        CellRenderer::Badge => format!(
            r##"
      cell: ({{ row }}) => {{
        const value = row.getValue({})
        return <Badge variant="outline">{{value as string}}</Badge>
      }},"##,
            quoted(field)
        ),
        CellRenderer::Currency { symbol } => format!(
            r##"
      cell: ({{ row }}) => {{
        const amount = parseFloat(row.getValue({}))
        const formatted = new Intl.NumberFormat("en-US", {{
          style: "currency",
          currency: "USD",
          currencyDisplay: "symbol",
          minimumFractionDigits: 2,
        }}).format(amount)
        return <div className="font-medium">{}{{formatted.substring(1)}}</div>
      }},"##,
            quoted(field),
            jsx_text(symbol)
        ),
        CellRenderer::Action {
            action_type,
            style,
            label,
        } => action_renderer(*action_type, *style, label),
    }
}

fn action_renderer(action_type: ActionType, style: ActionStyle, label: &str) -> String {
    let handler = handler_name(action_type);
    match style {
        ActionStyle::Button => {
            let variant = if action_type.is_destructive() {
                "\n            variant=\"destructive\""
            } else {
                ""
            };
            format!(
                r##"
      cell: ({{ row }}) => {{
        return (
          <Button
            size="sm"{}
            onClick={{() => {}(row.original)}}
          >
            {}
          </Button>
        )
      }},"##,
                variant,
                handler,
                jsx_text(label)
            )
        }
        ActionStyle::Link => {
            let class_name = if action_type.is_destructive() {
                "text-destructive hover:text-destructive/80"
            } else {
                "text-primary hover:underline"
            };
            format!(
                r##"
      cell: ({{ row }}) => {{
        return (
          <a
            href="#"
            className="{}"
            onClick={{(e) => {{
              e.preventDefault()
              {}(row.original)
            }}}}
          >
            {}
          </a>
        )
      }},"##,
                class_name,
                handler,
                jsx_text(label)
            )
        }
        ActionStyle::Icon => format!(
            r##"
      cell: ({{ row }}) => {{
        return (
          <Button
            size="icon"
            variant="ghost"
            className="h-8 w-8"
            onClick={{() => {}(row.original)}}
          >
            <{} className="h-4 w-4" />
          </Button>
        )
      }},"##,
            handler,
            Icon::for_action(action_type).component_name()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::column::{ColumnDescriptor, ColumnKind};

    fn definitions(columns: &[ColumnDescriptor]) -> String {
        generate_column_definitions(&ColumnPlan::all(columns))
    }

    fn action(action_type: ActionType, action_style: ActionStyle, label: Option<&str>) -> ColumnDescriptor {
        ColumnDescriptor::new(
            "x",
            "Row Action",
            ColumnKind::Action {
                action_type,
                action_style,
                custom_action_label: label.map(str::to_string),
            },
        )
    }

    #[test]
    fn text_column_has_accessor_and_header_only() {
        let columns = vec![ColumnDescriptor::new("a", "User Name", ColumnKind::Text)];
        assert_eq!(
            definitions(&columns),
            "const columns: ColumnDef<Data>[] = [\n    {\n      accessorKey: \"username\",\n      header: \"User Name\",\n    },\n]"
        );
    }

    #[test]
    fn control_characters_in_labels_are_escaped() {
        let columns = vec![ColumnDescriptor::new("a", "A\rB", ColumnKind::Text)];
        let code = definitions(&columns);
        assert!(code.contains(r#"header: "A\rB","#));
        assert!(code.contains(r#"accessorKey: "ab","#));
        assert!(!code.contains('\r'));
    }

    #[test]
    fn enum_without_badge_keeps_default_rendering() {
        let columns = vec![ColumnDescriptor::new(
            "a",
            "Status",
            ColumnKind::Enum {
                options: vec!["A".into()],
                render_as_badge: false,
            },
        )];
        assert!(!definitions(&columns).contains("cell:"));
    }

    #[test]
    fn badge_reads_derived_field() {
        let columns = vec![ColumnDescriptor::new(
            "a",
            "Order Status",
            ColumnKind::Enum {
                options: vec!["A".into()],
                render_as_badge: true,
            },
        )];
        let code = definitions(&columns);
        assert!(code.contains(r#"const value = row.getValue("orderstatus")"#));
        assert!(code.contains(r#"<Badge variant="outline">{value as string}</Badge>"#));
    }

    #[test]
    fn price_substitutes_currency_symbol() {
        let columns = vec![ColumnDescriptor::new(
            "a",
            "Price",
            ColumnKind::Price {
                currency_symbol: "€".into(),
            },
        )];
        let code = definitions(&columns);
        assert!(code.contains(r#"parseFloat(row.getValue("price"))"#));
        assert!(code.contains(r#"<div className="font-medium">€{formatted.substring(1)}</div>"#));
    }

    #[test]
    fn action_columns_use_id_and_handler() {
        let code = definitions(&[action(ActionType::Edit, ActionStyle::Button, None)]);
        assert!(code.contains(r#"id: "rowaction","#));
        assert!(!code.contains("accessorKey"));
        assert!(code.contains("onClick={() => handleEdit(row.original)}"));
        assert!(code.contains("\n            Edit\n"));
        assert!(!code.contains("destructive"));
    }

    #[test]
    fn delete_is_destructive_for_buttons_and_links() {
        let button = definitions(&[action(ActionType::Delete, ActionStyle::Button, None)]);
        assert!(button.contains(r#"variant="destructive""#));
        let link = definitions(&[action(ActionType::Delete, ActionStyle::Link, None)]);
        assert!(link.contains(r#"className="text-destructive hover:text-destructive/80""#));
        assert!(link.contains("handleDelete(row.original)"));
    }

    #[test]
    fn custom_label_is_rendered() {
        let code = definitions(&[action(ActionType::Custom, ActionStyle::Link, Some("Approve"))]);
        assert!(code.contains("\n            Approve\n"));
        assert!(code.contains(r#"className="text-primary hover:underline""#));
        assert!(code.contains("handleCustom(row.original)"));
    }

    #[test]
    fn icon_actions_render_glyph() {
        let code = definitions(&[action(ActionType::View, ActionStyle::Icon, None)]);
        assert!(code.contains(r#"<Eye className="h-4 w-4" />"#));
        assert!(code.contains(r#"variant="ghost""#));
    }
}
