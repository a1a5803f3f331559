//! Per-column dispatch shared by every consumer of a column list.
//!
//! [`ColumnPlan::of`] is the only place that matches on [`ColumnKind`] to
//! decide the record member type and the cell renderer. The type definition,
//! the column definitions and the live preview all read the resulting plan.

use crate::codegen::quoted;
use crate::model::column::{ActionStyle, ActionType, ColumnDescriptor, ColumnKind};

/// Icon glyphs from `lucide-react` used by icon-style actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Edit,
    Trash2,
    Eye,
}

impl Icon {
    pub fn for_action(action_type: ActionType) -> Self {
        match action_type {
            ActionType::Edit => Icon::Edit,
            ActionType::Delete => Icon::Trash2,
            ActionType::View | ActionType::Custom => Icon::Eye,
        }
    }

    /// Component name as imported from `lucide-react`.
    pub fn component_name(self) -> &'static str {
        match self {
            Icon::Edit => "Edit",
            Icon::Trash2 => "Trash2",
            Icon::Eye => "Eye",
        }
    }
}

/// How a column locates its value in a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accessor {
    /// `accessorKey`: the data field.
    Key(String),
    /// `id`: action columns have no backing field.
    Id(String),
}

/// Record member type emitted in the generated interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberType {
    String,
    Number,
    StringOrNumber,
    /// Union of quoted option literals.
    Literals(Vec<String>),
}

impl MemberType {
    pub fn render(&self) -> String {
        match self {
            MemberType::String => "string".to_string(),
            MemberType::Number => "number".to_string(),
            MemberType::StringOrNumber => "string | number".to_string(),
            MemberType::Literals(options) => options
                .iter()
                .map(|o| quoted(o))
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }
}

/// Cell override, when the default text rendering is not used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellRenderer {
    Badge,
    Currency {
        symbol: String,
    },
    Action {
        action_type: ActionType,
        style: ActionStyle,
        label: String,
    },
}

impl CellRenderer {
    /// Glyph shown by an icon-style action, if any.
    pub fn icon(&self) -> Option<Icon> {
        match self {
            CellRenderer::Action {
                action_type,
                style: ActionStyle::Icon,
                ..
            } => Some(Icon::for_action(*action_type)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPlan<'a> {
    pub column: &'a ColumnDescriptor,
    pub field: String,
    pub accessor: Accessor,
    pub member: Option<MemberType>,
    pub cell: Option<CellRenderer>,
}

impl<'a> ColumnPlan<'a> {
    pub fn of(column: &'a ColumnDescriptor) -> Self {
        let field = column.field_name();
        let (member, cell) = match &column.kind {
            ColumnKind::Text => (Some(MemberType::String), None),
            ColumnKind::Number => (Some(MemberType::Number), None),
            ColumnKind::Price { currency_symbol } => (
                Some(MemberType::Number),
                Some(CellRenderer::Currency {
                    symbol: currency_symbol.clone(),
                }),
            ),
            ColumnKind::Enum {
                options,
                render_as_badge,
            } => {
                // Unconfigured enums degrade to a plain string.
                let member = if options.is_empty() {
                    MemberType::String
                } else {
                    MemberType::Literals(options.clone())
                };
                (Some(member), render_as_badge.then_some(CellRenderer::Badge))
            }
            ColumnKind::AutoId => (Some(MemberType::StringOrNumber), None),
            ColumnKind::Action {
                action_type,
                action_style,
                custom_action_label,
            } => (
                None,
                Some(CellRenderer::Action {
                    action_type: *action_type,
                    style: *action_style,
                    label: action_label(*action_type, custom_action_label.as_deref()),
                }),
            ),
        };
        let accessor = if column.is_action() {
            Accessor::Id(field.clone())
        } else {
            Accessor::Key(field.clone())
        };
        Self {
            column,
            field,
            accessor,
            member,
            cell,
        }
    }

    /// Plans every column, preserving order.
    pub fn all<I>(columns: I) -> Vec<ColumnPlan<'a>>
    where
        I: IntoIterator<Item = &'a ColumnDescriptor>,
    {
        columns.into_iter().map(ColumnPlan::of).collect()
    }
}

/// Visible text of an action control.
pub fn action_label(action_type: ActionType, custom_label: Option<&str>) -> String {
    match (action_type, custom_label) {
        (ActionType::Custom, Some(label)) => label.to_string(),
        _ => action_type.capitalized().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(label: &str, kind: ColumnKind) -> ColumnDescriptor {
        ColumnDescriptor::new("c", label, kind)
    }

    #[test]
    fn action_columns_use_id_accessor_and_no_member() {
        let c = column(
            "Row Actions",
            ColumnKind::Action {
                action_type: ActionType::View,
                action_style: ActionStyle::Link,
                custom_action_label: None,
            },
        );
        let plan = ColumnPlan::of(&c);
        assert_eq!(plan.accessor, Accessor::Id("rowactions".into()));
        assert_eq!(plan.member, None);
        assert_eq!(
            plan.cell,
            Some(CellRenderer::Action {
                action_type: ActionType::View,
                style: ActionStyle::Link,
                label: "View".into()
            })
        );
    }

    #[test]
    fn enum_without_options_falls_back_to_string() {
        let c = column(
            "Status",
            ColumnKind::Enum {
                options: vec![],
                render_as_badge: false,
            },
        );
        let plan = ColumnPlan::of(&c);
        assert_eq!(plan.member, Some(MemberType::String));
        assert_eq!(plan.cell, None);
    }

    #[test]
    fn literal_union_is_quoted_and_piped() {
        let member = MemberType::Literals(vec!["Active".into(), "Inactive".into()]);
        assert_eq!(member.render(), r#""Active" | "Inactive""#);
        assert_eq!(MemberType::StringOrNumber.render(), "string | number");
    }

    #[test]
    fn icons_resolve_from_action_type() {
        assert_eq!(Icon::for_action(ActionType::Edit), Icon::Edit);
        assert_eq!(Icon::for_action(ActionType::Delete), Icon::Trash2);
        assert_eq!(Icon::for_action(ActionType::View), Icon::Eye);
        assert_eq!(Icon::for_action(ActionType::Custom), Icon::Eye);
    }

    #[test]
    fn custom_label_only_applies_to_custom_actions() {
        assert_eq!(action_label(ActionType::Custom, Some("Approve")), "Approve");
        assert_eq!(action_label(ActionType::Custom, None), "Custom");
        assert_eq!(action_label(ActionType::Delete, Some("Approve")), "Delete");
    }
}
