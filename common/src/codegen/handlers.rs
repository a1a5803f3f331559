use indexmap::IndexSet;

use crate::model::column::ActionType;
use crate::plan::{CellRenderer, ColumnPlan};

/// Distinct action types in first-occurrence order.
pub fn distinct_action_types(plans: &[ColumnPlan<'_>]) -> IndexSet<ActionType> {
    plans
        .iter()
        .filter_map(|plan| match &plan.cell {
            Some(CellRenderer::Action { action_type, .. }) => Some(*action_type),
            _ => None,
        })
        .collect()
}

/// `handleEdit`, `handleDelete`, ...
pub fn handler_name(action_type: ActionType) -> String {
    format!("handle{}", action_type.capitalized())
}

/// One placeholder function per distinct action type; empty without actions.
pub fn generate_action_handlers(plans: &[ColumnPlan<'_>]) -> String {
    distinct_action_types(plans)
        .into_iter()
        .map(|action_type| {
            let capitalized = action_type.capitalized();
            format!(
                "function {}(data: Data) {{\n  console.log(`{} action for`, data)\n  // Add your {} logic here\n}}\n",
                handler_name(action_type),
                capitalized,
                action_type.as_str(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::column::{ActionStyle, ColumnDescriptor, ColumnKind};

    fn action(id: &str, action_type: ActionType) -> ColumnDescriptor {
        ColumnDescriptor::new(
            id,
            id,
            ColumnKind::Action {
                action_type,
                action_style: ActionStyle::Link,
                custom_action_label: None,
            },
        )
    }

    #[test]
    fn no_actions_means_no_handlers() {
        let columns = vec![ColumnDescriptor::new("a", "Name", ColumnKind::Text)];
        assert_eq!(generate_action_handlers(&ColumnPlan::all(&columns)), "");
    }

    #[test]
    fn handlers_are_distinct_in_first_occurrence_order() {
        let columns = vec![
            action("a", ActionType::View),
            action("b", ActionType::Delete),
            action("c", ActionType::View),
            action("d", ActionType::Custom),
        ];
        let plans = ColumnPlan::all(&columns);
        let names: Vec<_> = distinct_action_types(&plans)
            .into_iter()
            .map(handler_name)
            .collect();
        assert_eq!(names, ["handleView", "handleDelete", "handleCustom"]);

        let code = generate_action_handlers(&plans);
        assert_eq!(code.matches("function handle").count(), 3);
        assert!(code.starts_with(
            "function handleView(data: Data) {\n  console.log(`View action for`, data)\n  // Add your view logic here\n}\n\nfunction handleDelete"
        ));
    }
}
