use crate::plan::ColumnPlan;

/// `interface Data { ... }` with one member per data column.
pub fn generate_type_definition(plans: &[ColumnPlan<'_>]) -> String {
    let members = plans
        .iter()
        .filter_map(|plan| {
            plan.member
                .as_ref()
                .map(|member| format!("  {}: {};", plan.field, member.render()))
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("interface Data {{\n{}\n}}\n", members)
}
