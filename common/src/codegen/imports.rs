//! Import list of the generated listing.

use indexmap::IndexSet;

use crate::model::column::ActionStyle;
use crate::plan::{CellRenderer, ColumnPlan, Icon};

pub const TABLE_IMPORT: &str = r#"import { Table, TableBody, TableCell, TableHead, TableHeader, TableRow } from "@/components/ui/table""#;
pub const TABLE_HOOK_IMPORT: &str =
    r#"import { useReactTable, getCoreRowModel, flexRender } from "@tanstack/react-table""#;
pub const BADGE_IMPORT: &str = r#"import { Badge } from "@/components/ui/badge""#;
pub const BUTTON_IMPORT: &str = r#"import { Button } from "@/components/ui/button""#;

/// Icons referenced by icon-style actions, first occurrence first.
pub fn icon_imports(plans: &[ColumnPlan<'_>]) -> IndexSet<Icon> {
    plans
        .iter()
        .filter_map(|plan| plan.cell.as_ref().and_then(CellRenderer::icon))
        .collect()
}

/// One import per line, base table imports first.
pub fn generate_imports(plans: &[ColumnPlan<'_>]) -> String {
    let mut imports = vec![TABLE_IMPORT.to_string(), TABLE_HOOK_IMPORT.to_string()];

    let cells = || plans.iter().filter_map(|plan| plan.cell.as_ref());

    if cells().any(|cell| matches!(cell, CellRenderer::Badge)) {
        imports.push(BADGE_IMPORT.to_string());
    }
    if cells().any(|cell| {
        matches!(
            cell,
            CellRenderer::Action {
                style: ActionStyle::Button,
                ..
            }
        )
    }) {
        imports.push(BUTTON_IMPORT.to_string());
    }

    let icons = icon_imports(plans);
    if !icons.is_empty() {
        let names: Vec<_> = icons.iter().map(|icon| icon.component_name()).collect();
        imports.push(format!(
            "import {{ {} }} from \"lucide-react\"",
            names.join(", ")
        ));
    }

    imports.join("\n")
}
