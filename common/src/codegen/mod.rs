//! Table source generator.
//!
//! [`compile`] turns a column list into one TSX listing for
//! `@tanstack/react-table` with shadcn-style UI components. The listing is
//! assembled from four generators, each usable on its own:
//!
//! 1. [`imports::generate_imports`]
//! 2. [`types::generate_type_definition`]
//! 3. [`handlers::generate_action_handlers`]
//! 4. [`columns::generate_column_definitions`]
//!
//! followed by the static `DataTable` component in [`scaffold`].
//!
//! Generation is total: any column list produces a listing. Presence checks
//! happen earlier, in `ColumnConfigSequence::validate`.

pub mod columns;
pub mod handlers;
pub mod imports;
pub mod scaffold;
pub mod types;

use crate::model::column::ColumnDescriptor;
use crate::plan::ColumnPlan;

/// File name announced in the listing's first line.
pub const FILE_NAME: &str = "Table.tsx";

/// Full listing for `columns`.
pub fn compile(columns: &[ColumnDescriptor]) -> String {
    let plans = ColumnPlan::all(columns);
    format!(
        "// {}\nimport {{ ColumnDef }} from \"@tanstack/react-table\"\n{}\n\n{}\n{}\n{}\n\n{}",
        FILE_NAME,
        imports::generate_imports(&plans),
        types::generate_type_definition(&plans),
        handlers::generate_action_handlers(&plans),
        columns::generate_column_definitions(&plans),
        scaffold::DATA_TABLE_COMPONENT,
    )
}

/// Double-quoted string literal. JSON string escaping is valid JS.
pub(crate) fn quoted(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

/// JSX child text; wrapped in an expression when it would not parse as text.
pub(crate) fn jsx_text(value: &str) -> String {
    if value.contains(['{', '}', '<', '>']) {
        format!("{{{}}}", quoted(value))
    } else {
        value.to_string()
    }
}
