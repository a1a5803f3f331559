//! Column descriptors authored in the configuration step.
//!
//! A descriptor is an `id`, a `label` and a [`ColumnKind`]. The kind is a
//! tagged variant per data type, so a descriptor only ever carries the fields
//! that mean something for its type. Changing the data type rebuilds the
//! variant from [`ColumnKind::default_for`] instead of patching fields.
//!
//! The JSON shape is flat, with the variant tag in `dataType`:
//!
//! ```json
//! { "id": "column-2", "label": "Price", "dataType": "price", "currencySymbol": "€" }
//! ```

use serde::{Deserialize, Serialize};

use crate::naming::field_name;

/// Currency symbol used when a column switches to `price`.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Label seeded when an action column switches to a custom action.
pub const DEFAULT_CUSTOM_ACTION_LABEL: &str = "Custom Action";

/// Currency symbols offered by the configuration form.
pub const CURRENCY_SYMBOLS: [(&str, &str); 6] = [
    ("$", "Dollar"),
    ("€", "Euro"),
    ("£", "Pound"),
    ("₦", "Naira"),
    ("¥", "Yen/Yuan"),
    ("₹", "Rupee"),
];

/// Closed set of column data types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataType {
    Text,
    Number,
    Price,
    Enum,
    AutoId,
    Action,
}

impl DataType {
    pub const ALL: [DataType; 6] = [
        DataType::Text,
        DataType::Number,
        DataType::Price,
        DataType::Enum,
        DataType::AutoId,
        DataType::Action,
    ];

    /// Wire name, as used in `dataType`.
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Text => "text",
            DataType::Number => "number",
            DataType::Price => "price",
            DataType::Enum => "enum",
            DataType::AutoId => "autoId",
            DataType::Action => "action",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    /// Human label for the data type select.
    pub fn display_name(self) -> &'static str {
        match self {
            DataType::Text => "Text",
            DataType::Number => "Number",
            DataType::Price => "Price",
            DataType::Enum => "Enum",
            DataType::AutoId => "Auto ID",
            DataType::Action => "Action",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionType {
    #[default]
    Edit,
    Delete,
    View,
    Custom,
}

impl ActionType {
    pub const ALL: [ActionType; 4] = [
        ActionType::Edit,
        ActionType::Delete,
        ActionType::View,
        ActionType::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionType::Edit => "edit",
            ActionType::Delete => "delete",
            ActionType::View => "view",
            ActionType::Custom => "custom",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    /// `Edit`, `Delete`, ... as used in handler names and default labels.
    pub fn capitalized(self) -> &'static str {
        match self {
            ActionType::Edit => "Edit",
            ActionType::Delete => "Delete",
            ActionType::View => "View",
            ActionType::Custom => "Custom",
        }
    }

    pub fn is_destructive(self) -> bool {
        matches!(self, ActionType::Delete)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionStyle {
    #[default]
    Button,
    Link,
    Icon,
}

impl ActionStyle {
    pub const ALL: [ActionStyle; 3] = [ActionStyle::Button, ActionStyle::Link, ActionStyle::Icon];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionStyle::Button => "button",
            ActionStyle::Link => "link",
            ActionStyle::Icon => "icon",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ActionStyle::Button => "Button",
            ActionStyle::Link => "Link",
            ActionStyle::Icon => "Icon",
        }
    }
}

/// Type-specific part of a column descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "dataType", rename_all = "camelCase")]
pub enum ColumnKind {
    Text,
    Number,
    #[serde(rename_all = "camelCase")]
    Price {
        #[serde(default = "default_currency_symbol")]
        currency_symbol: String,
    },
    #[serde(rename_all = "camelCase")]
    Enum {
        #[serde(default)]
        options: Vec<String>,
        #[serde(default)]
        render_as_badge: bool,
    },
    AutoId,
    #[serde(rename_all = "camelCase")]
    Action {
        #[serde(default)]
        action_type: ActionType,
        #[serde(default)]
        action_style: ActionStyle,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        custom_action_label: Option<String>,
    },
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl ColumnKind {
    /// Fresh variant for `data_type` with its default type-specific fields.
    pub fn default_for(data_type: DataType) -> Self {
        match data_type {
            DataType::Text => ColumnKind::Text,
            DataType::Number => ColumnKind::Number,
            DataType::Price => ColumnKind::Price {
                currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            },
            DataType::Enum => ColumnKind::Enum {
                options: Vec::new(),
                render_as_badge: false,
            },
            DataType::AutoId => ColumnKind::AutoId,
            DataType::Action => ColumnKind::Action {
                action_type: ActionType::Edit,
                action_style: ActionStyle::Button,
                custom_action_label: None,
            },
        }
    }

    pub fn data_type(&self) -> DataType {
        match self {
            ColumnKind::Text => DataType::Text,
            ColumnKind::Number => DataType::Number,
            ColumnKind::Price { .. } => DataType::Price,
            ColumnKind::Enum { .. } => DataType::Enum,
            ColumnKind::AutoId => DataType::AutoId,
            ColumnKind::Action { .. } => DataType::Action,
        }
    }
}

/// One table column as configured by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub id: String,
    pub label: String,
    #[serde(flatten)]
    pub kind: ColumnKind,
}

impl ColumnDescriptor {
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
        }
    }

    pub fn data_type(&self) -> DataType {
        self.kind.data_type()
    }

    pub fn is_action(&self) -> bool {
        matches!(self.kind, ColumnKind::Action { .. })
    }

    /// Code-safe name derived from the label.
    pub fn field_name(&self) -> String {
        field_name(&self.label)
    }

    /// Switches the data type, resetting type-specific fields to their
    /// defaults. Selecting the current type keeps the existing fields.
    pub fn set_data_type(&mut self, data_type: DataType) {
        if self.data_type() != data_type {
            self.kind = ColumnKind::default_for(data_type);
        }
    }

    /// Replaces the enum options. Ignored for non-enum columns.
    pub fn set_options(&mut self, new_options: Vec<String>) {
        if let ColumnKind::Enum { options, .. } = &mut self.kind {
            *options = new_options;
        }
    }

    pub fn set_render_as_badge(&mut self, enabled: bool) {
        if let ColumnKind::Enum { render_as_badge, .. } = &mut self.kind {
            *render_as_badge = enabled;
        }
    }

    pub fn set_currency_symbol(&mut self, symbol: impl Into<String>) {
        if let ColumnKind::Price { currency_symbol } = &mut self.kind {
            *currency_symbol = symbol.into();
        }
    }

    /// Changes the action type. Moving to `custom` seeds the custom label,
    /// any other type drops it.
    pub fn set_action_type(&mut self, new_type: ActionType) {
        if let ColumnKind::Action {
            action_type,
            custom_action_label,
            ..
        } = &mut self.kind
        {
            *action_type = new_type;
            *custom_action_label = match new_type {
                ActionType::Custom => Some(DEFAULT_CUSTOM_ACTION_LABEL.to_string()),
                _ => None,
            };
        }
    }

    pub fn set_action_style(&mut self, new_style: ActionStyle) {
        if let ColumnKind::Action { action_style, .. } = &mut self.kind {
            *action_style = new_style;
        }
    }

    /// Updates the custom label; only applies to custom actions.
    pub fn set_custom_action_label(&mut self, new_label: impl Into<String>) {
        if let ColumnKind::Action {
            action_type: ActionType::Custom,
            custom_action_label,
            ..
        } = &mut self.kind
        {
            *custom_action_label = Some(new_label.into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_column() -> ColumnDescriptor {
        ColumnDescriptor::new("column-0", "Name", ColumnKind::Text)
    }

    #[test]
    fn switching_to_price_sets_default_symbol() {
        let mut column = text_column();
        column.set_data_type(DataType::Price);
        assert_eq!(
            column.kind,
            ColumnKind::Price {
                currency_symbol: "$".to_string()
            }
        );
    }

    #[test]
    fn switching_back_to_enum_clears_previous_options() {
        let mut column = text_column();
        column.set_data_type(DataType::Enum);
        column.set_options(vec!["A".into(), "B".into()]);
        column.set_render_as_badge(true);

        column.set_data_type(DataType::Text);
        assert_eq!(column.kind, ColumnKind::Text);
        column.set_data_type(DataType::Enum);

        assert_eq!(
            column.kind,
            ColumnKind::Enum {
                options: vec![],
                render_as_badge: false
            }
        );
    }

    #[test]
    fn reselecting_same_type_keeps_fields() {
        let mut column = text_column();
        column.set_data_type(DataType::Price);
        column.set_currency_symbol("€");
        column.set_data_type(DataType::Price);
        assert_eq!(
            column.kind,
            ColumnKind::Price {
                currency_symbol: "€".to_string()
            }
        );
    }

    #[test]
    fn action_defaults_to_edit_button() {
        let mut column = text_column();
        column.set_data_type(DataType::Action);
        assert_eq!(
            column.kind,
            ColumnKind::Action {
                action_type: ActionType::Edit,
                action_style: ActionStyle::Button,
                custom_action_label: None
            }
        );
    }

    #[test]
    fn custom_action_label_follows_action_type() {
        let mut column = text_column();
        column.set_data_type(DataType::Action);

        column.set_custom_action_label("Ignored");
        assert!(matches!(
            column.kind,
            ColumnKind::Action { custom_action_label: None, .. }
        ));

        column.set_action_type(ActionType::Custom);
        assert!(matches!(
            &column.kind,
            ColumnKind::Action { custom_action_label: Some(l), .. } if l == "Custom Action"
        ));

        column.set_custom_action_label("Approve");
        column.set_action_type(ActionType::View);
        assert!(matches!(
            column.kind,
            ColumnKind::Action { action_type: ActionType::View, custom_action_label: None, .. }
        ));
    }

    #[test]
    fn setters_for_other_types_are_ignored() {
        let mut column = text_column();
        column.set_options(vec!["A".into()]);
        column.set_currency_symbol("€");
        column.set_action_style(ActionStyle::Icon);
        assert_eq!(column.kind, ColumnKind::Text);
    }

    #[test]
    fn json_shape_is_flat() {
        let column = ColumnDescriptor::new(
            "column-1",
            "Price",
            ColumnKind::Price {
                currency_symbol: "€".into(),
            },
        );
        let value = serde_json::to_value(&column).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "column-1",
                "label": "Price",
                "dataType": "price",
                "currencySymbol": "€"
            })
        );
    }

    #[test]
    fn parses_auto_id_and_action_json() {
        let columns: Vec<ColumnDescriptor> = serde_json::from_str(
            r#"[
                {"id": "a", "label": "Id", "dataType": "autoId"},
                {"id": "b", "label": "Go", "dataType": "action",
                 "actionType": "custom", "actionStyle": "link", "customActionLabel": "Approve"}
            ]"#,
        )
        .unwrap();
        assert_eq!(columns[0].data_type(), DataType::AutoId);
        assert_eq!(
            columns[1].kind,
            ColumnKind::Action {
                action_type: ActionType::Custom,
                action_style: ActionStyle::Link,
                custom_action_label: Some("Approve".into())
            }
        );
    }

    #[test]
    fn omitted_price_and_action_fields_take_defaults() {
        let columns: Vec<ColumnDescriptor> = serde_json::from_str(
            r#"[
                {"id": "a", "label": "Price", "dataType": "price"},
                {"id": "b", "label": "Go", "dataType": "action"}
            ]"#,
        )
        .unwrap();
        assert_eq!(columns[0].kind, ColumnKind::default_for(DataType::Price));
        assert_eq!(
            columns[0].kind,
            ColumnKind::Price {
                currency_symbol: "$".into()
            }
        );
        assert_eq!(columns[1].kind, ColumnKind::default_for(DataType::Action));
    }

    #[test]
    fn wire_names_round_trip_through_lookup() {
        for data_type in DataType::ALL {
            assert_eq!(DataType::from_str_opt(data_type.as_str()), Some(data_type));
        }
        assert_eq!(ActionType::from_str_opt("delete"), Some(ActionType::Delete));
        assert_eq!(ActionStyle::from_str_opt("nope"), None);
    }
}
