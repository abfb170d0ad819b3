pub mod add_column;
pub mod drop_column;
pub mod modify_data_type;
pub mod rename_column;

/// Column definition shared by column and table changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnConfig {
    pub name: String,
    pub data_type: String,
    pub nullable: bool,
    pub default_value: Option<String>,
}

impl ColumnConfig {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            nullable: true,
            default_value: None,
        }
    }
}
