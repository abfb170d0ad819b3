use delta_plugin::change::Change;

/// Renames a column, optionally restating its type for databases that
/// require it on rename.
#[derive(Debug, Default)]
pub struct RenameColumnChange {
    pub schema_name: Option<String>,
    pub table_name: String,
    pub old_column_name: String,
    pub new_column_name: String,
    pub column_data_type: Option<String>,
}

impl Change for RenameColumnChange {
    fn change_name(&self) -> &str {
        "renameColumn"
    }

    fn description(&self) -> &str {
        "Renames an existing column"
    }
}
