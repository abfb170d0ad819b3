use delta_plugin::change::Change;

#[derive(Debug, Default)]
pub struct RenameTableChange {
    pub schema_name: Option<String>,
    pub old_table_name: String,
    pub new_table_name: String,
}

impl Change for RenameTableChange {
    fn change_name(&self) -> &str {
        "renameTable"
    }

    fn description(&self) -> &str {
        "Renames an existing table"
    }
}
