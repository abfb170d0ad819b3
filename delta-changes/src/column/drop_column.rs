use delta_plugin::change::Change;

#[derive(Debug, Default)]
pub struct DropColumnChange {
    pub schema_name: Option<String>,
    pub table_name: String,
    pub column_name: String,
}

impl Change for DropColumnChange {
    fn change_name(&self) -> &str {
        "dropColumn"
    }

    fn description(&self) -> &str {
        "Drops an existing column"
    }
}
