use delta_plugin::change::Change;

#[derive(Debug, Default)]
pub struct DropIndexChange {
    pub schema_name: Option<String>,
    /// Required by databases that scope index names to a table.
    pub table_name: Option<String>,
    pub index_name: String,
}

impl Change for DropIndexChange {
    fn change_name(&self) -> &str {
        "dropIndex"
    }

    fn description(&self) -> &str {
        "Drops an existing index"
    }
}
