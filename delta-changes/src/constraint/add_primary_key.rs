use delta_plugin::change::Change;

#[derive(Debug, Default)]
pub struct AddPrimaryKeyChange {
    pub schema_name: Option<String>,
    pub table_name: String,
    pub column_names: Vec<String>,
    pub constraint_name: Option<String>,
}

impl Change for AddPrimaryKeyChange {
    fn change_name(&self) -> &str {
        "addPrimaryKey"
    }

    fn description(&self) -> &str {
        "Adds a primary key out of an existing column or set of columns"
    }
}
