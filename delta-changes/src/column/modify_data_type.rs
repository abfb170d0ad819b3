use delta_plugin::change::Change;

#[derive(Debug, Default)]
pub struct ModifyDataTypeChange {
    pub schema_name: Option<String>,
    pub table_name: String,
    pub column_name: String,
    pub new_data_type: String,
}

impl Change for ModifyDataTypeChange {
    fn change_name(&self) -> &str {
        "modifyDataType"
    }

    fn description(&self) -> &str {
        "Changes the data type of an existing column"
    }
}
