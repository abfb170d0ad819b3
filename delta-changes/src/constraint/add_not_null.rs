use delta_plugin::change::Change;

/// Makes a column NOT NULL, optionally back-filling existing NULLs first.
#[derive(Debug, Default)]
pub struct AddNotNullConstraintChange {
    pub schema_name: Option<String>,
    pub table_name: String,
    pub column_name: String,
    pub column_data_type: Option<String>,
    pub default_null_value: Option<String>,
}

impl Change for AddNotNullConstraintChange {
    fn change_name(&self) -> &str {
        "addNotNullConstraint"
    }

    fn description(&self) -> &str {
        "Makes a column not nullable"
    }
}
