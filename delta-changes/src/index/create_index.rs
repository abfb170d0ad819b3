use delta_plugin::change::Change;

#[derive(Debug, Default)]
pub struct CreateIndexChange {
    pub schema_name: Option<String>,
    pub table_name: String,
    pub index_name: String,
    pub columns: Vec<String>,
    pub unique: bool,
    pub tablespace: Option<String>,
}

impl Change for CreateIndexChange {
    fn change_name(&self) -> &str {
        "createIndex"
    }

    fn description(&self) -> &str {
        "Creates an index on an existing column or set of columns"
    }
}
