use crate::column::ColumnConfig;
use delta_plugin::change::Change;

/// Creates a table with the given columns.
#[derive(Debug, Default)]
pub struct CreateTableChange {
    pub schema_name: Option<String>,
    pub table_name: String,
    pub tablespace: Option<String>,
    pub remarks: Option<String>,
    pub columns: Vec<ColumnConfig>,
}

impl Change for CreateTableChange {
    fn change_name(&self) -> &str {
        "createTable"
    }

    fn description(&self) -> &str {
        "Creates a new table"
    }
}
