use super::ColumnConfig;
use delta_plugin::change::Change;

/// Adds one or more columns to an existing table.
#[derive(Debug, Default)]
pub struct AddColumnChange {
    pub schema_name: Option<String>,
    pub table_name: String,
    pub columns: Vec<ColumnConfig>,
}

impl AddColumnChange {
    pub fn add_column(&mut self, column: ColumnConfig) {
        self.columns.push(column);
    }
}

impl Change for AddColumnChange {
    fn change_name(&self) -> &str {
        "addColumn"
    }

    fn description(&self) -> &str {
        "Adds a new column to an existing table"
    }
}
