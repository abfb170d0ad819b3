use delta_plugin::change::Change;

/// Creates a view from a select query.
#[derive(Debug, Default)]
pub struct CreateViewChange {
    pub schema_name: Option<String>,
    pub view_name: String,
    pub select_query: String,
    pub replace_if_exists: bool,
}

impl Change for CreateViewChange {
    fn change_name(&self) -> &str {
        "createView"
    }

    fn description(&self) -> &str {
        "Creates a new database view"
    }
}
