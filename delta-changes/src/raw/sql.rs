use super::SqlBase;
use delta_plugin::change::Change;

/// Runs inline SQL.
#[derive(Debug, Default)]
pub struct RawSqlChange {
    pub base: SqlBase,
    pub comment: Option<String>,
}

impl Change for RawSqlChange {
    fn change_name(&self) -> &str {
        "sql"
    }

    fn description(&self) -> &str {
        "Executes arbitrary SQL"
    }
}
