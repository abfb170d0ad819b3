use delta_plugin::change::Change;

/// Marks the current database state with a tag that rollbacks can target.
#[derive(Debug, Default)]
pub struct TagDatabaseChange {
    pub tag: String,
}

impl Change for TagDatabaseChange {
    fn change_name(&self) -> &str {
        "tagDatabase"
    }

    fn description(&self) -> &str {
        "Applies a tag to the database for future rollback"
    }
}
