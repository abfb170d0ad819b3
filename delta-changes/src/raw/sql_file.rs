use super::SqlBase;
use delta_core::error::ChangeError;
use delta_plugin::change::Change;
use std::path::PathBuf;
use tracing::debug;

/// Runs SQL read from an external file.
#[derive(Debug, Default)]
pub struct SqlFileChange {
    pub base: SqlBase,
    pub path: Option<PathBuf>,
}

impl SqlFileChange {
    /// Read the file at `path` into the SQL body.
    pub fn load(&mut self) -> Result<(), ChangeError> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| ChangeError::Construct("sqlFile requires a path".into()))?;
        self.base.sql = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = self.base.sql.len(), "Loaded SQL file");
        Ok(())
    }
}

impl Change for SqlFileChange {
    fn change_name(&self) -> &str {
        "sqlFile"
    }

    fn description(&self) -> &str {
        "Executes SQL stored in an external file"
    }
}
