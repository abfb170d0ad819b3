use delta_plugin::change::Change;

/// Referential action applied on update or delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReferentialAction {
    #[default]
    NoAction,
    Restrict,
    Cascade,
    SetNull,
    SetDefault,
}

impl ReferentialAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferentialAction::NoAction => "NO ACTION",
            ReferentialAction::Restrict => "RESTRICT",
            ReferentialAction::Cascade => "CASCADE",
            ReferentialAction::SetNull => "SET NULL",
            ReferentialAction::SetDefault => "SET DEFAULT",
        }
    }
}

impl std::fmt::Display for ReferentialAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Default)]
pub struct AddForeignKeyConstraintChange {
    pub constraint_name: String,
    pub base_table_name: String,
    pub base_column_names: Vec<String>,
    pub referenced_table_name: String,
    pub referenced_column_names: Vec<String>,
    pub on_update: ReferentialAction,
    pub on_delete: ReferentialAction,
    pub deferrable: bool,
}

impl Change for AddForeignKeyConstraintChange {
    fn change_name(&self) -> &str {
        "addForeignKeyConstraint"
    }

    fn description(&self) -> &str {
        "Adds a foreign key constraint to an existing column"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_referential_action_display() {
        assert_eq!(ReferentialAction::default(), ReferentialAction::NoAction);
        assert_eq!(ReferentialAction::Cascade.to_string(), "CASCADE");
        assert_eq!(ReferentialAction::SetNull.as_str(), "SET NULL");
    }
}
