use crate::column::{add_column, drop_column, modify_data_type, rename_column};
use crate::constraint::{add_foreign_key, add_not_null, add_primary_key};
use crate::index::{create_index, drop_index};
use crate::raw::{sql, sql_file};
use crate::table::{create_table, create_view, drop_table, rename_table};
use crate::tag_database;
use delta_core::error::DeltaError;
use delta_plugin::descriptor::ChangeDescriptor;
use delta_plugin::discovery::{Candidate, DiscoveryProvider, StaticDiscovery};

/// Every built-in change type with the module path it is discovered under.
pub fn builtin_candidates() -> Vec<Candidate> {
    vec![
        // Column changes
        Candidate::direct("delta.change.column", ChangeDescriptor::of::<add_column::AddColumnChange>()),
        Candidate::direct("delta.change.column", ChangeDescriptor::of::<drop_column::DropColumnChange>()),
        Candidate::direct("delta.change.column", ChangeDescriptor::of::<rename_column::RenameColumnChange>()),
        Candidate::direct(
            "delta.change.column",
            ChangeDescriptor::of::<modify_data_type::ModifyDataTypeChange>(),
        ),
        // Table changes
        Candidate::direct("delta.change.table", ChangeDescriptor::of::<create_table::CreateTableChange>()),
        Candidate::direct("delta.change.table", ChangeDescriptor::of::<drop_table::DropTableChange>()),
        Candidate::direct("delta.change.table", ChangeDescriptor::of::<rename_table::RenameTableChange>()),
        Candidate::direct("delta.change.table", ChangeDescriptor::of::<create_view::CreateViewChange>()),
        // Index changes
        Candidate::direct("delta.change.index", ChangeDescriptor::of::<create_index::CreateIndexChange>()),
        Candidate::direct("delta.change.index", ChangeDescriptor::of::<drop_index::DropIndexChange>()),
        // Constraint changes
        Candidate::direct(
            "delta.change.constraint",
            ChangeDescriptor::of::<add_primary_key::AddPrimaryKeyChange>(),
        ),
        Candidate::direct(
            "delta.change.constraint",
            ChangeDescriptor::of::<add_foreign_key::AddForeignKeyConstraintChange>(),
        ),
        Candidate::direct(
            "delta.change.constraint",
            ChangeDescriptor::of::<add_not_null::AddNotNullConstraintChange>(),
        ),
        // Raw SQL changes sit on the shared SQL base
        Candidate::inherited("delta.change.raw", 1, ChangeDescriptor::of::<sql::RawSqlChange>()),
        Candidate::inherited("delta.change.raw", 1, ChangeDescriptor::of::<sql_file::SqlFileChange>()),
        Candidate::direct("delta.change", ChangeDescriptor::of::<tag_database::TagDatabaseChange>()),
    ]
}

/// Discovery provider over the built-in change catalog.
#[derive(Debug, Clone)]
pub struct CatalogDiscovery {
    inner: StaticDiscovery,
}

impl CatalogDiscovery {
    pub fn new() -> Self {
        Self {
            inner: StaticDiscovery::new(builtin_candidates()),
        }
    }

    /// Catalog extended with additional candidates, e.g. from an embedding
    /// application.
    pub fn with_extra(extra: impl IntoIterator<Item = Candidate>) -> Self {
        let mut inner = StaticDiscovery::new(builtin_candidates());
        for candidate in extra {
            inner.push(candidate);
        }
        Self { inner }
    }
}

impl Default for CatalogDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscoveryProvider for CatalogDiscovery {
    fn name(&self) -> &str {
        "catalog"
    }

    fn discover(&self, namespace: &str) -> Result<Vec<Candidate>, DeltaError> {
        self.inner.discover(namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_keys_are_unique() {
        let names: Vec<String> = builtin_candidates()
            .iter()
            .map(|c| c.descriptor.declared_name().unwrap())
            .collect();
        let unique: HashSet<&String> = names.iter().collect();
        assert_eq!(names.len(), 16);
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_every_builtin_qualifies() {
        assert!(builtin_candidates().iter().all(|c| c.conformance.qualifies()));
    }

    #[test]
    fn test_discover_sub_namespace() {
        let found = CatalogDiscovery::new().discover("delta.change.index").unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_discover_rejects_empty_namespace() {
        assert!(matches!(
            CatalogDiscovery::new().discover(""),
            Err(DeltaError::Discovery { .. })
        ));
    }
}
