pub mod add_foreign_key;
pub mod add_not_null;
pub mod add_primary_key;
