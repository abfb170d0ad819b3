pub mod create_table;
pub mod create_view;
pub mod drop_table;
pub mod rename_table;
