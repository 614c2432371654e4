pub mod attacks;
pub mod loader;
pub mod precompute;
pub mod search;
pub mod structs;

pub use structs::MagicTables;

use once_cell::sync::OnceCell;

/// Process-wide magic tables, materialized on first use and read-only
/// afterwards.
pub fn magic_tables() -> &'static MagicTables {
    static TABLES: OnceCell<MagicTables> = OnceCell::new();
    TABLES.get_or_init(loader::load_magic_tables)
}
