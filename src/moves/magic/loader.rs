//! Magic tables as an on-disk artifact. With the `load_magic` feature the
//! loader prefers a previously saved `bincode` file and falls back to
//! regeneration; generation is deterministic, so both paths agree.

use super::precompute::{MAGIC_SEED, generate_magic_tables};
use super::structs::MagicTables;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

pub const MAGIC_TABLES_FILE: &str = "magic_tables.bin";

pub fn load_magic_tables() -> MagicTables {
    #[cfg(feature = "load_magic")]
    if let Ok(tables) = read_tables(Path::new(MAGIC_TABLES_FILE)) {
        return tables;
    }
    generate_magic_tables(MAGIC_SEED).expect("magic table generation failed")
}

pub fn read_tables(path: &Path) -> bincode::Result<MagicTables> {
    let file = File::open(path).map_err(|e| Box::new(bincode::ErrorKind::Io(e)))?;
    bincode::deserialize_from(BufReader::new(file))
}

pub fn write_tables(path: &Path, tables: &MagicTables) -> bincode::Result<()> {
    let file = File::create(path).map_err(|e| Box::new(bincode::ErrorKind::Io(e)))?;
    bincode::serialize_into(BufWriter::new(file), tables)
}
