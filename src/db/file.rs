//! Reading and writing the database file.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::catalog::Catalog;

use super::{format, DbResult};

/// Write the whole catalogue to `path` and return the bytes written.
///
/// The file is truncated up front, so an encode failure can leave a partial
/// file behind. The in-memory catalogue is never affected either way.
pub fn save(catalog: &Catalog, path: impl AsRef<Path>) -> DbResult<u64> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let written = format::encode(&mut writer, catalog)?;
    writer.flush()?;
    debug!("Saved {} bytes to {}", written, path.display());
    Ok(written)
}

/// Read a whole catalogue from `path`.
///
/// The catalogue only comes into existence after every record has decoded
/// cleanly, so a failed load never produces partial state. Callers keep
/// whatever catalogue they already had.
pub fn load(path: impl AsRef<Path>) -> DbResult<Catalog> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let catalog = format::decode(&mut reader)?;
    debug!(
        "Loaded {} movies and {} users from {}",
        catalog.movies().len(),
        catalog.users().len(),
        path.display()
    );
    Ok(catalog)
}
