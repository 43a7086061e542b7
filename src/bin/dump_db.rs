//! Prints every recorded announcement, oldest first. Read-only; shares
//! nothing with the pipeline beyond the database file.

use anyhow::Result;
use opowatch::config::db_path_from_env;
use opowatch::store::SeenStore;

fn main() -> Result<()> {
    let path = db_path_from_env();
    let store = SeenStore::open_read_only(&path)?;
    for row in store.dump_all()? {
        println!("{} | {} | {} | {}", row.id, row.fuente, row.titulo, row.enlace);
    }
    Ok(())
}
