use std::collections::HashSet;
use std::path::Path;

use pipeline_logging::pipeline_debug;
use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeenError {
    #[error("dedup store error: {0}")]
    Store(#[from] rusqlite::Error),
}

/// Durable record of previously processed image locators.
///
/// Backed by a single SQLite table keyed by the locator string. The full set
/// is mirrored into memory at open for fast membership checks; fine while
/// the set stays small. Append-only within a run; there is no deletion path.
/// Assumes a single run at a time — concurrent runs would race on the
/// check-then-record pair.
pub struct SeenSet {
    conn: Connection,
    mirror: HashSet<String>,
}

impl SeenSet {
    /// Opens (creating if necessary) the store at `path` and loads all known
    /// locators into the in-memory mirror.
    pub fn open(path: &Path) -> Result<Self, SeenError> {
        let conn = Connection::open(path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS ImageUrl (image_url TEXT PRIMARY KEY)",
            [],
        )?;

        let mut mirror = HashSet::new();
        {
            let mut stmt = conn.prepare("SELECT image_url FROM ImageUrl")?;
            let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
            for row in rows {
                mirror.insert(row?);
            }
        }
        pipeline_debug!("loaded {} seen locators from {:?}", mirror.len(), path);

        Ok(Self { conn, mirror })
    }

    pub fn contains(&self, locator: &str) -> bool {
        self.mirror.contains(locator)
    }

    /// Records a locator as processed. Idempotent: recording a locator twice
    /// is not an error.
    pub fn record(&mut self, locator: &str) -> Result<(), SeenError> {
        self.conn.execute(
            "INSERT OR IGNORE INTO ImageUrl (image_url) VALUES (?1)",
            [locator],
        )?;
        self.mirror.insert(locator.to_string());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.mirror.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mirror.is_empty()
    }
}
