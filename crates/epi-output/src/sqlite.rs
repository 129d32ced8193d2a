//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables.  The counter layout varies per simulation, so `results` is a
//! long-format table (one row per counter per phase execution) rather than a
//! wide table with per-model columns:
//!
//! - `results (seq, marker, counter, value)`
//! - `history (agent_id, marker, compartment)`

use std::path::Path;

use rusqlite::Connection;

use epi_sim::{HistoryRow, ResultRow};

use crate::writer::OutputWriter;
use crate::OutputResult;

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    names:    Vec<String>,
    next_seq: i64,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS results (
                 seq     INTEGER NOT NULL,
                 marker  TEXT    NOT NULL,
                 counter TEXT    NOT NULL,
                 value   INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS history (
                 agent_id    INTEGER NOT NULL,
                 marker      TEXT    NOT NULL,
                 compartment TEXT    NOT NULL
             );",
        )?;

        Ok(Self {
            conn,
            names: Vec::new(),
            next_seq: 0,
            finished: false,
        })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_results_header(&mut self, names: &[String]) -> OutputResult<()> {
        self.names = names.to_vec();
        Ok(())
    }

    fn write_result_row(&mut self, row: &ResultRow) -> OutputResult<()> {
        let seq = self.next_seq;
        self.next_seq += 1;

        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO results (seq, marker, counter, value) \
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            let marker = row.marker.to_string();
            for (name, value) in self.names.iter().zip(&row.values) {
                stmt.execute(rusqlite::params![seq, marker, name, value])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_history(&mut self, rows: &[HistoryRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO history (agent_id, marker, compartment) \
                 VALUES (?1, ?2, ?3)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.agent.0,
                    row.marker.to_string(),
                    row.compartment,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
