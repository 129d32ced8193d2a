//! Integration tests for epi-output.

use epi_core::{Rect, Rgb, RowMarker, SimConfig};
use epi_model::{Compartment, CompartmentCatalog};
use epi_sim::{ClusterSpec, HistoryRow, ResultRow, Simulation, SimulationBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn names() -> Vec<String> {
    ["alive", "infections", "S", "I"].map(String::from).to_vec()
}

fn result_row(marker: RowMarker) -> ResultRow {
    ResultRow { marker, values: vec![10, 2, 8, 2] }
}

fn history_row(agent: u32, marker: RowMarker, compartment: &str) -> HistoryRow {
    HistoryRow {
        agent: epi_core::AgentId(agent),
        marker,
        compartment: compartment.to_string(),
    }
}

fn small_sim(max_iterations: u64) -> Simulation {
    let compartments = vec![
        Compartment::new("S", Rgb::new(0, 200, 0)).ratio(90.0),
        Compartment::new("I", Rgb::new(200, 0, 0)).infectious(0.5).ratio(10.0),
        Compartment::new("D", Rgb::new(40, 40, 40)),
    ];
    let catalog = CompartmentCatalog::new(compartments, "S", "I", "D").unwrap();
    let config = SimConfig {
        max_iterations,
        seed: Some(1),
        ..SimConfig::default()
    };
    SimulationBuilder::new(config)
        .cluster(ClusterSpec::new("main", Rect::new(0.0, 0.0, 320.0, 320.0), 15).catalog(catalog))
        .build()
        .unwrap()
}

// ── CSV tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::CsvWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("results.csv").exists());
        assert!(dir.path().join("history.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_results_header(&names()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("results.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["marker", "alive", "infections", "S", "I"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("history.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["agent_id", "marker", "compartment"]);
    }

    #[test]
    fn csv_result_rows_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_results_header(&names()).unwrap();
        w.write_result_row(&result_row(RowMarker::Start)).unwrap();
        w.write_result_row(&result_row(RowMarker::Tick(0))).unwrap();
        w.write_result_row(&result_row(RowMarker::End)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("results.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "S");
        assert_eq!(&rows[1][0], "0");
        assert_eq!(&rows[2][0], "E");
        assert_eq!(&rows[0][1], "10"); // alive
        assert_eq!(&rows[0][4], "2");  // I
    }

    #[test]
    fn csv_history_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_history(&[
            history_row(0, RowMarker::Start, "S"),
            history_row(0, RowMarker::Tick(3), "I"),
            history_row(1, RowMarker::Start, "I"),
        ])
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("history.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[1][0], "0");
        assert_eq!(&rows[1][1], "3");
        assert_eq!(&rows[1][2], "I");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn integration_csv() {
        use crate::observer::SimOutputObserver;

        let mut sim = small_sim(6);
        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.play(&mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");

        // S + 6 ticks + E
        let mut rdr = csv::Reader::from_path(dir.path().join("results.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 8, "expected 8 result rows, got {}", rows.len());
        assert_eq!(&rows[0][0], "S");
        assert_eq!(&rows[7][0], "E");

        // Every agent contributes at least its birth entry.
        let mut rdr2 = csv::Reader::from_path(dir.path().join("history.csv")).unwrap();
        let history: Vec<_> = rdr2.records().map(|r| r.unwrap()).collect();
        assert!(history.len() >= 15);
        assert!(history.iter().filter(|r| &r[1] == "S").count() >= 15);
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_results_long_format() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_results_header(&names()).unwrap();
        w.write_result_row(&result_row(RowMarker::Start)).unwrap();
        w.write_result_row(&result_row(RowMarker::Tick(4))).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM results", [], |r| r.get(0))
            .unwrap();
        // 2 rows × 4 counters
        assert_eq!(count, 8);

        let alive: i64 = conn
            .query_row(
                "SELECT value FROM results WHERE seq = 0 AND counter = 'alive'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(alive, 10);

        let marker: String = conn
            .query_row("SELECT marker FROM results WHERE seq = 1 LIMIT 1", [], |r| r.get(0))
            .unwrap();
        assert_eq!(marker, "4");
    }

    #[test]
    fn sqlite_history_rows() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_history(&[
            history_row(0, RowMarker::Start, "S"),
            history_row(0, RowMarker::Tick(2), "I"),
        ])
        .unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (marker, compartment): (String, String) = conn
            .query_row(
                "SELECT marker, compartment FROM history WHERE agent_id = 0 AND marker = '2'",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(marker, "2");
        assert_eq!(compartment, "I");
    }

    #[test]
    fn integration_sqlite() {
        use crate::observer::SimOutputObserver;

        let mut sim = small_sim(4);
        let dir = tmp();
        let writer = SqliteWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.play(&mut obs);
        assert!(obs.take_error().is_none());

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let seqs: i64 = conn
            .query_row("SELECT COUNT(DISTINCT seq) FROM results", [], |r| r.get(0))
            .unwrap();
        // S + 4 ticks + E
        assert_eq!(seqs, 6);
        let history: i64 = conn
            .query_row("SELECT COUNT(*) FROM history", [], |r| r.get(0))
            .unwrap();
        assert!(history >= 15);
    }
}
