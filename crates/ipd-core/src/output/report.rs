//! Report Output
//!
//! Writes experiment reports as pretty JSON and generation histories as JSONL.

use ipd_events::{ExperimentReport, GenerationRecord, SocietySnapshot};
use std::fs;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write the full report, creating parent directories as needed.
pub fn write_report(report: &ExperimentReport, path: impl AsRef<Path>) -> Result<(), ReportError> {
    let path = path.as_ref();
    ensure_parent(path)?;
    fs::write(path, report.to_json()?)?;
    Ok(())
}

/// Write one society's per-agent state as pretty JSON.
pub fn write_snapshot(snapshot: &SocietySnapshot, path: impl AsRef<Path>) -> Result<(), ReportError> {
    let path = path.as_ref();
    ensure_parent(path)?;
    fs::write(path, serde_json::to_string_pretty(snapshot)?)?;
    Ok(())
}

/// Write one generation record per line.
pub fn write_history_jsonl(
    history: &[GenerationRecord],
    path: impl AsRef<Path>,
) -> Result<(), ReportError> {
    let path = path.as_ref();
    ensure_parent(path)?;
    let mut file = fs::File::create(path)?;
    for record in history {
        writeln!(file, "{}", record.to_jsonl()?)?;
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipd_events::{fixtures, AgentSnapshot};

    #[test]
    fn test_write_history_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/history.jsonl");
        let history = fixtures::sample_history();

        write_history_jsonl(&history, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: Vec<GenerationRecord> = content
            .lines()
            .map(|l| GenerationRecord::from_jsonl(l).unwrap())
            .collect();
        assert_eq!(parsed, history);
    }

    #[test]
    fn test_write_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        let mut snapshot = SocietySnapshot::new("society_0000", 10);
        snapshot.agents.push(AgentSnapshot::new(0, "tit_for_tat"));
        snapshot.agents.push(AgentSnapshot::new(1, "always_defect"));

        write_snapshot(&snapshot, &path).unwrap();

        let parsed: SocietySnapshot =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.generation, 10);
        assert_eq!(parsed.trust_count(), 1);
    }
}
