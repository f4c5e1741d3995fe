use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::trim::{Boundary, DepadWindow};

/// 一次修剪的摘要，可序列化为 JSON 写入报告文件
#[derive(Debug, Clone, Serialize)]
pub struct TrimReport {
    /// Source of the alignment (file path in the CLI), if known.
    pub input: Option<String>,
    pub trim_guide: String,
    pub boundary: Boundary,
    pub removed: Vec<String>,
    pub depad: DepadWindow,
    pub sequences_before: usize,
    pub sequences_after: usize,
    pub width_before: usize,
    pub width_after: usize,
    pub timestamp: String,
}

impl TrimReport {
    pub fn new(
        trim_guide: &str,
        boundary: Boundary,
        removed: Vec<String>,
        depad: DepadWindow,
        sequences: (usize, usize),
        width: (usize, usize),
    ) -> Self {
        Self {
            input: None,
            trim_guide: trim_guide.to_string(),
            boundary,
            removed,
            depad,
            sequences_before: sequences.0,
            sequences_after: sequences.1,
            width_before: width.0,
            width_after: width.1,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }
}

pub fn save_reports(reports: &[TrimReport], path: &str) -> Result<()> {
    let f = std::fs::File::create(path)?;
    let mut w = std::io::BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, reports)?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_to_json() {
        let r = TrimReport::new(
            "ref",
            Boundary { start_col: 4, end_col: 12 },
            vec!["q9".to_string()],
            DepadWindow { start: 4, end: 11 },
            (3, 2),
            (16, 8),
        )
        .with_input("aln.fa");
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["input"], "aln.fa");
        assert_eq!(v["boundary"]["start_col"], 4);
        assert_eq!(v["depad"]["end"], 11);
        assert_eq!(v["removed"][0], "q9");
        assert_eq!(v["width_after"], 8);
        assert!(chrono::DateTime::parse_from_rfc3339(v["timestamp"].as_str().unwrap()).is_ok());
    }

    #[test]
    fn save_reports_writes_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let r = TrimReport::new(
            "ref",
            Boundary { start_col: 1, end_col: 3 },
            Vec::new(),
            DepadWindow { start: 1, end: 2 },
            (3, 3),
            (4, 2),
        );
        save_reports(&[r.clone(), r], path.to_str().unwrap()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(v.as_array().unwrap().len(), 2);
        assert_eq!(v[1]["trim_guide"], "ref");
    }
}
