use std::collections::HashSet;

use crate::error::{TrimError, TrimResult};

/// 比对中的一条序列：标识符 + 比对后的序列（含 gap 字符）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub desc: Option<String>,
    pub seq: Vec<u8>,
}

impl Record {
    pub fn new(id: impl Into<String>, seq: impl Into<Vec<u8>>) -> Self {
        Self { id: id.into(), desc: None, seq: seq.into() }
    }

    pub fn is_all_gap(&self, gap: u8) -> bool {
        self.seq.iter().all(|&b| b == gap)
    }
}

/// 多序列比对：行优先存储的矩阵，所有记录等长且标识符唯一。
///
/// 列访问按行遍历，代价为 O(rows)。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    records: Vec<Record>,
    width: usize,
}

impl Alignment {
    /// 校验后构建比对：非空、矩形、标识符唯一。
    pub fn new(records: Vec<Record>) -> TrimResult<Self> {
        let first = records.first().ok_or(TrimError::EmptyAlignment)?;
        let width = first.seq.len();

        let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
        for rec in &records {
            if rec.seq.len() != width {
                return Err(TrimError::RaggedAlignment {
                    id: rec.id.clone(),
                    expected: width,
                    found: rec.seq.len(),
                });
            }
            if !seen.insert(rec.id.as_str()) {
                return Err(TrimError::DuplicateId { id: rec.id.clone() });
            }
        }

        Ok(Self { records, width })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Alignment length (column count).
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|r| r.id.as_str())
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// 第 `col` 列（0-based）自上而下的字符；`col >= width` 时返回 `None`。
    pub fn column(&self, col: usize) -> Option<impl Iterator<Item = u8> + '_> {
        (col < self.width).then(|| self.records.iter().map(move |r| r.seq[col]))
    }

    /// True when every record has `gap` at `col`. Out-of-range columns hold
    /// no residue and count as gap.
    pub fn column_is_gap(&self, col: usize, gap: u8) -> bool {
        self.column(col).map_or(true, |mut c| c.all(|b| b == gap))
    }

    pub fn has_min_sequences(&self, min: usize) -> bool {
        self.records.len() >= min
    }

    /// Post-condition check for downstream steps that need a minimum number
    /// of sequences. Trimming itself never enforces this.
    pub fn ensure_min_sequences(&self, min: usize) -> TrimResult<()> {
        if self.has_min_sequences(min) {
            Ok(())
        } else {
            Err(TrimError::InsufficientSequenceCount { found: self.records.len(), required: min })
        }
    }

    pub(crate) fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }

    pub(crate) fn retain(&mut self, f: impl FnMut(&Record) -> bool) {
        self.records.retain(f);
    }

    /// Keep only columns `start..=end` in every record.
    pub(crate) fn slice_columns(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end && end < self.width);
        for rec in &mut self.records {
            rec.seq.truncate(end + 1);
            rec.seq.drain(..start);
        }
        self.width = end + 1 - start;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty() {
        assert_eq!(Alignment::new(Vec::new()), Err(TrimError::EmptyAlignment));
    }

    #[test]
    fn new_rejects_ragged_rows() {
        let err = Alignment::new(vec![Record::new("a", "AC-T"), Record::new("b", "AC-")]).unwrap_err();
        assert_eq!(err, TrimError::RaggedAlignment { id: "b".into(), expected: 4, found: 3 });
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let err = Alignment::new(vec![Record::new("a", "AC"), Record::new("a", "GT")]).unwrap_err();
        assert_eq!(err, TrimError::DuplicateId { id: "a".into() });
    }

    #[test]
    fn column_access_and_gap_check() {
        let aln = Alignment::new(vec![Record::new("a", "-AC"), Record::new("b", "-G-")]).unwrap();
        assert_eq!(aln.width(), 3);
        assert_eq!(aln.column(1).unwrap().collect::<Vec<_>>(), b"AG");
        assert!(aln.column(3).is_none());
        assert!(aln.column_is_gap(3, b'-'));
        assert!(aln.column_is_gap(0, b'-'));
        assert!(!aln.column_is_gap(2, b'-'));
        assert_eq!(aln.position("b"), Some(1));
        assert!(aln.get("c").is_none());
    }

    #[test]
    fn slice_columns_keeps_inclusive_window() {
        let mut aln = Alignment::new(vec![Record::new("a", "--ACGT--"), Record::new("b", "-TTCG---")]).unwrap();
        aln.slice_columns(1, 5);
        assert_eq!(aln.width(), 5);
        assert_eq!(aln.records()[0].seq, b"-ACGT");
        assert_eq!(aln.records()[1].seq, b"TTCG-");
    }

    #[test]
    fn min_sequence_policy() {
        let aln = Alignment::new(vec![Record::new("a", "A"), Record::new("b", "C")]).unwrap();
        assert!(aln.ensure_min_sequences(2).is_ok());
        assert_eq!(
            aln.ensure_min_sequences(3),
            Err(TrimError::InsufficientSequenceCount { found: 2, required: 3 })
        );
    }
}
