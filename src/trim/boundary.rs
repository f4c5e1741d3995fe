use std::ops::Range;

use serde::Serialize;

use crate::alignment::Alignment;
use crate::error::{TrimError, TrimResult};

/// 修剪参考（trim guide）序列在比对中的实际残基范围。
///
/// 沿用 1-based 约定：`start_col` 为首个 gap→残基 交界处 gap 的位置 + 1，
/// `end_col` 为末端交界换算回正向坐标后 + 1。
/// 换成 0-based 半开区间，`[start_col, end_col)` 恰好覆盖参考序列的残基。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Boundary {
    pub start_col: usize,
    pub end_col: usize,
}

impl Boundary {
    /// Columns kept by flank masking, as a 0-based half-open range.
    pub fn span(&self) -> Range<usize> {
        self.start_col..self.end_col
    }

    /// Zero for a hand-built boundary whose ends cross.
    pub fn width(&self) -> usize {
        self.end_col.saturating_sub(self.start_col)
    }
}

#[inline]
fn is_residue(b: u8, gap: u8) -> bool {
    // case-insensitive: any ASCII letter that is not the gap symbol
    b != gap && b.is_ascii_alphabetic()
}

/// 在单条序列上查找边界。只取两端各自的第一个交界，内部 gap 不视为边界。
pub fn scan_boundary(seq: &[u8], gap: u8) -> Result<Boundary, &'static str> {
    // leading: gap immediately followed by a residue
    let lead = seq
        .windows(2)
        .position(|w| w[0] == gap && is_residue(w[1], gap))
        .ok_or("no leading gap-to-residue junction")?;
    // trailing: same scan on the reversed sequence, i.e. the last residue followed by a gap
    let trail = seq
        .windows(2)
        .rposition(|w| is_residue(w[0], gap) && w[1] == gap)
        .ok_or("no trailing residue-to-gap junction")?;

    let start_col = lead + 1;
    let end_col = trail + 1;
    if start_col >= end_col {
        return Err("leading and trailing junctions cross");
    }
    Ok(Boundary { start_col, end_col })
}

/// Locate the trim guide in `aln` and compute its boundary.
pub fn find_boundary(aln: &Alignment, guide_id: &str, gap: u8) -> TrimResult<Boundary> {
    let guide = aln
        .get(guide_id)
        .ok_or_else(|| TrimError::TrimGuideNotFound { id: guide_id.to_string() })?;
    scan_boundary(&guide.seq, gap).map_err(|reason| TrimError::BoundaryNotFound { id: guide_id.to_string(), reason })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::Record;

    #[test]
    fn boundary_spans_guide_residues() {
        let b = scan_boundary(b"----ACGTACGT----", b'-').unwrap();
        assert_eq!(b, Boundary { start_col: 4, end_col: 12 });
        assert_eq!(b.span(), 4..12);
        assert_eq!(b.width(), 8);
    }

    #[test]
    fn crossed_boundary_has_zero_width() {
        let b = Boundary { start_col: 7, end_col: 3 };
        assert_eq!(b.width(), 0);
        assert!(b.span().is_empty());
    }

    #[test]
    fn internal_gaps_are_not_boundaries() {
        let seq = b"--A-CGT--";
        let b = scan_boundary(seq, b'-').unwrap();
        assert_eq!(b.span(), 2..7);
        assert_eq!(&seq[b.span()], b"A-CGT");
    }

    #[test]
    fn lowercase_residues_count() {
        let b = scan_boundary(b"--acg-", b'-').unwrap();
        assert_eq!(b.span(), 2..5);
    }

    #[test]
    fn non_letter_after_gap_is_not_a_junction() {
        let b = scan_boundary(b"-*-AC--", b'-').unwrap();
        assert_eq!(b.span(), 3..5);
    }

    #[test]
    fn all_gap_guide_has_no_boundary() {
        assert!(scan_boundary(b"--------", b'-').is_err());
    }

    #[test]
    fn guide_without_flanking_gaps_has_no_boundary() {
        assert_eq!(scan_boundary(b"ACGTACGT", b'-'), Err("no leading gap-to-residue junction"));
        assert_eq!(scan_boundary(b"--ACGT", b'-'), Err("no trailing residue-to-gap junction"));
        assert_eq!(scan_boundary(b"ACGT--", b'-'), Err("no leading gap-to-residue junction"));
    }

    #[test]
    fn crossing_junctions_are_rejected() {
        // only an internal gap: leading junction lands after the trailing one
        assert_eq!(scan_boundary(b"A-C", b'-'), Err("leading and trailing junctions cross"));
    }

    #[test]
    fn custom_gap_char() {
        let b = scan_boundary(b"..AC.G..", b'.').unwrap();
        assert_eq!(b.span(), 2..6);
    }

    #[test]
    fn find_boundary_reports_missing_guide() {
        let aln = Alignment::new(vec![Record::new("q1", "--AC--")]).unwrap();
        assert_eq!(
            find_boundary(&aln, "ref", b'-'),
            Err(TrimError::TrimGuideNotFound { id: "ref".into() })
        );
        assert_eq!(find_boundary(&aln, "q1", b'-'), Ok(Boundary { start_col: 2, end_col: 4 }));
    }

    #[test]
    fn find_boundary_reports_all_gap_guide() {
        let aln = Alignment::new(vec![Record::new("ref", "------"), Record::new("q1", "AACCGG")]).unwrap();
        assert!(matches!(find_boundary(&aln, "ref", b'-'), Err(TrimError::BoundaryNotFound { .. })));
    }
}
