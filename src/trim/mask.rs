use std::collections::HashSet;

use crate::alignment::{Alignment, Record};
use crate::error::{TrimError, TrimResult};
use crate::trim::boundary::Boundary;

/// 判断记录在遮蔽后是否全为 gap（不修改记录）
fn all_gap_after_mask(rec: &Record, masked: bool, keep: &std::ops::Range<usize>, gap: u8) -> bool {
    if masked {
        rec.seq[keep.clone()].iter().all(|&b| b == gap)
    } else {
        rec.is_all_gap(gap)
    }
}

/// 将 `targets` 中的记录在边界之外的列改写为 gap，并移除遮蔽后全为 gap 的记录。
///
/// 返回被移除记录的标识符（保持原有顺序）。不在 `targets` 中的记录不会被遮蔽，
/// 但若其本身全为 gap，同样会被移除。若所有记录都会被移除，返回
/// [`TrimError::AllGapAlignment`]，比对保持不变。
pub fn mask_flanks(
    aln: &mut Alignment,
    targets: &HashSet<String>,
    boundary: Boundary,
    gap: u8,
) -> TrimResult<Vec<String>> {
    let width = aln.width();
    let end = boundary.end_col.min(width);
    let start = boundary.start_col.min(end);
    let keep = start..end;

    for id in targets {
        if aln.position(id).is_none() {
            log::warn!("trim target '{}' is not in the alignment", id);
        }
    }

    let retained = aln
        .records()
        .iter()
        .filter(|r| !all_gap_after_mask(r, targets.contains(&r.id), &keep, gap))
        .count();
    if retained == 0 {
        return Err(TrimError::AllGapAlignment);
    }

    let mut masked = 0usize;
    for rec in aln.records_mut() {
        if targets.contains(&rec.id) {
            rec.seq[..start].fill(gap);
            rec.seq[end..].fill(gap);
            masked += 1;
        }
    }

    let mut removed = Vec::new();
    aln.retain(|rec| {
        if rec.is_all_gap(gap) {
            log::warn!("{} contains only gaps after trimming, removing it from the alignment", rec.id);
            removed.push(rec.id.clone());
            false
        } else {
            true
        }
    });
    log::debug!(
        "masked {} record(s) outside columns [{}, {}), removed {}",
        masked,
        start,
        end,
        removed.len()
    );

    Ok(removed)
}
