use serde::Serialize;

use crate::alignment::Alignment;
use crate::error::{TrimError, TrimResult};

/// Inclusive column window kept by depadding, in the coordinates of the
/// alignment before it was sliced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DepadWindow {
    pub start: usize,
    pub end: usize,
}

/// 找出首尾第一列非全 gap 的位置；全部为 gap（或没有列、没有记录）时报错。
pub fn depad_window(aln: &Alignment, gap: u8) -> TrimResult<DepadWindow> {
    if aln.is_empty() {
        return Err(TrimError::AllGapAlignment);
    }
    let width = aln.width();
    let start = (0..width)
        .find(|&c| !aln.column_is_gap(c, gap))
        .ok_or(TrimError::AllGapAlignment)?;
    let end = (start..width)
        .rev()
        .find(|&c| !aln.column_is_gap(c, gap))
        .ok_or(TrimError::AllGapAlignment)?;
    Ok(DepadWindow { start, end })
}

/// 去除整个比对 5'/3' 端的全 gap 列。失败时比对保持不变。
pub fn depad(aln: &mut Alignment, gap: u8) -> TrimResult<DepadWindow> {
    let window = depad_window(aln, gap)?;
    if window.start > 0 || window.end + 1 < aln.width() {
        aln.slice_columns(window.start, window.end);
    }
    log::debug!("depadded alignment to columns {}..={}", window.start, window.end);
    Ok(window)
}
