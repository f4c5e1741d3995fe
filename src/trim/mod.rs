pub mod boundary;
pub mod depad;
pub mod mask;

use std::collections::HashSet;

pub use boundary::{find_boundary, scan_boundary, Boundary};
pub use depad::{depad, depad_window, DepadWindow};
pub use mask::mask_flanks;

use crate::alignment::Alignment;
use crate::error::TrimResult;
use crate::report::TrimReport;

pub const DEFAULT_GAP: u8 = b'-';

/// 修剪所需的配置：gap 字符、参考序列 ID、需遮蔽的序列 ID 集合
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrimParams {
    pub gap_char: u8,
    pub trim_guide_id: String,
    pub trim_targets: HashSet<String>,
}

impl TrimParams {
    pub fn new(trim_guide_id: impl Into<String>) -> Self {
        Self { gap_char: DEFAULT_GAP, trim_guide_id: trim_guide_id.into(), trim_targets: HashSet::new() }
    }

    pub fn with_gap(mut self, gap_char: u8) -> Self {
        self.gap_char = gap_char;
        self
    }

    pub fn with_targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trim_targets.extend(targets.into_iter().map(Into::into));
        self
    }
}

/// 单个比对的修剪器：持有比对，按顺序执行
/// 边界查找 → 选择性遮蔽 → 全局去填充。
///
/// 每个实例只处理一个比对，多个比对并行时各自创建实例即可。
pub struct AlignmentTrimmer {
    alignment: Alignment,
    params: TrimParams,
    boundary: Option<Boundary>,
}

impl AlignmentTrimmer {
    pub fn new(alignment: Alignment, params: TrimParams) -> Self {
        Self { alignment, params, boundary: None }
    }

    pub fn alignment(&self) -> &Alignment {
        &self.alignment
    }

    pub fn params(&self) -> &TrimParams {
        &self.params
    }

    pub fn boundary(&self) -> Option<Boundary> {
        self.boundary
    }

    pub fn into_alignment(self) -> Alignment {
        self.alignment
    }

    /// Stage 1: locate the trim guide's residue span and remember it.
    pub fn find_boundary(&mut self) -> TrimResult<Boundary> {
        let b = find_boundary(&self.alignment, &self.params.trim_guide_id, self.params.gap_char)?;
        log::debug!(
            "trim guide '{}' boundary: start_col={} end_col={}",
            self.params.trim_guide_id,
            b.start_col,
            b.end_col
        );
        self.boundary = Some(b);
        Ok(b)
    }

    /// Stage 2: mask the flanks of every trim target and drop all-gap
    /// records. Runs boundary discovery first if it has not been done.
    pub fn mask_targets(&mut self) -> TrimResult<Vec<String>> {
        let b = match self.boundary {
            Some(b) => b,
            None => self.find_boundary()?,
        };
        mask_flanks(&mut self.alignment, &self.params.trim_targets, b, self.params.gap_char)
    }

    /// Stage 3: drop leading and trailing all-gap columns.
    pub fn depad(&mut self) -> TrimResult<DepadWindow> {
        depad(&mut self.alignment, self.params.gap_char)
    }

    /// 依次执行三个阶段，并返回本次修剪的摘要。
    pub fn run(&mut self) -> TrimResult<TrimReport> {
        let sequences_before = self.alignment.len();
        let width_before = self.alignment.width();

        let boundary = self.find_boundary()?;
        let removed = self.mask_targets()?;
        let window = self.depad()?;

        log::info!(
            "trimmed alignment: {} -> {} sequences, {} -> {} columns",
            sequences_before,
            self.alignment.len(),
            width_before,
            self.alignment.width()
        );

        Ok(TrimReport::new(
            &self.params.trim_guide_id,
            boundary,
            removed,
            window,
            (sequences_before, self.alignment.len()),
            (width_before, self.alignment.width()),
        ))
    }
}
