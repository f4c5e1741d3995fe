//! # msa-trim
//!
//! 将多序列比对（MSA）修剪到参考序列（trim guide）所覆盖的区域。
//!
//! 修剪分三个阶段，由 [`trim::AlignmentTrimmer`] 依次执行：
//!
//! - **边界查找**：在参考序列中找到首尾的 gap→残基 交界，确定残基范围
//! - **选择性遮蔽**：将指定序列在范围之外的列改写为 gap，移除全 gap 的序列
//! - **全局去填充**：去掉比对 5'/3' 端所有序列都为 gap 的列
//!
//! ## 快速示例
//!
//! ```rust
//! use msa_trim::alignment::{Alignment, Record};
//! use msa_trim::trim::{AlignmentTrimmer, TrimParams};
//!
//! let aln = Alignment::new(vec![
//!     Record::new("ref", "----ACGTACGT----"),
//!     Record::new("q1", "AAAAACGTACGTAAAA"),
//! ])?;
//! let mut trimmer = AlignmentTrimmer::new(aln, TrimParams::new("ref").with_targets(["q1"]));
//! trimmer.run()?;
//!
//! let out = trimmer.into_alignment();
//! assert!(out.records().iter().all(|r| r.seq == b"ACGTACGT"));
//! # Ok::<(), msa_trim::error::TrimError>(())
//! ```
//!
//! ## 模块说明
//!
//! - [`alignment`] — 比对数据模型（记录、列访问、最少序列数检查）
//! - [`trim`] — 修剪算法（边界、遮蔽、去填充）
//! - [`error`] — 类型化错误
//! - [`io`] — 比对 FASTA 读写
//! - [`config`] — TOML 配置
//! - [`batch`] — 多文件批量修剪（每个输入一个修剪器）
//! - [`report`] — 修剪摘要（JSON）
//! - [`util`] — 标识符清洗

pub mod alignment;
pub mod batch;
pub mod config;
pub mod error;
pub mod io;
pub mod report;
pub mod trim;
pub mod util;
