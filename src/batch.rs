//! Batch trimming of aligned FASTA files, one trimmer per input.

use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use std::path::Path;

use crate::alignment::Alignment;
use crate::config::TrimConfig;
use crate::io::fasta;
use crate::report::{save_reports, TrimReport};
use crate::trim::{AlignmentTrimmer, TrimParams};
use crate::util::ids;

/// `<dir>/<stem>.trimmed.fa`, with `dir` defaulting to the input's directory.
pub fn output_path(input: &str, out_dir: Option<&Path>) -> String {
    let p = Path::new(input);
    let stem = p.file_stem().and_then(|s| s.to_str()).unwrap_or("alignment");
    let dir = out_dir.or_else(|| p.parent()).unwrap_or_else(|| Path::new(""));
    dir.join(format!("{}.trimmed.fa", stem)).to_string_lossy().into_owned()
}

/// 为每个输入确定输出路径；`out` 只允许单个输入。
pub fn output_paths(inputs: &[String], out: Option<&str>, out_dir: Option<&Path>) -> Result<Vec<String>> {
    match out {
        Some(o) if inputs.len() > 1 => {
            bail!("--out '{}' can only be used with a single input; use --out-dir for several", o)
        }
        Some(o) => Ok(vec![o.to_string()]),
        None => Ok(inputs.iter().map(|p| output_path(p, out_dir)).collect()),
    }
}

/// Result of one input. A report is present whenever trimming ran, even if
/// the trimmed alignment then failed the minimum-sequence check.
#[derive(Debug)]
pub struct InputOutcome {
    pub input: String,
    pub output: String,
    pub report: Option<TrimReport>,
    pub error: Option<anyhow::Error>,
}

impl InputOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

fn trim_to_file(input: &str, output: &str, cfg: &TrimConfig, params: &TrimParams) -> Result<(TrimReport, Alignment)> {
    let mut aln = fasta::read_alignment_file(input)?;
    if cfg.sanitize_ids {
        let (clean, renamed) = ids::sanitize_alignment_ids(aln)?;
        for (from, to) in &renamed {
            log::debug!("{}: renamed '{}' -> '{}'", input, from, to);
        }
        if renamed.is_empty() {
            log::info!("{}: zero sequence headers were modified", input);
        }
        aln = clean;
    }
    aln.ensure_min_sequences(cfg.min_sequences)
        .context("too few sequences to trim")?;

    let mut trimmer = AlignmentTrimmer::new(aln, params.clone());
    let report = trimmer.run()?.with_input(input);
    let aln = trimmer.into_alignment();

    fasta::write_alignment_file(output, &aln, cfg.line_width)?;
    log::info!("{}: trimmed alignment saved to {}", input, output);
    Ok((report, aln))
}

/// 修剪单个输入并写出结果。修剪后序列数不足时，输出文件和报告照常保留，
/// 但该输入记为失败。
pub fn trim_input(input: &str, output: &str, cfg: &TrimConfig, params: &TrimParams) -> InputOutcome {
    let (report, error) = match trim_to_file(input, output, cfg, params) {
        Ok((report, aln)) => {
            let error = aln
                .ensure_min_sequences(cfg.min_sequences)
                .context("trimmed alignment is unusable downstream")
                .err();
            (Some(report), error)
        }
        Err(e) => (None, Some(e)),
    };
    InputOutcome { input: input.to_string(), output: output.to_string(), report, error }
}

/// Trim every input on a pool of exactly `threads` workers (at least one).
pub fn run_batch(inputs: &[String], outputs: &[String], cfg: &TrimConfig, threads: usize) -> Result<Vec<InputOutcome>> {
    if inputs.len() != outputs.len() {
        bail!("{} inputs but {} output paths", inputs.len(), outputs.len());
    }
    let params = cfg.trim_params()?;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads.max(1))
        .build()
        .context("cannot configure thread pool")?;

    // one trimmer per alignment, nothing shared between them
    Ok(pool.install(|| {
        inputs
            .par_iter()
            .zip(outputs.par_iter())
            .map(|(input, output)| trim_input(input, output, cfg, &params))
            .collect()
    }))
}

/// Log failures, save every available report, and fail if any input failed.
pub fn finish_batch(outcomes: Vec<InputOutcome>, report_path: Option<&str>) -> Result<()> {
    let total = outcomes.len();
    let mut reports = Vec::with_capacity(total);
    let mut failed = 0usize;
    for outcome in outcomes {
        if let Some(e) = &outcome.error {
            failed += 1;
            log::error!("{}: {:#}", outcome.input, e);
        }
        if let Some(r) = outcome.report {
            reports.push(r);
        }
    }

    if let Some(p) = report_path {
        save_reports(&reports, p).with_context(|| format!("cannot write report to '{}'", p))?;
        log::info!("trim report saved: {}", p);
    }
    if failed > 0 {
        bail!("{} of {} alignment(s) could not be trimmed", failed, total);
    }
    Ok(())
}
