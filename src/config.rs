//! TOML configuration for trimming runs.
//!
//! Every field is optional in the file; command-line flags override file
//! values.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::io::fasta::DEFAULT_LINE_WIDTH;
use crate::trim::{TrimParams, DEFAULT_GAP};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimConfig {
    /// Identifier of the trim guide (reference amplicon) record
    pub guide: Option<String>,
    /// Records whose flanks are masked to the guide's span
    pub targets: Vec<String>,
    /// Gap symbol, a single character
    pub gap_char: char,
    /// Alignments with fewer records are skipped before and after trimming
    pub min_sequences: usize,
    /// Clean record and target identifiers before trimming
    pub sanitize_ids: bool,
    /// Output FASTA line width (0 = unwrapped)
    pub line_width: usize,
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            guide: None,
            targets: Vec::new(),
            gap_char: DEFAULT_GAP as char,
            min_sequences: 3,
            sanitize_ids: false,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl TrimConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
        let config: TrimConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;
        Ok(config)
    }

    /// Load `path` if given, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                log::info!("Loading configuration from: {}", p.display());
                Self::load_from_file(p)
            }
            None => Ok(Self::default()),
        }
    }

    /// Build the core trim parameters, checking what the core cannot.
    pub fn trim_params(&self) -> Result<TrimParams> {
        let Some(guide) = self.guide.as_deref() else {
            bail!("no trim guide given (use --guide or set `guide` in the config file)");
        };
        if !self.gap_char.is_ascii() {
            bail!("gap character '{}' is not a single ASCII character", self.gap_char);
        }
        if self.gap_char.is_ascii_alphabetic() {
            log::warn!("gap character '{}' is a letter and can never start a boundary", self.gap_char);
        }

        let targets: Vec<String> = if self.sanitize_ids {
            self.targets.iter().map(|t| crate::util::ids::sanitize_id(t)).collect()
        } else {
            self.targets.clone()
        };
        let guide = if self.sanitize_ids { crate::util::ids::sanitize_id(guide) } else { guide.to_string() };

        Ok(TrimParams::new(guide).with_gap(self.gap_char as u8).with_targets(targets))
    }
}
