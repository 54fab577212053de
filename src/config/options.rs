// src/config/options.rs
use std::path::PathBuf;

use super::consts::DEFAULT_OUT_DIR;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// Reuse cached exports if present, scrape otherwise.
    Cache,
    /// Always refresh from the live page.
    Scrape,
    /// Cache only; fail rather than touch the network.
    Offline,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub source: DataSource,
    pub out_dir: PathBuf,
    pub format: ExportFormat,
    pub include_growth: bool,  // add the Growth Rate column to exports
    pub export_only: bool,     // write files and exit, no menu
    pub dump_raw: bool,        // also dump the cleaned concatenated samples
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            source: DataSource::Cache,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            format: ExportFormat::Csv,
            include_growth: false,
            export_only: false,
            dump_raw: false,
        }
    }
}

impl AppOptions {
    /// "<out_dir>/<stem>.<ext>" for the active format.
    pub fn out_file(&self, stem: &str) -> PathBuf {
        self.out_dir.join(join!(stem, ".", self.format.ext()))
    }
}
