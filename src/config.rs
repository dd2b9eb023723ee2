use crate::page_style::PageStyle;
use crate::stamp_composer::{StampLayout, StampStyle};
use crate::Error;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Activation keys of the external document engines.
/// Handed to the engines once, before the first conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LicenseConfig {
    pub converter_serial: String,
    pub document_serial: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineConfig {
    /// Base name of the input and output files, without extension.
    pub file_name: String,
    /// Directory the files are read from and written to.
    pub work_dir: PathBuf,
    pub page_style: PageStyle,
    pub layout: StampLayout,
    pub stamp_style: StampStyle,
    pub license: LicenseConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            file_name: "SampleDoc".to_owned(),
            work_dir: PathBuf::from("."),
            page_style: PageStyle::default(),
            layout: StampLayout::default(),
            stamp_style: StampStyle::default(),
            license: LicenseConfig::default(),
        }
    }
}

impl PipelineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let data = std::fs::read_to_string(path.as_ref())?;
        log::info!("Loaded configuration from `{}`.", path.as_ref().display());
        Self::from_json_str(&data)
    }

    pub fn spreadsheet_path(&self) -> PathBuf {
        self.file_path("xlsx")
    }

    pub fn pdf_path(&self) -> PathBuf {
        self.file_path("pdf")
    }

    /// `{work_dir}/{file_name}.{extension}`
    pub fn file_path(&self, extension: &str) -> PathBuf {
        self.work_dir
            .join(format!("{}.{}", self.file_name, extension))
    }
}
