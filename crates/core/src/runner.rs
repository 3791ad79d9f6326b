//! Main runner that coordinates config, parsing, detection, and command generation

use crate::{
    command::{CommandBuilder, RunCommand},
    config::Config,
    error::{Error, Result},
    parser::SuiteParser,
    patterns::{RunnableDetector, merge_markers},
    tree::Document,
    types::{FileKind, MergedMarker, RunnableMarker},
};
use std::path::Path;
use tracing::debug;

pub struct SuiteRunner {
    detector: RunnableDetector,
    parser: SuiteParser,
    config: Config,
}

impl SuiteRunner {
    /// Runner with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self {
            detector: RunnableDetector::new(),
            parser: SuiteParser::new()?,
            config,
        })
    }

    /// Runner using the config file that governs `path`
    pub fn for_path(path: &Path) -> Result<Self> {
        Self::with_config(Config::load_for(path)?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn file_kind(&self, file_path: &Path) -> FileKind {
        FileKind::from_path(file_path, &self.config.suite_extensions)
    }

    pub fn is_suite(&self, file_path: &Path) -> bool {
        self.file_kind(file_path) == FileKind::Suite
    }

    pub fn load_document(&self, file_path: &Path) -> Result<Document> {
        let file_kind = self.file_kind(file_path);
        debug!("Loading {:?} as {:?}", file_path, file_kind);
        self.parser.parse_file(file_path, file_kind)
    }

    pub fn detect_markers(&self, file_path: &Path) -> Result<Vec<RunnableMarker>> {
        let document = self.load_document(file_path)?;
        Ok(self.detector.detect(&document))
    }

    /// Marker owning a 0-based line, if any
    pub fn detect_marker_at_line(
        &self,
        file_path: &Path,
        line: u32,
    ) -> Result<Option<RunnableMarker>> {
        let document = self.load_document(file_path)?;
        Ok(self.detector.detect_at_line(&document, line))
    }

    pub fn merged_markers(&self, file_path: &Path) -> Result<Vec<MergedMarker>> {
        Ok(merge_markers(&self.detect_markers(file_path)?))
    }

    pub fn build_command(&self, marker: &RunnableMarker, file_path: &Path) -> RunCommand {
        CommandBuilder::new(&self.config).build(marker, file_path)
    }

    /// Command running the whole file, when the file has a runnable section
    pub fn get_file_command(&self, file_path: &Path) -> Result<Option<RunCommand>> {
        let markers = self.detect_markers(file_path)?;
        if markers.is_empty() {
            return Ok(None);
        }
        Ok(Some(CommandBuilder::new(&self.config).build_file(file_path)))
    }

    /// Command for the marker owning a 0-based line
    pub fn command_at_line(&self, file_path: &Path, line: u32) -> Result<RunCommand> {
        if !self.is_suite(file_path) {
            return Err(Error::NotASuite(file_path.display().to_string()));
        }
        let marker = self
            .detect_marker_at_line(file_path, line)?
            .ok_or(Error::NoRunnableFound(line + 1))?;
        Ok(self.build_command(&marker, file_path))
    }

    /// Markers of a file as pretty JSON
    pub fn analyze(&self, file_path: &Path) -> Result<String> {
        let markers = self.detect_markers(file_path)?;
        Ok(serde_json::to_string_pretty(&markers)?)
    }
}
