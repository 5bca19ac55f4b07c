//! Batch driver: render and write every icon, never stopping on one failure

use crate::config::GeneratorConfig;
use crate::constants::paths;
use crate::error::EntryError;
use crate::icon_spec::{app_icon_specs, IconSpec};
use crate::manifest::AppIconManifest;
use crate::render::{self, RenderOptions};
use crate::writer::{IconWriter, WriteOutcome};
use anyhow::Result;
use log::{error, warn};
use std::fmt;
use std::path::PathBuf;

/// What happened to one file
#[derive(Debug)]
pub enum EntryStatus {
    Written(PathBuf),
    FellBack {
        path: PathBuf,
        primary_error: std::io::Error,
    },
    Failed(EntryError),
}

impl EntryStatus {
    fn from_write(outcome: WriteOutcome) -> Self {
        match outcome {
            WriteOutcome::Primary(path) => EntryStatus::Written(path),
            WriteOutcome::Fallback {
                path,
                primary_error,
            } => EntryStatus::FellBack {
                path,
                primary_error,
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, EntryStatus::Written(_))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, EntryStatus::FellBack { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, EntryStatus::Failed(_))
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryStatus::Written(path) => write!(f, "✓ {}", path.display()),
            EntryStatus::FellBack {
                path,
                primary_error,
            } => write!(f, "↪ {} (catalog write failed: {})", path.display(), primary_error),
            EntryStatus::Failed(e) => write!(f, "✗ {}", e),
        }
    }
}

#[derive(Debug)]
pub struct EntryReport {
    pub identifier: String,
    pub pixel_size: u32,
    pub status: EntryStatus,
}

/// Aggregate counts of a generation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub success: usize,
    pub fallback: usize,
    pub failure: usize,
}

#[derive(Debug, Default)]
pub struct GenerationReport {
    /// One entry per icon, in table order
    pub entries: Vec<EntryReport>,
    /// Contents.json outcome, when it was written
    pub manifest: Option<EntryStatus>,
}

impl GenerationReport {
    pub fn success_count(&self) -> usize {
        self.entries.iter().filter(|e| e.status.is_success()).count()
    }

    pub fn fallback_count(&self) -> usize {
        self.entries.iter().filter(|e| e.status.is_fallback()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.entries.iter().filter(|e| e.status.is_failure()).count()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            success: self.success_count(),
            fallback: self.fallback_count(),
            failure: self.failure_count(),
        }
    }

    /// Entries of this run that Contents.json lists but that are not in the catalog
    pub fn manifest_mismatches(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| !e.status.is_success())
            .map(|e| e.identifier.as_str())
            .collect()
    }

    /// True when there was work to do and none of it produced a file
    pub fn all_failed(&self) -> bool {
        !self.entries.is_empty() && self.failure_count() == self.entries.len()
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(
                f,
                "  {:<20} {:>5}px  {}",
                entry.identifier, entry.pixel_size, entry.status
            )?;
        }
        if let Some(manifest) = &self.manifest {
            writeln!(f, "  {:<20} {:>7}  {}", paths::MANIFEST_FILE_NAME, "", manifest)?;
        }

        let summary = self.summary();
        writeln!(f)?;
        writeln!(
            f,
            "Generated {} icons: {} in asset catalog, {} in fallback directory, {} failed",
            self.entries.len(),
            summary.success,
            summary.fallback,
            summary.failure
        )?;

        writeln!(f)?;
        writeln!(f, "Next steps:")?;
        if summary.fallback > 0 {
            writeln!(f, "  1. Copy the fallback icons into AppIcon.appiconset")?;
        } else {
            writeln!(f, "  1. Open the project and check AppIcon in Assets.xcassets")?;
        }
        writeln!(f, "  2. Clean the build folder (Shift+Cmd+K)")?;
        write!(f, "  3. Build and run to see the new icon")
    }
}

/// Renders icons and writes them through an [`IconWriter`]
pub struct Generator {
    writer: IconWriter,
    options: RenderOptions,
    write_manifest: bool,
}

impl Generator {
    pub fn new(writer: IconWriter, options: RenderOptions) -> Self {
        Generator {
            writer,
            options,
            write_manifest: false,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let generator = Generator::new(IconWriter::from_config(config), config.render_options()?)
            .with_manifest(config.write_manifest);
        Ok(generator)
    }

    pub fn with_manifest(mut self, write_manifest: bool) -> Self {
        self.write_manifest = write_manifest;
        self
    }

    pub fn writer(&self) -> &IconWriter {
        &self.writer
    }

    /// Render and write each spec in order, then the manifest if enabled
    ///
    /// The manifest always describes the whole catalog, so a run over a
    /// subset of the table leaves the other slots in place.
    pub fn generate_all(&self, specs: &[IconSpec]) -> GenerationReport {
        let entries = specs
            .iter()
            .map(|spec| EntryReport {
                identifier: spec.identifier.to_string(),
                pixel_size: spec.pixel_size,
                status: self.generate_one(spec),
            })
            .collect();

        let mut report = GenerationReport {
            entries,
            manifest: None,
        };

        if self.write_manifest {
            let missing = report.manifest_mismatches();
            if !missing.is_empty() {
                warn!(
                    "{} lists icons missing from the catalog: {}",
                    paths::MANIFEST_FILE_NAME,
                    missing.join(", ")
                );
            }
            report.manifest = Some(self.generate_manifest());
        }

        report
    }

    pub fn generate_one(&self, spec: &IconSpec) -> EntryStatus {
        let bytes = match render::render(spec, &self.options) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("failed to render {}: {}", spec.identifier, e);
                return EntryStatus::Failed(e.into());
            }
        };

        self.write(&spec.file_name(), &bytes)
    }

    fn generate_manifest(&self) -> EntryStatus {
        match AppIconManifest::from_specs(app_icon_specs()).to_json() {
            Ok(json) => self.write(paths::MANIFEST_FILE_NAME, json.as_bytes()),
            Err(e) => {
                error!("failed to build {}: {}", paths::MANIFEST_FILE_NAME, e);
                EntryStatus::Failed(e.into())
            }
        }
    }

    fn write(&self, file_name: &str, bytes: &[u8]) -> EntryStatus {
        match self.writer.write(file_name, bytes) {
            Ok(outcome) => EntryStatus::from_write(outcome),
            Err(e) => {
                error!("{}", e);
                EntryStatus::Failed(e.into())
            }
        }
    }
}

/// Generate `specs` with the given configuration
pub fn generate_all(specs: &[IconSpec], config: &GeneratorConfig) -> Result<GenerationReport> {
    Ok(Generator::from_config(config)?.generate_all(specs))
}

/// Generate the full icon set with default settings
pub fn generate_all_icons() -> Result<GenerationReport> {
    generate_all(app_icon_specs(), &GeneratorConfig::default())
}
