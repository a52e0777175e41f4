use image::DynamicImage;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::OutputConfig;
use crate::args::FlagPathMap;
use crate::error::WatermarkError;
use crate::watermark::{ImageKind, apply_watermark, extension_of, marked_path};

/// Drop the one space `normalize_args` appends to a merged path group.
fn strip_group_space(path: &str) -> &str {
    path.strip_suffix(' ').unwrap_or(path)
}

/// What a run did. Any failure aborts the run instead of being recorded here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<String>,
}

/// Drives decode, watermark and encode for each requested file, one at a time.
#[derive(Debug, Clone)]
pub struct Pipeline {
    jpeg_quality: u8,
    case_insensitive_extensions: bool,
}

impl Pipeline {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            jpeg_quality: config.jpeg_quality,
            case_insensitive_extensions: config.case_insensitive_extensions,
        }
    }

    /// Process every `-f` path, then any `-d` directories, stopping at the first error.
    pub fn run(&self, paths: &FlagPathMap) -> Result<RunSummary, WatermarkError> {
        let mut summary = RunSummary::default();

        for path in paths.files() {
            self.record(path, &mut summary)?;
        }

        let directories = paths.directories();
        if !directories.is_empty() {
            self.run_directories(directories, &mut summary)?;
        }

        info!(
            "Watermarked {} file(s), skipped {}",
            summary.written.len(),
            summary.skipped.len()
        );
        Ok(summary)
    }

    fn record(&self, path: &str, summary: &mut RunSummary) -> Result<(), WatermarkError> {
        match self.process_file(path)? {
            Some(output) => summary.written.push(output),
            None => summary.skipped.push(strip_group_space(path).to_string()),
        }
        Ok(())
    }

    #[cfg(feature = "directory-scan")]
    fn run_directories(
        &self,
        directories: &[String],
        summary: &mut RunSummary,
    ) -> Result<(), WatermarkError> {
        for directory in directories {
            let directory = Path::new(strip_group_space(directory));
            let files =
                crate::directory::collect_images(directory, self.case_insensitive_extensions)?;
            info!("Found {} image(s) in {:?}", files.len(), directory);
            for file in files {
                self.record(&file.to_string_lossy(), summary)?;
            }
        }
        Ok(())
    }

    #[cfg(not(feature = "directory-scan"))]
    fn run_directories(
        &self,
        directories: &[String],
        _summary: &mut RunSummary,
    ) -> Result<(), WatermarkError> {
        tracing::warn!(
            "Directory scanning is not enabled in this build, ignoring: {}",
            directories.join(", ")
        );
        Ok(())
    }

    /// Watermark a single file.
    ///
    /// Returns the written output path, or `None` when the extension is not a
    /// supported image type. The single trailing space that argument
    /// normalization appends to merged paths is ignored.
    pub fn process_file(&self, path: &str) -> Result<Option<PathBuf>, WatermarkError> {
        let path = strip_group_space(path);
        let ext = extension_of(path);

        let Some(kind) = ImageKind::from_extension(ext, self.case_insensitive_extensions) else {
            debug!("Skipping {:?}: unsupported extension {:?}", path, ext);
            return Ok(None);
        };

        let source = kind.decode(Path::new(path))?;
        let marked = DynamicImage::ImageRgba8(apply_watermark(&source));

        let output = PathBuf::from(marked_path(path, ext));
        kind.save(&marked, &output, self.jpeg_quality)?;

        info!("Watermarked {:?} -> {:?}", path, output);
        Ok(Some(output))
    }
}
