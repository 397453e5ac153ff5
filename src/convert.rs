//! Batch conversion of JPEG and PNG images to WebP
//!
//! This module provides:
//! - Input collection from files and recursively walked directories
//! - Lossy WebP encoding with separate JPEG and PNG quality, or
//!   lossless encoding for PNG sources
//! - Per-file size comparison and a batch summary
//!
//! A file that fails to convert is recorded and the batch continues.
//! Inputs sharing a file stem get numbered outputs (`x.webp`, `x_1.webp`).

use crate::error::ConvertError;
use crate::progress::Progress;
use image::{DynamicImage, ImageReader};
use jwalk::WalkDir;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Output directory created next to the first input when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "webp_converted";

/// Extensions picked up from directories (compared lowercase)
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Lossy quality for JPEG sources
pub const DEFAULT_QUALITY: u8 = 90;

/// Lossy quality for PNG sources
pub const DEFAULT_PNG_QUALITY: u8 = 95;

/// How a single image is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Lossy at the given quality (0-100)
    Lossy(u8),
    Lossless,
}

/// Encoder settings for a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Quality for JPEG sources
    pub quality: u8,
    /// Quality for PNG sources when they are encoded lossy
    pub png_quality: u8,
    /// Encode PNG sources losslessly
    pub lossless_png: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            png_quality: DEFAULT_PNG_QUALITY,
            lossless_png: false,
        }
    }
}

impl ConvertOptions {
    /// Encoding picked by the source's extension
    pub fn encoding_for(&self, input: &Path) -> Encoding {
        let is_png = input
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("png"));
        match (is_png, self.lossless_png) {
            (true, true) => Encoding::Lossless,
            (true, false) => Encoding::Lossy(self.png_quality.min(100)),
            (false, _) => Encoding::Lossy(self.quality.min(100)),
        }
    }
}

/// One successfully converted image
#[derive(Debug, Clone, Serialize)]
pub struct ConvertedFile {
    pub source: PathBuf,
    pub output: PathBuf,
    pub original_size: u64,
    pub webp_size: u64,
}

impl ConvertedFile {
    /// Bytes saved; negative when the WebP file is larger
    pub fn saved_bytes(&self) -> i64 {
        self.original_size as i64 - self.webp_size as i64
    }

    /// Saved bytes as a percentage of the original size
    pub fn savings_percent(&self) -> f64 {
        percent(self.original_size, self.webp_size)
    }

    /// `name: 1.2 MB → 300.0 KB (saved 900.0 KB (75.0%))`
    pub fn describe(&self) -> String {
        let name = self
            .source
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.source.display().to_string());
        let change = if self.webp_size < self.original_size {
            format!(
                "saved {} ({:.1}%)",
                format_size(self.original_size - self.webp_size),
                self.savings_percent()
            )
        } else {
            format!(
                "grew {} ({:.1}%)",
                format_size(self.webp_size - self.original_size),
                -self.savings_percent()
            )
        };
        format!(
            "{}: {} → {} ({})",
            name,
            format_size(self.original_size),
            format_size(self.webp_size),
            change
        )
    }
}

/// An image that could not be converted
#[derive(Debug, Clone, Serialize)]
pub struct FailedFile {
    pub source: PathBuf,
    pub message: String,
}

/// Outcome of a batch
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub output_dir: PathBuf,
    pub converted: Vec<ConvertedFile>,
    pub failed: Vec<FailedFile>,
    pub elapsed_secs: f64,
}

impl ConversionReport {
    pub fn total_original(&self) -> u64 {
        self.converted.iter().map(|c| c.original_size).sum()
    }

    pub fn total_webp(&self) -> u64 {
        self.converted.iter().map(|c| c.webp_size).sum()
    }

    pub fn savings_percent(&self) -> f64 {
        percent(self.total_original(), self.total_webp())
    }
}

fn percent(original: u64, webp: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (original as f64 - webp as f64) / original as f64 * 100.0
}

/// Human-readable size: `N B`, `N.N KB` or `N.NN MB`
pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
}

/// Images named directly or found below the given directories, in input order
pub fn collect_images(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut images = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(input)
                .into_iter()
                .filter_map(Result::ok)
                .filter(|e| e.file_type().is_file())
                .map(|e| e.path())
                .filter(|p| is_image(p))
                .collect();
            found.sort();
            images.extend(found);
        } else if is_image(input) {
            images.push(input.clone());
        } else {
            tracing::warn!("skipping {}: not a JPEG or PNG file", input.display());
        }
    }
    images
}

/// `webp_converted/` next to the first file
pub fn default_output_dir(files: &[PathBuf]) -> PathBuf {
    files
        .first()
        .and_then(|f| f.parent())
        .unwrap_or_else(|| Path::new("."))
        .join(DEFAULT_OUTPUT_DIR)
}

/// Hands out `<stem>.webp` once per stem, numbering repeats
#[derive(Debug)]
struct OutputNames<'a> {
    dir: &'a Path,
    used: HashSet<String>,
}

impl<'a> OutputNames<'a> {
    fn new(dir: &'a Path) -> Self {
        Self {
            dir,
            used: HashSet::new(),
        }
    }

    fn next(&mut self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());

        let mut name = format!("{}.webp", stem);
        let mut n = 0;
        // lowercase so `X.png` and `x.jpg` also collide on case-insensitive filesystems
        while !self.used.insert(name.to_lowercase()) {
            n += 1;
            name = format!("{}_{}.webp", stem, n);
        }
        if n > 0 {
            tracing::warn!(
                "{} shares its name with an earlier input, writing {}",
                input.display(),
                name
            );
        }
        self.dir.join(name)
    }
}

/// Encode decoded pixels into a WebP byte buffer
pub fn encode_webp(image: &DynamicImage, encoding: Encoding) -> Result<Vec<u8>, String> {
    // libwebp takes 8-bit RGB(A) only
    let image = if image.color().has_alpha() {
        DynamicImage::ImageRgba8(image.to_rgba8())
    } else {
        DynamicImage::ImageRgb8(image.to_rgb8())
    };

    let encoder = webp::Encoder::from_image(&image).map_err(str::to_string)?;
    let memory = match encoding {
        Encoding::Lossy(quality) => encoder.encode_simple(false, f32::from(quality)),
        Encoding::Lossless => encoder.encode_simple(true, 100.0),
    }
    .map_err(|e| format!("{:?}", e))?;
    Ok(memory.to_vec())
}

/// Convert one image into the WebP file at `output`
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<ConvertedFile, ConvertError> {
    let image = ImageReader::open(input)
        .map_err(|e| ConvertError::io(input, e))?
        .with_guessed_format()
        .map_err(|e| ConvertError::io(input, e))?
        .decode()
        .map_err(|e| ConvertError::decode(input, e.to_string()))?;

    let encoding = options.encoding_for(input);
    tracing::debug!("encoding {} as {:?}", input.display(), encoding);
    let bytes = encode_webp(&image, encoding).map_err(|e| ConvertError::encode(output, e))?;
    fs::write(output, &bytes).map_err(|e| ConvertError::io(output, e))?;

    let original_size = fs::metadata(input)
        .map_err(|e| ConvertError::io(input, e))?
        .len();

    Ok(ConvertedFile {
        source: input.to_path_buf(),
        output: output.to_path_buf(),
        original_size,
        webp_size: bytes.len() as u64,
    })
}

/// Convert every file, creating `output_dir` first
pub fn convert_batch(
    files: &[PathBuf],
    output_dir: &Path,
    options: &ConvertOptions,
    progress: &mut Progress,
) -> Result<ConversionReport, ConvertError> {
    if files.is_empty() {
        return Err(ConvertError::NoInputFiles);
    }
    fs::create_dir_all(output_dir).map_err(|e| ConvertError::OutputDir {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let started = Instant::now();
    let mut converted = Vec::new();
    let mut failed = Vec::new();
    let mut names = OutputNames::new(output_dir);

    progress.start(files.len() as u64, "Converting");
    for file in files {
        progress.set_message(&file.display().to_string());
        let output = names.next(file);
        match convert_file(file, &output, options) {
            Ok(result) => {
                tracing::debug!("{}", result.describe());
                converted.push(result);
            }
            Err(e) => {
                tracing::warn!("{}", e);
                failed.push(FailedFile {
                    source: file.clone(),
                    message: e.to_string(),
                });
            }
        }
        progress.inc();
    }
    progress.finish_and_clear();

    Ok(ConversionReport {
        output_dir: output_dir.to_path_buf(),
        converted,
        failed,
        elapsed_secs: started.elapsed().as_secs_f64(),
    })
}
