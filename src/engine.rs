use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use futures::future;
use regex::Regex;

use crate::error::{CheckError, Result};
use crate::marker::Marker;
use crate::utils::read_text;

/// Options controlling section selection and whitespace normalization.
#[derive(Debug, Clone)]
pub struct Config {
    /// Marker that begins the compared section; top of file when unset.
    pub start_marker: Option<Marker>,
    /// Marker that ends the compared section; end of file when unset.
    pub end_marker: Option<Marker>,
    pub ignore_leading_whitespace: bool,
    pub ignore_trailing_whitespace: bool,
    /// Collapse every whitespace run to a single space before comparing.
    pub ignore_whitespace_length: bool,
    /// Compare the marker lines themselves, not just the lines between them.
    pub include_marker_lines: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            start_marker: None,
            end_marker: None,
            ignore_leading_whitespace: true,
            ignore_trailing_whitespace: true,
            ignore_whitespace_length: false,
            include_marker_lines: false,
        }
    }
}

/// Where the compared section begins in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionStart {
    /// No start marker configured; the section begins on the first line.
    Top,
    /// Line index of the start marker's first occurrence.
    AtMarker(usize),
}

impl SectionStart {
    /// Map a section-relative index back to a 1-based line number in the
    /// original file. An excluded start marker shifts the section down by one
    /// line, hence the +2 in the marker arm.
    fn absolute_line(self, index: usize) -> usize {
        match self {
            SectionStart::Top => index + 1,
            SectionStart::AtMarker(line) => index + line + 2,
        }
    }
}

/// Where the compared section ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionEnd {
    /// No end marker configured; the section runs through the last line.
    Eof,
    /// Line index of the end marker's first occurrence.
    AtMarker(usize),
}

/// One file's extracted, normalized section. Created fresh per check and
/// dropped when the check completes.
#[derive(Debug)]
struct FileRecord {
    path: PathBuf,
    start: SectionStart,
    lines: Vec<String>,
}

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static pattern"));

/// Verify that the selected section of every file matches the first file's.
///
/// All files are read concurrently and the reads are joined before any
/// processing starts; a failed read fails the whole call. Files are then
/// validated and compared one at a time in path order, with the first file as
/// the baseline. The first problem found is the one reported. On success the
/// message states how many files were compared, e.g. `"3 files match"`.
pub async fn check(paths: &[PathBuf], config: &Config) -> Result<String> {
    let texts = future::try_join_all(paths.iter().map(|path| read_text(path))).await?;

    let mut baseline: Option<FileRecord> = None;
    for (path, text) in paths.iter().zip(&texts) {
        let record = extract_section(path, text, config)?;
        match &baseline {
            Some(base) => compare_to_baseline(base, &record)?,
            None => baseline = Some(record),
        }
    }

    Ok(format!("{} files match", paths.len()))
}

/// Resolve a file's section bounds, validate them, and return the normalized
/// section lines.
fn extract_section(path: &Path, text: &str, config: &Config) -> Result<FileRecord> {
    let raw: Vec<&str> = text.split('\n').collect();

    let start = match &config.start_marker {
        None => SectionStart::Top,
        Some(marker) => match marker.find_line(text) {
            Some(line) => SectionStart::AtMarker(line),
            None => {
                return Err(CheckError::StartMarkerNotFound {
                    path: path.to_path_buf(),
                    marker: marker.to_string(),
                })
            }
        },
    };

    let end = match &config.end_marker {
        None => SectionEnd::Eof,
        Some(marker) => match marker.find_line(text) {
            Some(line) => SectionEnd::AtMarker(line),
            None => {
                return Err(CheckError::EndMarkerNotFound {
                    path: path.to_path_buf(),
                    marker: marker.to_string(),
                })
            }
        },
    };

    // A Top start precedes every line and an Eof end follows every line, so
    // only marker-resolved bounds can invert or collapse.
    if let (SectionStart::AtMarker(s), SectionEnd::AtMarker(e)) = (start, end) {
        if e < s {
            return Err(CheckError::InvertedMarkers {
                path: path.to_path_buf(),
            });
        }
        if !config.include_marker_lines && e == s {
            return Err(CheckError::EmptySection {
                path: path.to_path_buf(),
            });
        }
    }

    let (lo, hi) = if config.include_marker_lines {
        let lo = match start {
            SectionStart::Top => 0,
            SectionStart::AtMarker(line) => line,
        };
        let hi = match end {
            SectionEnd::Eof => raw.len(),
            SectionEnd::AtMarker(line) => line + 1,
        };
        (lo, hi)
    } else {
        let lo = match start {
            SectionStart::Top => 0,
            SectionStart::AtMarker(line) => line + 1,
        };
        let hi = match end {
            SectionEnd::Eof => raw.len(),
            SectionEnd::AtMarker(line) => line,
        };
        (lo, hi)
    };

    let lines = raw[lo..hi]
        .iter()
        .map(|line| normalize_line(line, config))
        .collect();

    Ok(FileRecord {
        path: path.to_path_buf(),
        start,
        lines,
    })
}

fn normalize_line(line: &str, config: &Config) -> String {
    let trimmed = if config.ignore_leading_whitespace && config.ignore_trailing_whitespace {
        line.trim()
    } else if config.ignore_leading_whitespace {
        line.trim_start()
    } else if config.ignore_trailing_whitespace {
        line.trim_end()
    } else {
        line
    };

    if config.ignore_whitespace_length {
        WHITESPACE_RUN.replace_all(trimmed, " ").into_owned()
    } else {
        trimmed.to_string()
    }
}

/// Compare a file's normalized section to the baseline and, on divergence,
/// report 1-based line numbers in both original files. The scan runs one
/// index past the shorter section so length mismatches are caught too; an
/// out-of-range index reads as `None` and never equals a real line.
fn compare_to_baseline(base: &FileRecord, current: &FileRecord) -> Result<()> {
    if base.lines == current.lines {
        return Ok(());
    }

    for i in 0..=current.lines.len() {
        if base.lines.get(i) != current.lines.get(i) {
            return Err(CheckError::Mismatch {
                path: current.path.clone(),
                line: current.start.absolute_line(i),
                baseline_path: base.path.clone(),
                baseline_line: base.start.absolute_line(i),
            });
        }
    }

    Ok(())
}
