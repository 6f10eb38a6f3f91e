//! Source file representation with line-start indexing for fast line/column lookup.

use std::io;
use std::path::{Path, PathBuf};

/// A source module loaded for analysis.
///
/// Stores the file's content along with precomputed line-start offsets, and
/// the dotted module name diagnostics are attributed to.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// The filesystem path of this file (or a synthetic name for in-memory sources).
    pub path: PathBuf,
    /// The dotted module name, e.g. `pkg.utils`.
    pub module_name: String,
    /// The full text content of the file.
    pub content: String,
    /// Byte offsets of each line start (the first entry is always 0).
    line_starts: Vec<u32>,
}

impl SourceFile {
    /// Creates a new `SourceFile`, deriving the module name from the path.
    pub fn new(path: impl Into<PathBuf>, content: String) -> Self {
        let path = path.into();
        let module_name = module_name_from_path(&path);
        let line_starts = compute_line_starts(&content);
        Self {
            path,
            module_name,
            content,
            line_starts,
        }
    }

    /// Reads a source file from disk.
    pub fn load(path: &Path) -> Result<Self, io::Error> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::new(path, content))
    }

    /// Overrides the derived module name.
    pub fn with_module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = name.into();
        self
    }

    /// Returns the number of lines in the file.
    ///
    /// A trailing newline does not open an extra line.
    pub fn line_count(&self) -> u32 {
        let starts = self.line_starts.len() as u32;
        if self.content.ends_with('\n') {
            starts - 1
        } else {
            starts
        }
    }

    /// Returns the text of the given 1-indexed line without its line terminator.
    pub fn line(&self, line: u32) -> Option<&str> {
        if line == 0 || line > self.line_count() {
            return None;
        }
        let start = self.line_starts[(line - 1) as usize] as usize;
        let end = self
            .line_starts
            .get(line as usize)
            .map_or(self.content.len(), |&next| next as usize);
        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Iterates over `(line_number, text)` pairs, 1-indexed.
    pub fn lines(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        (1..=self.line_count()).filter_map(move |n| self.line(n).map(|text| (n, text)))
    }

    /// Converts a byte offset into 1-indexed (line, column) coordinates.
    ///
    /// Uses binary search on the precomputed line-start offsets for efficient lookup.
    pub fn line_col(&self, byte_offset: u32) -> (u32, u32) {
        let line_idx = match self.line_starts.binary_search(&byte_offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let line = (line_idx as u32) + 1;
        let col = byte_offset - self.line_starts[line_idx] + 1;
        (line, col)
    }

    /// Returns the last line that would appear in the parsed syntax tree.
    ///
    /// Blank lines and comment-only lines after the final statement never
    /// become nodes, so they are excluded. Returns `None` for a module with
    /// no statements at all.
    pub fn effective_max_line(&self) -> Option<u32> {
        self.lines()
            .filter(|(_, text)| {
                let trimmed = text.trim_start();
                !trimmed.is_empty() && !trimmed.starts_with('#')
            })
            .map(|(n, _)| n)
            .last()
    }
}

/// Derives a dotted module name from a file path.
///
/// `pkg/utils.py` becomes `pkg.utils`, and a package's `__init__.py` is named
/// after its directory. Absolute paths keep only the file stem (and the
/// package directory for `__init__`), since the package root is unknown here.
pub fn module_name_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| {
            p.components()
                .filter_map(|c| match c {
                    std::path::Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    if path.is_absolute() {
        if stem == "__init__" {
            if let Some(pkg) = parent.last() {
                return pkg.clone();
            }
        }
        return stem;
    }

    let mut parts = parent;
    if stem != "__init__" || parts.is_empty() {
        parts.push(stem);
    }
    parts.join(".")
}

/// Computes the byte offsets of each line start in the given content.
fn compute_line_starts(content: &str) -> Vec<u32> {
    let mut starts = vec![0u32];
    for (i, byte) in content.bytes().enumerate() {
        if byte == b'\n' {
            starts.push((i + 1) as u32);
        }
    }
    starts
}
