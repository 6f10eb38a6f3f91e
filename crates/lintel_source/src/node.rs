//! The syntax-node view the diagnostic engine needs from a checker.

use crate::source_file::SourceFile;
use std::fmt;
use std::path::{Path, PathBuf};

/// A syntax-tree node a diagnostic can be attached to.
///
/// Checkers walk their own trees; the engine only asks a node where it starts
/// and who owns it.
pub trait Node: fmt::Debug {
    /// The 1-indexed line the node starts on.
    fn from_line(&self) -> u32;

    /// The 0-indexed column the node starts at, if known.
    fn col_offset(&self) -> Option<u32> {
        None
    }

    /// The dotted name of the module owning this node.
    fn module_name(&self) -> &str;

    /// The dotted path of the enclosing object (e.g. `Class.method`).
    ///
    /// Empty for nodes at module level.
    fn frame_id(&self) -> String;

    /// The file of the module at the root of this node's tree.
    fn root_file(&self) -> &Path;
}

/// A plain, owned [`Node`] implementation.
///
/// Used by tests and by tools that report against positions rather than a
/// live syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    /// Starting line (1-indexed).
    pub from_line: u32,
    /// Starting column (0-indexed).
    pub col_offset: Option<u32>,
    /// Owning module name.
    pub module: String,
    /// Enclosing frames from outermost to innermost.
    pub frames: Vec<String>,
    /// File of the owning module.
    pub file: PathBuf,
}

impl SyntaxNode {
    /// Creates a module-level node in the given source file.
    pub fn new(source: &SourceFile, from_line: u32) -> Self {
        Self {
            from_line,
            col_offset: None,
            module: source.module_name.clone(),
            frames: Vec::new(),
            file: source.path.clone(),
        }
    }

    /// Sets the starting column.
    pub fn with_col(mut self, col_offset: u32) -> Self {
        self.col_offset = Some(col_offset);
        self
    }

    /// Nests the node inside one more enclosing frame.
    pub fn within(mut self, frame: impl Into<String>) -> Self {
        self.frames.push(frame.into());
        self
    }
}

impl Node for SyntaxNode {
    fn from_line(&self) -> u32 {
        self.from_line
    }

    fn col_offset(&self) -> Option<u32> {
        self.col_offset
    }

    fn module_name(&self) -> &str {
        &self.module
    }

    fn frame_id(&self) -> String {
        self.frames.join(".")
    }

    fn root_file(&self) -> &Path {
        &self.file
    }
}
