//! Source files and the syntax-node model consumed by the diagnostic engine.
//!
//! The engine never walks a syntax tree itself. It only needs a node's starting
//! line and column, the module that owns it, and the enclosing object, which the
//! [`Node`] trait exposes. [`SourceFile`] supplies the per-module facts the
//! engine asks for at module scope, most importantly the effective maximum line
//! that appears in the parsed tree.

#![warn(missing_docs)]

pub mod node;
pub mod source_file;

pub use node::{Node, SyntaxNode};
pub use source_file::{module_name_from_path, SourceFile};
