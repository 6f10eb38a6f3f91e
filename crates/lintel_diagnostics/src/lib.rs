//! Message definitions, the message registry, and emitted diagnostic records.
//!
//! This crate provides the vocabulary shared by every part of the toolchain:
//! [`MessageId`]s with their [`Category`] prefix, [`MessageDefinition`]s that
//! checkers declare, the [`MessageRegistry`] that resolves symbols, numeric ids,
//! and old names to definitions, and the finished [`Diagnostic`] record that a
//! [`Reporter`] receives. The thread-safe [`DiagnosticSink`] is the default
//! reporter and simply accumulates records.

#![warn(missing_docs)]

pub mod code;
pub mod confidence;
pub mod definition;
pub mod diagnostic;
pub mod registry;
pub mod sink;

pub use code::{Category, MessageId, ParseMessageIdError};
pub use confidence::Confidence;
pub use definition::{MessageDefinition, WarningScope};
pub use diagnostic::{Diagnostic, Location};
pub use registry::{MessageRegistry, RegistryError};
pub use sink::{DiagnosticSink, Reporter};
