//! Classification of control identifiers and their expansion into per-kind
//! directives.

use crate::error::LintError;
use crate::reports::is_report_id;
use lintel_diagnostics::{Category, MessageId, MessageRegistry, RegistryError};

/// The opt-in porting checker. Its kinds stay off when everything is enabled
/// unless porting mode is on.
pub const PORTING_CHECKER: &str = "python3";

/// Where an enable/disable directive applies.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ControlScope {
    /// The whole run.
    Run,
    /// The current module, optionally a single line of it.
    Module,
}

/// What a control identifier refers to. The first matching rule wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Target {
    /// `all`, any case.
    All,
    /// A category letter or long name.
    Category(Category),
    /// A checker name.
    Checker(String),
    /// A report id.
    Report(String),
    /// Kinds found in the registry.
    Message(Vec<MessageId>),
}

/// A single kind to switch, produced by expanding a [`Target`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Directive {
    pub id: MessageId,
    pub enable: bool,
    /// The porting-checker guard of `enable all`. Applied silently at run
    /// scope whatever scope the directive itself had.
    pub guard: bool,
}

impl Target {
    pub(crate) fn classify(identifier: &str, registry: &MessageRegistry) -> Result<Self, LintError> {
        if identifier.eq_ignore_ascii_case("all") {
            return Ok(Target::All);
        }
        if let Some(category) = Category::from_identifier(identifier) {
            return Ok(Target::Category(category));
        }
        if registry.is_checker(identifier) {
            return Ok(Target::Checker(identifier.to_lowercase()));
        }
        if is_report_id(identifier) {
            return Ok(Target::Report(identifier.to_ascii_uppercase()));
        }
        registry.lookup(identifier).map(Target::Message).map_err(|e| match e {
            RegistryError::UnknownMessage(name) => LintError::UnknownMessage(name),
            other => LintError::Registry(other),
        })
    }

    /// Flattens the target into per-kind directives.
    ///
    /// Reports have no kinds and expand to nothing.
    pub(crate) fn expand(
        &self,
        enable: bool,
        registry: &MessageRegistry,
        porting_mode: bool,
    ) -> Vec<Directive> {
        let ids: Vec<MessageId> = match self {
            Target::All => Category::ALL
                .into_iter()
                .flat_map(|cat| registry.by_category(cat).iter().copied())
                .collect(),
            Target::Category(cat) => registry.by_category(*cat).to_vec(),
            Target::Checker(name) => registry.checker_messages(name),
            Target::Report(_) => Vec::new(),
            Target::Message(ids) => ids.clone(),
        };
        let guarded = *self == Target::All && enable && !porting_mode;
        let porting = if guarded {
            registry.checker_messages(PORTING_CHECKER)
        } else {
            Vec::new()
        };
        let mut directives: Vec<Directive> = ids
            .into_iter()
            .filter(|id| !porting.contains(id))
            .map(|id| Directive {
                id,
                enable,
                guard: false,
            })
            .collect();

        directives.extend(porting.into_iter().map(|id| Directive {
            id,
            enable: false,
            guard: true,
        }));
        directives
    }
}
