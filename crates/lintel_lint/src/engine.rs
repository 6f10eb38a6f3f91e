//! The lint engine: message control, enablement queries, and emission.
//!
//! Checkers register their message catalogs with the engine, toggle kinds at
//! run or module scope, and report findings through [`LintEngine::add_message`].
//! Every finding is checked against the suppression layers before any work
//! is done; survivors are formatted, counted, attributed, and handed to the
//! [`Reporter`].

use std::sync::Arc;

use lintel_config::{control_directives, LintConfig, MessagesConfig};
use lintel_diagnostics::{
    Confidence, Diagnostic, Location, MessageId, MessageRegistry, Reporter, WarningScope,
};
use lintel_source::Node;
use tracing::{debug, trace};

use crate::audit::{ManagedMessage, ManagedMessageLog};
use crate::checkers::master;
use crate::checkers::register_builtin_checkers;
use crate::error::LintError;
use crate::file_state::FileState;
use crate::format::{interpolate, MessageArgs};
use crate::reports::ReportState;
use crate::resolve::{ControlScope, Directive, Target};
use crate::state::{StateScope, SuppressionState};
use crate::stats::RunStatistics;
use crate::Checker;

/// A checker's request to report one finding.
#[derive(Debug, Default)]
pub struct MessageRequest<'a> {
    /// Explicit line. Required for line-scoped kinds, an override for
    /// node-scoped ones.
    pub line: Option<u32>,
    /// The node the finding is about. Required for node-scoped kinds.
    pub node: Option<&'a dyn Node>,
    /// Arguments for the kind's template.
    pub args: Option<MessageArgs>,
    /// How sure the checker is.
    pub confidence: Confidence,
    /// Explicit column, overriding the node's.
    pub col_offset: Option<u32>,
}

impl<'a> MessageRequest<'a> {
    /// A request located by line only.
    pub fn at_line(line: u32) -> Self {
        Self {
            line: Some(line),
            ..Self::default()
        }
    }

    /// A request located by node.
    pub fn on_node(node: &'a dyn Node) -> Self {
        Self {
            node: Some(node),
            ..Self::default()
        }
    }

    /// Sets the line.
    pub fn line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the node.
    pub fn node(mut self, node: &'a dyn Node) -> Self {
        self.node = Some(node);
        self
    }

    /// Sets the template arguments.
    pub fn args(mut self, args: impl Into<MessageArgs>) -> Self {
        self.args = Some(args.into());
        self
    }

    /// Sets the confidence.
    pub fn confidence(mut self, confidence: Confidence) -> Self {
        self.confidence = confidence;
        self
    }

    /// Sets the column.
    pub fn col_offset(mut self, col_offset: u32) -> Self {
        self.col_offset = Some(col_offset);
        self
    }
}

/// Owns all suppression state of a run and the path from checker findings
/// to the reporter.
pub struct LintEngine {
    registry: MessageRegistry,
    state: SuppressionState,
    reports: ReportState,
    file_state: FileState,
    managed: Arc<ManagedMessageLog>,
    reporter: Arc<dyn Reporter>,
    stats: RunStatistics,
    /// Allowed confidence levels. Empty means no filtering.
    confidence: Vec<Confidence>,
    porting_mode: bool,
    path_strip_prefix: String,
    current_name: String,
    current_file: String,
}

impl LintEngine {
    /// Creates an engine with an empty registry.
    pub fn new(reporter: Arc<dyn Reporter>) -> Self {
        Self {
            registry: MessageRegistry::new(),
            state: SuppressionState::new(),
            reports: ReportState::new(),
            file_state: FileState::default(),
            managed: Arc::new(ManagedMessageLog::new()),
            reporter,
            stats: RunStatistics::new(),
            confidence: Vec::new(),
            porting_mode: false,
            path_strip_prefix: String::new(),
            current_name: String::new(),
            current_file: String::new(),
        }
    }

    /// Creates an engine with every built-in checker catalog registered.
    pub fn with_builtin_checkers(reporter: Arc<dyn Reporter>) -> Result<Self, LintError> {
        let mut engine = Self::new(reporter);
        register_builtin_checkers(&mut engine)?;
        Ok(engine)
    }

    /// Shares an existing audit log instead of the engine's own.
    pub fn with_managed_log(mut self, log: Arc<ManagedMessageLog>) -> Self {
        self.managed = log;
        self
    }

    /// Registers a checker's catalog.
    ///
    /// Checkers that are not enabled by default have their kinds disabled at
    /// run scope.
    pub fn register_checker(&mut self, checker: &dyn Checker) -> Result<(), LintError> {
        let name = checker.name();
        self.registry.declare_checker(name);
        let messages = checker.messages();
        let count = messages.len();
        for definition in messages {
            self.registry.register(definition.owned_by(name))?;
        }
        if !checker.enabled_by_default() {
            self.set_status(name, false, ControlScope::Run, None, false)?;
        }
        debug!(checker = name, messages = count, "registered checker");
        Ok(())
    }

    /// Applies a loaded configuration, then the command-line overrides.
    pub fn apply_config(
        &mut self,
        config: &LintConfig,
        cli_enable: &[String],
        cli_disable: &[String],
    ) -> Result<(), LintError> {
        self.confidence = config
            .messages
            .confidence
            .iter()
            .filter_map(|name| Confidence::from_name(name))
            .collect();
        self.porting_mode = config.messages.porting_mode;
        self.path_strip_prefix = config.output.path_strip_prefix.clone();
        for id in &config.reports.disable {
            self.reports.set(id, false);
        }
        for id in &config.reports.enable {
            self.reports.set(id, true);
        }
        for directive in control_directives(config, cli_enable, cli_disable) {
            self.set_status(
                &directive.identifier,
                directive.action.is_enable(),
                ControlScope::Run,
                None,
                false,
            )?;
        }
        Ok(())
    }

    /// Sets the confidence levels that may be shown. Empty disables the
    /// filter.
    pub fn set_confidence_filter(&mut self, levels: Vec<Confidence>) {
        self.confidence = levels;
    }

    /// Turns porting mode on or off.
    pub fn set_porting_mode(&mut self, on: bool) {
        self.porting_mode = on;
    }

    /// Sets the prefix removed from reported paths.
    pub fn set_path_strip_prefix(&mut self, prefix: impl Into<String>) {
        self.path_strip_prefix = prefix.into();
    }

    // Resolution

    /// Enables the kinds `identifier` resolves to.
    pub fn enable(
        &mut self,
        identifier: &str,
        scope: ControlScope,
        line: Option<u32>,
    ) -> Result<(), LintError> {
        self.set_status(identifier, true, scope, line, false)
    }

    /// Disables the kinds `identifier` resolves to.
    pub fn disable(
        &mut self,
        identifier: &str,
        scope: ControlScope,
        line: Option<u32>,
    ) -> Result<(), LintError> {
        self.set_status(identifier, false, scope, line, false)
    }

    /// Resolves `identifier` and applies one enable/disable directive.
    ///
    /// `identifier` may be `all`, a category, a checker name, a report id,
    /// or anything the registry knows. With `ignore_unknown` an unresolvable
    /// identifier is a no-op.
    pub fn set_status(
        &mut self,
        identifier: &str,
        enable: bool,
        scope: ControlScope,
        line: Option<u32>,
        ignore_unknown: bool,
    ) -> Result<(), LintError> {
        let target = match Target::classify(identifier, &self.registry) {
            Ok(target) => target,
            Err(LintError::UnknownMessage(_)) if ignore_unknown => return Ok(()),
            Err(err) => return Err(err),
        };
        debug!(identifier, enable, ?scope, ?line, "applying directive");

        if let Target::Report(id) = &target {
            self.reports.set(id, enable);
            return Ok(());
        }

        for directive in target.expand(enable, &self.registry, self.porting_mode) {
            self.apply(directive, scope, line)?;
        }

        if let Target::Message(ids) = &target {
            self.record_managed(identifier, ids, line, !enable);
        }
        Ok(())
    }

    fn apply(
        &mut self,
        directive: Directive,
        scope: ControlScope,
        line: Option<u32>,
    ) -> Result<(), LintError> {
        let scope = if directive.guard { ControlScope::Run } else { scope };
        match scope {
            ControlScope::Module => {
                self.file_state
                    .set_msg_status(directive.id, line, directive.enable);
                if !directive.enable && directive.id != master::LOCALLY_DISABLED {
                    let symbol = self.registry.symbol(directive.id);
                    self.notify(
                        master::LOCALLY_DISABLED,
                        line.unwrap_or(1),
                        MessageArgs::positional([symbol, directive.id.to_string()]),
                    )?;
                }
            }
            ControlScope::Run => self.state.set(directive.id, directive.enable),
        }
        Ok(())
    }

    /// Audits directives that named a kind by its numeric id, spelled
    /// exactly as registered.
    fn record_managed(&self, identifier: &str, ids: &[MessageId], line: Option<u32>, disabled: bool) {
        let Some(&named) = ids.iter().find(|id| id.to_string() == identifier) else {
            return;
        };
        self.managed.record(ManagedMessage {
            module: (!self.current_name.is_empty()).then(|| self.current_name.clone()),
            msg_id: named,
            symbol: self.registry.symbol(named),
            line,
            disabled,
        });
    }

    // Enablement

    /// Whether a finding of `identifier` at `line` would be shown.
    ///
    /// Identifiers the registry does not know are treated as literal ids.
    /// When several kinds match, any enabled one makes the answer `true`.
    pub fn is_enabled(
        &self,
        identifier: &str,
        line: Option<u32>,
        confidence: Option<Confidence>,
    ) -> bool {
        match self.registry.lookup(identifier) {
            Ok(ids) => ids
                .into_iter()
                .any(|id| self.decide(id, line, confidence).0),
            Err(_) => match identifier.parse::<MessageId>() {
                Ok(id) => self.decide(id, line, confidence).0,
                Err(_) => !self.rejects(confidence),
            },
        }
    }

    /// Which layer decides the enablement of `id` at `line`.
    pub fn state_scope(
        &self,
        id: MessageId,
        line: Option<u32>,
        confidence: Option<Confidence>,
    ) -> StateScope {
        self.decide(id, line, confidence).1
    }

    fn rejects(&self, confidence: Option<Confidence>) -> bool {
        match confidence {
            Some(c) => !self.confidence.is_empty() && !self.confidence.contains(&c),
            None => false,
        }
    }

    fn decide(
        &self,
        id: MessageId,
        line: Option<u32>,
        confidence: Option<Confidence>,
    ) -> (bool, StateScope) {
        if self.rejects(confidence) {
            return (false, StateScope::Confidence);
        }
        if let Some(status) = line.and_then(|line| self.file_state.status_at(id, line)) {
            return (status.enabled, StateScope::Module);
        }
        (self.state.is_enabled(id), StateScope::Config)
    }

    // Emission

    /// Reports a finding for every kind `identifier` resolves to.
    pub fn add_message(
        &mut self,
        identifier: &str,
        request: MessageRequest<'_>,
    ) -> Result<(), LintError> {
        let ids = self
            .registry
            .lookup(identifier)
            .map_err(|_| LintError::UnknownMessage(identifier.to_string()))?;
        for id in ids {
            self.add_one_message(id, &request)?;
        }
        Ok(())
    }

    fn add_one_message(&mut self, id: MessageId, request: &MessageRequest<'_>) -> Result<(), LintError> {
        let definition = self.registry.definition(id)?;
        let symbol = definition.symbol.clone();
        let template = definition.msg.clone();

        if !id.category.is_scope_exempt() {
            match definition.scope {
                WarningScope::Line => {
                    if request.line.is_none() {
                        return Err(LintError::InvalidMessage(format!(
                            "message {id} must provide a line, got none"
                        )));
                    }
                    if request.node.is_some() {
                        return Err(LintError::InvalidMessage(format!(
                            "message {id} must only provide a line, got a node as well"
                        )));
                    }
                }
                WarningScope::Node => {
                    if request.node.is_none() {
                        return Err(LintError::InvalidMessage(format!(
                            "message {id} must provide a node, got none"
                        )));
                    }
                }
            }
        }

        let line = request.line.or_else(|| request.node.map(|n| n.from_line()));
        let column = request
            .col_offset
            .or_else(|| request.node.and_then(|n| n.col_offset()));

        let (enabled, scope) = self.decide(id, line, Some(request.confidence));
        if !enabled {
            trace!(%id, ?line, ?scope, "message suppressed");
            self.file_state.handle_ignored_message(scope, id, line);
            self.stats.record_ignored(scope);
            return Ok(());
        }

        let message = match &request.args {
            Some(args) if !args.is_empty() => interpolate(&template, args)?,
            _ => template,
        };
        self.stats
            .record_emitted(id.category, &self.current_name, &symbol);

        let (module, obj, abspath) = match request.node {
            None => (
                self.current_name.clone(),
                String::new(),
                self.current_file.clone(),
            ),
            Some(node) => (
                node.module_name().to_string(),
                node.frame_id(),
                node.root_file().display().to_string(),
            ),
        };
        let path = self.strip_prefix(&abspath);

        let location = Location {
            abspath,
            path,
            module,
            obj,
            line: line.filter(|&l| l > 0).unwrap_or(1),
            column: column.unwrap_or(0),
        };
        self.reporter.handle_message(Diagnostic::new(
            id,
            symbol,
            location,
            message,
            request.confidence,
        ));
        Ok(())
    }

    fn strip_prefix(&self, abspath: &str) -> String {
        if self.path_strip_prefix.is_empty() {
            return abspath.to_string();
        }
        abspath
            .strip_prefix(self.path_strip_prefix.as_str())
            .unwrap_or(abspath)
            .to_string()
    }

    /// Emits one of the engine's own line-scoped messages if it is registered.
    pub(crate) fn notify(
        &mut self,
        id: MessageId,
        line: u32,
        args: MessageArgs,
    ) -> Result<(), LintError> {
        if self.registry.get(id).is_none() {
            return Ok(());
        }
        self.add_one_message(id, &MessageRequest::at_line(line).args(args))
    }

    // Module lifecycle

    /// Makes `name` the current module with a fresh line-override table.
    pub fn open_module(
        &mut self,
        name: impl Into<String>,
        path: impl Into<String>,
        effective_max_line: Option<u32>,
    ) {
        self.current_name = name.into();
        self.current_file = path.into();
        self.file_state = FileState::new(self.current_name.clone(), effective_max_line);
        self.stats.init_module(&self.current_name);
        debug!(module = %self.current_name, ?effective_max_line, "opened module");
    }

    /// Finishes the current module.
    ///
    /// Reports directives that used numeric ids, every suppressed finding,
    /// and every per-line disable that suppressed nothing, then drops the
    /// module's state. The audit log itself is left intact.
    pub fn close_module(&mut self) -> Result<(), LintError> {
        for entry in self.managed.for_module(&self.current_name) {
            let action = if entry.disabled { "disable" } else { "enable" };
            self.notify(
                master::USE_SYMBOLIC_MESSAGE_INSTEAD,
                entry.line.unwrap_or(1),
                MessageArgs::positional([entry.msg_id.to_string(), action.to_string(), entry.symbol]),
            )?;
        }

        let hits = self.file_state.suppressed_hits();
        let useless = self.file_state.useless_suppressions();
        for (id, origin, line) in hits {
            let symbol = self.registry.symbol(id);
            self.notify(
                master::SUPPRESSED_MESSAGE,
                line,
                MessageArgs::positional([symbol, origin.unwrap_or(1).to_string()]),
            )?;
        }
        for (id, line) in useless {
            let symbol = self.registry.symbol(id);
            self.notify(
                master::USELESS_SUPPRESSION,
                line,
                MessageArgs::positional([symbol]),
            )?;
        }

        debug!(module = %self.current_name, "closed module");
        self.file_state = FileState::default();
        self.current_name.clear();
        self.current_file.clear();
        Ok(())
    }

    // Accessors

    /// Symbols explicitly enabled at run scope, sorted by id.
    pub fn enabled_symbols(&self) -> Vec<String> {
        self.state
            .enabled()
            .into_iter()
            .map(|id| self.registry.symbol(id))
            .collect()
    }

    /// Symbols explicitly disabled at run scope, sorted by id.
    pub fn disabled_symbols(&self) -> Vec<String> {
        self.state
            .disabled()
            .into_iter()
            .map(|id| self.registry.symbol(id))
            .collect()
    }

    /// The current run-scope message control as a config section.
    pub fn messages_config(&self) -> MessagesConfig {
        MessagesConfig {
            enable: self.enabled_symbols(),
            disable: self.disabled_symbols(),
            confidence: self.confidence.iter().map(|c| c.name().to_string()).collect(),
            porting_mode: self.porting_mode,
        }
    }

    /// The message registry.
    pub fn registry(&self) -> &MessageRegistry {
        &self.registry
    }

    /// Run statistics so far.
    pub fn stats(&self) -> &RunStatistics {
        &self.stats
    }

    /// Bitwise OR of the status bits of every emitted category.
    pub fn msg_status(&self) -> u8 {
        self.stats.msg_status()
    }

    /// The audit log of numeric-id directives.
    pub fn managed_messages(&self) -> &Arc<ManagedMessageLog> {
        &self.managed
    }

    /// The current module's line-override table.
    pub fn file_state(&self) -> &FileState {
        &self.file_state
    }

    /// Report toggles.
    pub fn reports(&self) -> &ReportState {
        &self.reports
    }

    /// The current module name, empty outside any module.
    pub fn current_module(&self) -> &str {
        &self.current_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lintel_diagnostics::{Category, DiagnosticSink, MessageDefinition};
    use lintel_source::{SourceFile, SyntaxNode};

    struct Sample;

    impl Checker for Sample {
        fn name(&self) -> &str {
            "sample"
        }

        fn messages(&self) -> Vec<MessageDefinition> {
            vec![
                MessageDefinition::new(
                    MessageId::new(Category::Warning, 9001),
                    "sample-node",
                    "Sample %s",
                    "",
                ),
                MessageDefinition::new(
                    MessageId::new(Category::Convention, 9002),
                    "sample-line",
                    "Sample line",
                    "",
                )
                .with_scope(WarningScope::Line),
            ]
        }
    }

    fn engine() -> (LintEngine, Arc<DiagnosticSink>) {
        let sink = Arc::new(DiagnosticSink::new());
        let mut engine = LintEngine::new(sink.clone());
        engine.register_checker(&master::MasterChecker).unwrap();
        engine.register_checker(&Sample).unwrap();
        (engine, sink)
    }

    #[test]
    fn register_checker_declares_and_counts() {
        let (engine, _) = engine();
        assert!(engine.registry().is_checker("sample"));
        assert_eq!(engine.registry().checker_messages("sample").len(), 2);
    }

    #[test]
    fn duplicate_registration_conflicts() {
        let (mut engine, _) = engine();
        let err = engine.register_checker(&Sample).unwrap_err();
        assert!(matches!(err, LintError::Registry(_)));
    }

    #[test]
    fn node_message_uses_node_location() {
        let (mut engine, sink) = engine();
        let source = SourceFile::new("/work/pkg/shapes.py", "x = 1\n".to_string());
        engine.set_path_strip_prefix("/work/");
        engine.open_module("pkg.shapes", "/work/pkg/shapes.py", Some(1));
        let node = SyntaxNode::new(&source, 3).with_col(8).within("Circle");
        engine
            .add_message(
                "sample-node",
                MessageRequest::on_node(&node).args(MessageArgs::positional(["x"])),
            )
            .unwrap();

        let diags = sink.take_all();
        assert_eq!(diags.len(), 1);
        let loc = &diags[0].location;
        assert_eq!(loc.line, 3);
        assert_eq!(loc.column, 8);
        assert_eq!(loc.obj, "Circle");
        assert_eq!(loc.path, "pkg/shapes.py");
        assert_eq!(loc.abspath, "/work/pkg/shapes.py");
        assert_eq!(diags[0].message, "Sample x");
    }

    #[test]
    fn line_message_uses_current_module() {
        let (mut engine, sink) = engine();
        engine.set_path_strip_prefix("src/");
        engine.open_module("app", "src/app.py", Some(10));
        engine
            .add_message("C9002", MessageRequest::at_line(4))
            .unwrap();
        let diags = sink.take_all();
        assert_eq!(diags[0].location.module, "app");
        assert_eq!(diags[0].location.path, "app.py");
        assert_eq!(diags[0].location.obj, "");
        assert_eq!(diags[0].location.column, 0);
    }

    #[test]
    fn prefix_is_only_stripped_from_the_start() {
        let (mut engine, sink) = engine();
        engine.set_path_strip_prefix("src/");
        engine.open_module("app", "lib/src/app.py", Some(10));
        engine
            .add_message("sample-line", MessageRequest::at_line(1))
            .unwrap();
        assert_eq!(sink.take_all()[0].location.path, "lib/src/app.py");
    }

    #[test]
    fn line_zero_is_reported_as_one() {
        let (mut engine, sink) = engine();
        engine
            .add_message("sample-line", MessageRequest::at_line(0))
            .unwrap();
        assert_eq!(sink.take_all()[0].location.line, 1);
    }

    #[test]
    fn node_kind_without_node_is_invalid() {
        let (mut engine, _) = engine();
        let err = engine
            .add_message("sample-node", MessageRequest::at_line(3))
            .unwrap_err();
        assert!(matches!(err, LintError::InvalidMessage(_)));
    }

    #[test]
    fn unknown_message_in_add_message() {
        let (mut engine, _) = engine();
        assert_eq!(
            engine.add_message("nope", MessageRequest::at_line(1)),
            Err(LintError::UnknownMessage("nope".into()))
        );
    }

    #[test]
    fn template_mismatch_is_a_format_error() {
        let source = SourceFile::new("m.py", String::new());
        let node = SyntaxNode::new(&source, 1);
        let (mut engine, _) = engine();
        let err = engine
            .add_message(
                "sample-node",
                MessageRequest::on_node(&node).args(MessageArgs::positional(["a", "b"])),
            )
            .unwrap_err();
        assert!(matches!(err, LintError::Format(_)));
    }

    #[test]
    fn empty_args_leave_template_untouched() {
        let source = SourceFile::new("m.py", String::new());
        let node = SyntaxNode::new(&source, 1);
        let (mut engine, sink) = engine();
        engine
            .add_message("sample-node", MessageRequest::on_node(&node))
            .unwrap();
        assert_eq!(sink.take_all()[0].message, "Sample %s");
    }

    #[test]
    fn suppressed_messages_count_by_scope() {
        let (mut engine, sink) = engine();
        engine.disable("sample-line", ControlScope::Run, None).unwrap();
        engine
            .add_message("sample-line", MessageRequest::at_line(2))
            .unwrap();
        assert!(sink.take_all().is_empty());
        assert_eq!(engine.stats().ignored_count(StateScope::Config), 1);
        assert_eq!(engine.stats().total(), 0);
    }

    #[test]
    fn stats_follow_emission() {
        let (mut engine, _) = engine();
        engine.open_module("app", "app.py", Some(5));
        engine
            .add_message("sample-line", MessageRequest::at_line(2))
            .unwrap();
        assert_eq!(engine.stats().count(Category::Convention), 1);
        assert_eq!(engine.stats().module_count("app", Category::Convention), 1);
        assert_eq!(engine.stats().msg_count("sample-line"), 1);
        assert_eq!(engine.msg_status(), Category::Convention.status_bit());
    }

    #[test]
    fn reports_are_toggled_not_messages() {
        let (mut engine, _) = engine();
        engine.disable("rp0001", ControlScope::Run, None).unwrap();
        assert!(!engine.reports().is_enabled("RP0001"));
        assert!(engine.disabled_symbols().is_empty());
    }

    #[test]
    fn ignore_unknown_is_a_no_op() {
        let (mut engine, _) = engine();
        engine
            .set_status("no-such-message", false, ControlScope::Run, None, true)
            .unwrap();
        assert_eq!(
            engine.disable("no-such-message", ControlScope::Run, None),
            Err(LintError::UnknownMessage("no-such-message".into()))
        );
    }

    #[test]
    fn unknown_identifier_queries() {
        let (mut engine, _) = engine();
        assert!(engine.is_enabled("W9999", None, None));
        assert!(engine.is_enabled("not-an-id", Some(3), None));
        engine.set_confidence_filter(vec![Confidence::High]);
        assert!(!engine.is_enabled("not-an-id", None, Some(Confidence::Inference)));
    }

    #[test]
    fn messages_config_reflects_run_state() {
        let (mut engine, _) = engine();
        engine.disable("sample-line", ControlScope::Run, None).unwrap();
        engine.enable("W9001", ControlScope::Run, None).unwrap();
        engine.set_confidence_filter(vec![Confidence::High]);
        let config = engine.messages_config();
        assert_eq!(config.disable, vec!["sample-line"]);
        assert_eq!(config.enable, vec!["sample-node"]);
        assert_eq!(config.confidence, vec!["HIGH"]);
    }
}
