//! The fixed option surface mapped onto provider switches.
//!
//! Options are held as a declarative name table rather than individual
//! fields: adding a recognized name means adding one entry here, with no new
//! code path anywhere else. Values come from process-environment keys of the
//! form `disasm.<name>` and are re-read on every invocation, since the
//! source may change between calls.

use log::error;

use crate::provider::DisassemblyProvider;

/// Namespace prefix for configuration keys (`disasm.verbose` etc.).
///
/// The dotted key form is part of the externally observable surface and is
/// kept as-is rather than renamed to upper-snake environment convention.
pub const OPTION_NAMESPACE: &str = "disasm";

/// The recognized provider switches, in canonical application order.
pub const OPTION_NAMES: [&str; 8] = [
    "verbose",
    "showClassPoolIndexes",
    "constantPoolDump",
    "printAllAttributes",
    "printStackMap",
    "showLineNumbers",
    "showVariableNames",
    "symbolicLabels",
];

/// Returns the configuration key for a recognized option name.
pub fn option_key(name: &str) -> String {
    format!("{OPTION_NAMESPACE}.{name}")
}

/// Lenient boolean parsing: case-insensitive `"true"` is true, anything else
/// (including malformed input) is false. Matches the behavior of the systems
/// this configuration surface was lifted from; nothing is ever rejected.
pub fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// A per-invocation snapshot of the recognized options found in ambient
/// configuration. Ephemeral: built fresh for each disassembly pass, never
/// persisted.
///
/// Only options that are actually present in the source appear here; absent
/// keys are skipped entirely so the provider's own defaults stand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    values: Vec<(&'static str, bool)>,
}

impl OptionSet {
    /// Reads the recognized option keys from the process environment.
    pub fn from_env() -> Self {
        let mut values = Vec::new();
        for name in OPTION_NAMES {
            if let Ok(raw) = std::env::var(option_key(name)) {
                values.push((name, parse_bool(&raw)));
            }
        }
        Self { values }
    }

    /// Builds a set from explicit `(name, value)` pairs, filtering out names
    /// that are not in the recognized table. Mostly useful for tests and for
    /// callers that manage configuration themselves.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, bool)>) -> Self {
        let mut values = Vec::new();
        for (name, value) in pairs {
            if let Some(known) = OPTION_NAMES.iter().find(|n| **n == name) {
                values.push((*known, value));
            }
        }
        Self { values }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Applies each captured option to the provider, in order.
    ///
    /// Each option is an independent switch, so application is additive and
    /// order-independent. A rejected option is logged and abandoned; the
    /// remaining options still apply, and the caller proceeds to invocation
    /// regardless.
    pub fn apply(&self, provider: &mut dyn DisassemblyProvider) {
        for (name, value) in &self.values {
            if let Err(e) = provider.configure(name, *value) {
                error!(
                    "disassembly provider {} rejected option {name}={value}: {e}",
                    provider.name()
                );
            }
        }
    }
}
