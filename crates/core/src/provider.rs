//! The capability interface required from any disassembly provider.
//!
//! The facade is written against this trait only; concrete engines are bound
//! at process start via [`crate::locator::register_provider`] or a cargo
//! feature, never as a compile-time dependency of the facade itself.

use std::io::Write;

use thiserror::Error;

/// Error returned when a provider rejects a configuration option.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("option {name} rejected: {reason}")]
    Rejected { name: String, reason: String },
}

/// Error returned when a provider fails while producing output.
#[derive(Debug, Error)]
pub enum DisasmError {
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("provider error: {0}")]
    Provider(String),
    #[error("failed to write to sink: {0}")]
    Sink(#[from] std::io::Error),
}

/// Error returned when a registered provider factory fails to construct its
/// provider instance.
#[derive(Debug, Error)]
#[error("failed to construct disassembly provider: {0}")]
pub struct ProviderInitError(pub String);

impl ProviderInitError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Trait implemented by disassembly providers.
///
/// A provider turns raw bytecode into human-readable assembler text. Both
/// methods take `&mut self` because providers typically carry mutable switch
/// state; the facade serializes access through a mutex, so implementations
/// need `Send` but not `Sync`.
pub trait DisassemblyProvider: Send {
    /// Applies one named boolean switch.
    ///
    /// The recognized names are listed in [`crate::options::OPTION_NAMES`].
    /// Providers may reject names or values they do not support; the facade
    /// logs the rejection and moves on.
    fn configure(&mut self, name: &str, value: bool) -> Result<(), ConfigError>;

    /// Disassembles `bytes`, writing assembler text to `sink`.
    fn disassemble(&mut self, bytes: &[u8], sink: &mut dyn Write) -> Result<(), DisasmError>;

    /// Returns a human-readable name for the provider, used in diagnostics.
    fn name(&self) -> &'static str;
}
