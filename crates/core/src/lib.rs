//! disasm-core
//!
//! Facade for rendering compiled bytecode as human-readable assembler text,
//! intended for diagnostic logging from a compiler or class-file emitter.
//!
//! The actual disassembly engine is an external, optionally-present
//! collaborator. This crate covers the parts in front of it: locating a
//! provider at runtime while tolerating its absence, mapping a fixed set of
//! named boolean options onto provider switches, and driving a single
//! disassembly pass whose failures never reach the caller.
//!
//! The goal is to keep all substantive logic here so it is fully testable and
//! reusable from multiple callers (a compiler's debug hook, tooling, etc.).

pub mod facade;
pub mod locator;
pub mod options;
pub mod provider;
pub mod providers;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for callers to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
