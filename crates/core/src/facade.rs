//! Invocation entry points for callers that want a disassembly in their
//! diagnostic output.
//!
//! Every failure mode is contained here: no provider, a rejected option, a
//! provider error mid-pass. Callers get `()` back unconditionally, because a
//! missing or broken disassembly must never abort or alter the primary
//! control flow of whatever is being logged.

use std::io::Write;

use log::error;

use crate::locator;
use crate::options::OptionSet;

/// Disassembles `bytes` to `sink` using the located provider, if any.
///
/// When no provider is available this returns immediately with no side
/// effects. Otherwise the recognized `disasm.*` configuration keys are
/// re-read and re-applied, then the provider runs one pass. The whole
/// configure+disassemble sequence holds the provider lock, so concurrent
/// callers cannot interleave configuration into each other's passes.
pub fn disassemble(bytes: &[u8], sink: &mut dyn Write) {
    let Some(slot) = locator::locate() else {
        return;
    };

    let mut provider = slot.lock();

    OptionSet::from_env().apply(provider.as_mut());

    if let Err(e) = provider.disassemble(bytes, sink) {
        error!("disassembly provider {} failed: {e}", provider.name());
    }
}

/// Disassembles `bytes` to standard output.
///
/// The reference use case: a compiler logging the class file it just
/// emitted.
pub fn disassemble_to_stdout(bytes: &[u8]) {
    let stdout = std::io::stdout();
    disassemble(bytes, &mut stdout.lock());
}
