use std::io::Write;

use crate::options::OPTION_NAMES;
use crate::provider::{ConfigError, DisasmError, DisassemblyProvider};

const BYTES_PER_ROW: usize = 16;

/// Minimal built-in provider that dumps the raw bytes instead of
/// disassembling them. Useful on deployments where no real disassembler is
/// installed but seeing the emitted bytes in the log still helps.
///
/// Honors `verbose` (adds a printable-character gutter per row); the other
/// recognized options are accepted but have no effect on a byte dump.
#[derive(Debug, Default)]
pub struct HexDumpProvider {
    verbose: bool,
}

impl DisassemblyProvider for HexDumpProvider {
    fn configure(&mut self, name: &str, value: bool) -> Result<(), ConfigError> {
        match name {
            "verbose" => {
                self.verbose = value;
                Ok(())
            }
            n if OPTION_NAMES.contains(&n) => Ok(()),
            other => Err(ConfigError::UnknownOption(other.to_string())),
        }
    }

    fn disassemble(&mut self, bytes: &[u8], sink: &mut dyn Write) -> Result<(), DisasmError> {
        writeln!(sink, "// {} bytes (no disassembler installed, raw dump)", bytes.len())?;
        for (row, chunk) in bytes.chunks(BYTES_PER_ROW).enumerate() {
            write!(sink, "{:08x} ", row * BYTES_PER_ROW)?;
            for b in chunk {
                write!(sink, " {b:02x}")?;
            }
            if self.verbose {
                // Pad short final rows so the gutter lines up.
                for _ in chunk.len()..BYTES_PER_ROW {
                    write!(sink, "   ")?;
                }
                write!(sink, "  |")?;
                for b in chunk {
                    let c = if b.is_ascii_graphic() { *b as char } else { '.' };
                    write!(sink, "{c}")?;
                }
                write!(sink, "|")?;
            }
            writeln!(sink)?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "hexdump"
    }
}
