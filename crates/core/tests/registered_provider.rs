//! Facade behavior with a registered provider: configuration keys are
//! re-read per invocation, applied as independent switches, and the provider
//! runs exactly one pass per call.

use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use disasm_core::options::OPTION_NAMES;
use disasm_core::provider::{ConfigError, DisasmError, DisassemblyProvider};
use disasm_core::{facade, locator};

const DEFAULT_MODE_TEXT: &str = "  iconst_0\n  ireturn\n";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Configure(String, bool),
    Disassemble(Vec<u8>),
}

type CallLog = Arc<Mutex<Vec<Call>>>;

/// Recording provider in place of a real disassembler. Writes a fixed
/// default-mode listing so tests can compare sink contents exactly.
struct RecordingProvider {
    calls: CallLog,
}

impl DisassemblyProvider for RecordingProvider {
    fn configure(&mut self, name: &str, value: bool) -> Result<(), ConfigError> {
        self.calls.lock().unwrap().push(Call::Configure(name.to_string(), value));
        Ok(())
    }

    fn disassemble(&mut self, bytes: &[u8], sink: &mut dyn Write) -> Result<(), DisasmError> {
        self.calls.lock().unwrap().push(Call::Disassemble(bytes.to_vec()));
        sink.write_all(DEFAULT_MODE_TEXT.as_bytes())?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// Registers the recording provider once for the whole test binary and
/// returns the shared call log.
fn call_log() -> &'static CallLog {
    static LOG: OnceLock<CallLog> = OnceLock::new();
    LOG.get_or_init(|| {
        let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
        let for_provider = Arc::clone(&calls);
        let accepted = locator::register_provider(move || {
            Ok(Box::new(RecordingProvider { calls: for_provider }))
        });
        assert!(accepted, "registration must run before first facade use");
        calls
    })
}

/// Tests in this binary share the one provider slot and the process
/// environment, so they are serialized and start from a clean slate.
fn setup() -> (MutexGuard<'static, ()>, &'static CallLog) {
    static TEST_LOCK: Mutex<()> = Mutex::new(());
    let guard = TEST_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let calls = call_log();
    calls.lock().unwrap().clear();
    for name in OPTION_NAMES {
        std::env::remove_var(format!("disasm.{name}"));
    }
    (guard, calls)
}

#[test]
fn unconfigured_invocation_skips_configure_entirely() {
    let (_guard, calls) = setup();

    let bytes = [0xCA, 0xFE, 0xBA, 0xBE, 0x00, 0x00, 0x00, 0x41];
    let mut sink = Vec::new();
    facade::disassemble(&bytes, &mut sink);

    let calls = calls.lock().unwrap();
    assert_eq!(*calls, vec![Call::Disassemble(bytes.to_vec())]);
    assert_eq!(String::from_utf8(sink).unwrap(), DEFAULT_MODE_TEXT);
}

#[test]
fn set_option_is_applied_exactly_once_before_the_pass() {
    let (_guard, calls) = setup();
    std::env::set_var("disasm.verbose", "true");

    let mut sink = Vec::new();
    facade::disassemble(&[0x01, 0x02], &mut sink);
    std::env::remove_var("disasm.verbose");

    let calls = calls.lock().unwrap();
    assert_eq!(
        *calls,
        vec![
            Call::Configure("verbose".into(), true),
            Call::Disassemble(vec![0x01, 0x02]),
        ]
    );
}

#[test]
fn multiple_options_apply_in_table_order_with_parsed_values() {
    let (_guard, calls) = setup();
    std::env::set_var("disasm.symbolicLabels", "TRUE");
    std::env::set_var("disasm.verbose", "false");
    std::env::set_var("disasm.showLineNumbers", "not-a-bool");

    let mut sink = Vec::new();
    facade::disassemble(&[0xFF], &mut sink);
    for name in OPTION_NAMES {
        std::env::remove_var(format!("disasm.{name}"));
    }

    let calls = calls.lock().unwrap();
    assert_eq!(
        *calls,
        vec![
            Call::Configure("verbose".into(), false),
            // Lenient parsing: anything but case-insensitive "true" is false.
            Call::Configure("showLineNumbers".into(), false),
            Call::Configure("symbolicLabels".into(), true),
            Call::Disassemble(vec![0xFF]),
        ]
    );
}

#[test]
fn configuration_is_reapplied_per_invocation() {
    let (_guard, calls) = setup();

    let mut sink = Vec::new();
    facade::disassemble(&[0x00], &mut sink);

    std::env::set_var("disasm.printStackMap", "true");
    facade::disassemble(&[0x00], &mut sink);
    std::env::remove_var("disasm.printStackMap");

    facade::disassemble(&[0x00], &mut sink);

    let configures = calls
        .lock()
        .unwrap()
        .iter()
        .filter(|c| matches!(c, Call::Configure(_, _)))
        .count();
    // Only the middle call saw the key; the source is consulted each time.
    assert_eq!(configures, 1);
}

#[test]
fn output_can_target_a_file_sink() {
    let (_guard, _calls) = setup();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("listing.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    facade::disassemble(&[0xCA, 0xFE], &mut file);
    drop(file);

    assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_MODE_TEXT);
}

#[test]
fn second_registration_is_ignored() {
    let (_guard, calls) = setup();

    // Resolve the slot, then try to swap the provider out.
    let mut sink = Vec::new();
    facade::disassemble(&[0x2A], &mut sink);

    struct Usurper;
    impl DisassemblyProvider for Usurper {
        fn configure(&mut self, _name: &str, _value: bool) -> Result<(), ConfigError> {
            Ok(())
        }
        fn disassemble(&mut self, _bytes: &[u8], sink: &mut dyn Write) -> Result<(), DisasmError> {
            sink.write_all(b"usurped\n")?;
            Ok(())
        }
        fn name(&self) -> &'static str {
            "usurper"
        }
    }

    assert!(!locator::register_provider(|| Ok(Box::new(Usurper))));

    let mut sink = Vec::new();
    facade::disassemble(&[0x2A], &mut sink);
    assert_eq!(String::from_utf8(sink).unwrap(), DEFAULT_MODE_TEXT);
    assert_eq!(
        calls.lock().unwrap().iter().filter(|c| matches!(c, Call::Disassemble(_))).count(),
        2
    );
}
