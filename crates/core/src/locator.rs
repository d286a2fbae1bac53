//! Process-wide discovery of the optional disassembly provider.
//!
//! There is exactly one provider slot per process. It is resolved lazily on
//! first use, the outcome (present or absent) is cached for the process
//! lifetime, and it is never retried: a missing provider is a deployment
//! fact, not a transient error.
//!
//! Binding happens either through [`register_provider`] before the first
//! facade call, or through the `hexdump-provider` cargo feature as a
//! fallback. Explicit registration wins over the feature-bound fallback.

use std::sync::{Mutex, MutexGuard};

use log::{debug, error, warn};
use once_cell::sync::OnceCell;

use crate::provider::{DisassemblyProvider, ProviderInitError};

/// Deferred provider construction, so that a construction failure is
/// observed (and contained) at resolution time rather than at registration.
pub type ProviderFactory =
    Box<dyn FnOnce() -> Result<Box<dyn DisassemblyProvider>, ProviderInitError> + Send>;

/// The resolved provider, behind a mutex.
///
/// Providers are `Send` but not assumed safe for concurrent use, so the
/// facade serializes each configure+disassemble pass through this lock.
pub struct ProviderSlot {
    inner: Mutex<Box<dyn DisassemblyProvider>>,
}

impl ProviderSlot {
    /// Locks the provider for one invocation. A poisoned lock is recovered
    /// rather than propagated: a provider that panicked on one pass must not
    /// disable the diagnostic path for the rest of the process.
    pub(crate) fn lock(&self) -> MutexGuard<'_, Box<dyn DisassemblyProvider>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

static FACTORY: Mutex<Option<ProviderFactory>> = Mutex::new(None);
static PROVIDER: OnceCell<Option<ProviderSlot>> = OnceCell::new();

/// Registers the factory for the process-wide provider slot.
///
/// Must run before the first facade call; once the slot has been resolved
/// the cached outcome stands and late registrations are ignored. Returns
/// whether the registration was accepted.
pub fn register_provider(
    factory: impl FnOnce() -> Result<Box<dyn DisassemblyProvider>, ProviderInitError> + Send + 'static,
) -> bool {
    if PROVIDER.get().is_some() {
        warn!("disassembly provider slot already resolved; registration ignored");
        return false;
    }
    let mut slot = FACTORY.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if slot.is_some() {
        warn!("a disassembly provider factory is already registered; registration ignored");
        return false;
    }
    *slot = Some(Box::new(factory));
    true
}

/// Resolves the provider slot, at most once per process.
///
/// Concurrent first calls all observe the same outcome; the factory runs at
/// most once. Returns `None` when no provider is available, which callers
/// treat as "skip disassembly," not as an error.
pub fn locate() -> Option<&'static ProviderSlot> {
    PROVIDER.get_or_init(resolve).as_ref()
}

fn resolve() -> Option<ProviderSlot> {
    let registered = FACTORY.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).take();

    let factory = match registered.or_else(fallback_factory) {
        Some(factory) => factory,
        None => {
            // A notice, not an error: running without a disassembler is a
            // supported deployment.
            warn!(
                "no disassembly provider is available; bytecode disassembly for logging will be \
                 skipped. Register one via locator::register_provider at process start, or build \
                 with the `hexdump-provider` feature for a plain byte dump"
            );
            return None;
        }
    };

    match factory() {
        Ok(provider) => {
            debug!("located disassembly provider: {}", provider.name());
            Some(ProviderSlot { inner: Mutex::new(provider) })
        }
        Err(e) => {
            error!("{e}; bytecode disassembly for logging will be skipped");
            None
        }
    }
}

fn fallback_factory() -> Option<ProviderFactory> {
    #[cfg(feature = "hexdump-provider")]
    {
        return Some(Box::new(|| {
            Ok(Box::new(crate::providers::HexDumpProvider::default())
                as Box<dyn DisassemblyProvider>)
        }));
    }
    #[cfg(not(feature = "hexdump-provider"))]
    None
}
