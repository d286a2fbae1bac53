#[cfg(feature = "hexdump-provider")]
pub mod hexdump;

#[cfg(feature = "hexdump-provider")]
pub use hexdump::HexDumpProvider;
