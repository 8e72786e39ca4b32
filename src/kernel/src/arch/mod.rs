//! Architecture-specific implementations.
//!
//! Real-hardware backends for the `testos-hal` traits live here.
//! Currently supported: x86_64.

#[cfg(target_arch = "x86_64")]
pub mod x86_64;
