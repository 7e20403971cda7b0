//! Host and target triple resolution.
//!
//! The host triple is derived from the running machine (CPU auto-detected
//! unless overridden); the target triple follows a fixed cross-compilation
//! policy where only the CPU is user-selectable.

use crate::bundler::{Arch, Triple};
use crate::error::{GeneratorError, Result};

/// Resolves the effective host and target triples for a run.
///
/// Detection is a single synchronous probe; an unrecognized host architecture
/// is a terminal [`GeneratorError::HostDetection`], never a silent default.
pub struct TripleResolver;

impl TripleResolver {
    /// Resolves `(host, target)`.
    ///
    /// # Arguments
    ///
    /// * `host_arch` - Explicit host CPU override, if any
    /// * `target_arch` - Explicit target CPU; defaults to the host CPU
    pub fn resolve(host_arch: Option<Arch>, target_arch: Option<Arch>) -> Result<(Triple, Triple)> {
        let host_arch = match host_arch {
            Some(arch) => arch,
            None => Self::detect_host_arch()?,
        };

        let host = Triple::host(host_arch);
        let target = Triple::linux_target(target_arch.unwrap_or(host_arch));

        log::debug!("resolved host triple {} and target triple {}", host, target);
        Ok((host, target))
    }

    /// Probes the running machine's CPU architecture.
    fn detect_host_arch() -> Result<Arch> {
        Self::arch_from_platform(std::env::consts::ARCH)
    }

    fn arch_from_platform(arch: &str) -> Result<Arch> {
        match arch {
            "x86_64" => Ok(Arch::X86_64),
            "aarch64" => Ok(Arch::AArch64),
            other => Err(GeneratorError::HostDetection {
                arch: other.to_string(),
            }),
        }
    }
}
