//! Platform triple types.

use std::fmt;

/// CPU architecture for SDK bundle targets.
///
/// The architecture is auto-detected from the running machine when not
/// overridden on the command line.
///
/// # Examples
///
/// ```no_run
/// use swift_sdk_bundler::bundler::Arch;
///
/// let arch = Arch::AArch64;
/// println!("Target architecture: {}", arch);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    /// x86_64 / AMD64 (64-bit) - Most common desktop/server architecture
    #[value(name = "x86_64")]
    X86_64,
    /// AArch64 / ARM64 (64-bit) - Apple Silicon, modern ARM devices
    #[value(name = "aarch64")]
    AArch64,
}

impl Arch {
    /// Architecture component as it appears in a rendered triple.
    pub fn name(&self) -> &'static str {
        match self {
            Arch::X86_64 => "x86_64",
            Arch::AArch64 => "aarch64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Vendor component of a platform triple.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Vendor {
    /// Generic vendor used for cross-compilation targets
    Unknown,
    /// Apple hardware (macOS hosts)
    Apple,
}

impl Vendor {
    pub fn name(&self) -> &'static str {
        match self {
            Vendor::Unknown => "unknown",
            Vendor::Apple => "apple",
        }
    }
}

/// Operating system component of a platform triple.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Os {
    Linux,
    Macos,
}

impl Os {
    pub fn name(&self) -> &'static str {
        match self {
            Os::Linux => "linux",
            Os::Macos => "macos",
        }
    }
}

/// ABI environment component of a platform triple.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// GNU libc ABI, the standard tag for Linux cross-compilation targets
    Gnu,
    /// No environment component (macOS hosts)
    None,
}

/// A CPU/vendor/OS/environment tuple identifying a build or target platform.
///
/// All four components are drawn from closed enumerations; no free-form
/// strings enter a triple. Host and target instances are created once per run
/// and never mutated.
///
/// # Examples
///
/// ```no_run
/// use swift_sdk_bundler::bundler::{Arch, Triple};
///
/// let target = Triple::linux_target(Arch::AArch64);
/// assert_eq!(target.to_string(), "aarch64-unknown-linux-gnu");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub struct Triple {
    /// CPU architecture
    pub arch: Arch,
    /// Hardware vendor
    pub vendor: Vendor,
    /// Operating system
    pub os: Os,
    /// ABI environment
    pub environment: Environment,
}

impl Triple {
    /// Creates the fixed cross-compilation target triple for the given CPU.
    ///
    /// Only the CPU varies by user choice; vendor, OS, and environment are
    /// policy-determined for the Linux target family.
    pub fn linux_target(arch: Arch) -> Self {
        Self {
            arch,
            vendor: Vendor::Unknown,
            os: Os::Linux,
            environment: Environment::Gnu,
        }
    }

    /// Creates a host triple with the running machine's vendor/OS/environment
    /// and the given CPU.
    pub fn host(arch: Arch) -> Self {
        if cfg!(target_os = "macos") {
            Self {
                arch,
                vendor: Vendor::Apple,
                os: Os::Macos,
                environment: Environment::None,
            }
        } else {
            Self {
                arch,
                vendor: Vendor::Unknown,
                os: Os::Linux,
                environment: Environment::Gnu,
            }
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.arch.name(),
            self.vendor.name(),
            self.os.name()
        )?;
        match self.environment {
            Environment::Gnu => write!(f, "-gnu"),
            Environment::None => Ok(()),
        }
    }
}
