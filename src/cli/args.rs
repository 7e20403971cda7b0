//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

use crate::bundler::{Arch, DistributionName, RunOptions};

/// Cross-compilation Swift SDK bundle generator
#[derive(Parser, Debug)]
#[command(
    name = "swift-sdk-bundler",
    version,
    about = "Generates cross-compilation Swift SDK bundles for Linux targets",
    long_about = "Generates a cross-compilation Swift SDK bundle for a Linux distribution.

The target CPU defaults to the host CPU, and the bundle name is derived from
the toolchain version, distribution, and target CPU unless overridden.

Usage:
  swift-sdk-bundler
  swift-sdk-bundler --target-arch aarch64 --linux-distribution-name ubuntu
  swift-sdk-bundler --with-docker --from-container-image ubuntu:24.04

Interrupting a run (Ctrl-C) requests a graceful stop at the next safe
checkpoint instead of killing in-flight work."
)]
pub struct Args {
    /// Version string recorded in the generated bundle
    #[arg(long, value_name = "VERSION", default_value = "0.0.1")]
    pub bundle_version: String,

    /// Explicit name for the generated bundle, overriding the derived one
    #[arg(long, value_name = "NAME")]
    pub sdk_name: Option<String>,

    /// Skip regeneration when the bundle already exists
    #[arg(long)]
    pub incremental: bool,

    /// Verbose progress reporting
    #[arg(short, long)]
    pub verbose: bool,

    /// Swift development branch to use instead of the release toolchain
    #[arg(long, value_name = "BRANCH")]
    pub swift_branch: Option<String>,

    /// Swift toolchain version
    #[arg(long, value_name = "VERSION", default_value = "6.0.3-RELEASE")]
    pub swift_version: String,

    /// Host CPU architecture (auto-detected when omitted)
    #[arg(long, value_name = "ARCH")]
    pub host_arch: Option<Arch>,

    /// Target CPU architecture (defaults to the host CPU)
    #[arg(long, value_name = "ARCH")]
    pub target_arch: Option<Arch>,

    /// Copy target-triple files out of a container image instead of a
    /// native extraction
    #[arg(long)]
    pub with_docker: bool,

    /// Container image to copy from (only meaningful with --with-docker)
    #[arg(long, value_name = "IMAGE")]
    pub from_container_image: Option<String>,

    /// LLD linker version
    #[arg(long, value_name = "VERSION", default_value = "17.0.5")]
    pub lld_version: String,

    /// Linux distribution family of the target
    #[arg(long, value_name = "NAME", value_enum, default_value_t = DistributionName::Ubuntu)]
    pub linux_distribution_name: DistributionName,

    /// Linux distribution version (name-specific default when omitted)
    #[arg(long, value_name = "VERSION")]
    pub linux_distribution_version: Option<String>,

    /// Directory bundles are materialized under
    #[arg(long, value_name = "PATH", default_value = "Bundles")]
    pub output_dir: PathBuf,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.bundle_version.is_empty() {
            return Err("Bundle version cannot be empty".to_string());
        }

        if let Some(name) = &self.sdk_name {
            if name.is_empty() {
                return Err("SDK name cannot be empty".to_string());
            }
        }

        Ok(())
    }
}

impl From<&Args> for RunOptions {
    fn from(args: &Args) -> Self {
        Self {
            bundle_version: args.bundle_version.clone(),
            sdk_name: args.sdk_name.clone(),
            incremental: args.incremental,
            verbose: args.verbose,
            swift_version: args.swift_version.clone(),
            swift_branch: args.swift_branch.clone(),
            lld_version: args.lld_version.clone(),
            host_arch: args.host_arch,
            target_arch: args.target_arch,
            with_docker: args.with_docker,
            container_image: args.from_container_image.clone(),
            distribution_name: args.linux_distribution_name,
            distribution_version: args.linux_distribution_version.clone(),
            output_dir: args.output_dir.clone(),
        }
    }
}
