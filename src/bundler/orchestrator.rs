//! End-to-end orchestration of one SDK bundle generation.
//!
//! The orchestrator owns the run sequence: resolve triples, validate the
//! distribution, construct the recipe, pick the artifact identifier, then
//! hand everything to the bundle generator. It performs no filesystem or
//! network mutation itself; any failure at any stage is terminal.

use std::path::PathBuf;

use tokio_util::sync::CancellationToken;

use crate::bundler::generator::{GenerationOutcome, SdkBundleGenerator};
use crate::bundler::recipe::{LinuxRecipe, SdkRecipe};
use crate::bundler::resolver::TripleResolver;
use crate::bundler::{Arch, DistributionName, LinuxDistribution};
use crate::error::Result;

/// User-supplied and defaulted options for one run.
///
/// Built once from the CLI surface, read-only afterward.
#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Version string recorded in the bundle manifest
    pub bundle_version: String,
    /// Explicit artifact identifier, overriding the recipe default
    pub sdk_name: Option<String>,
    /// Skip regeneration when the bundle already exists
    pub incremental: bool,
    /// Verbose progress reporting
    pub verbose: bool,
    /// Swift toolchain version selector
    pub swift_version: String,
    /// Development branch overriding the release toolchain, if any
    pub swift_branch: Option<String>,
    /// LLD linker version selector
    pub lld_version: String,
    /// Explicit host CPU override
    pub host_arch: Option<Arch>,
    /// Explicit target CPU; defaults to the host CPU
    pub target_arch: Option<Arch>,
    /// Copy target-triple files out of a container image
    pub with_docker: bool,
    /// Container image reference, meaningful only with `with_docker`
    pub container_image: Option<String>,
    /// Linux distribution family
    pub distribution_name: DistributionName,
    /// Distribution version; name-specific default when absent
    pub distribution_version: Option<String>,
    /// Directory bundles are materialized under
    pub output_dir: PathBuf,
}

/// Orchestrates a single SDK bundle generation run.
///
/// # Examples
///
/// ```no_run
/// use swift_sdk_bundler::bundler::{RunOptions, SdkBundler};
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example(options: RunOptions) -> swift_sdk_bundler::error::Result<()> {
/// let bundler = SdkBundler::new(options);
/// let outcome = bundler.run(&CancellationToken::new()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SdkBundler {
    options: RunOptions,
}

impl SdkBundler {
    /// Creates an orchestrator for the given options.
    pub fn new(options: RunOptions) -> Self {
        Self { options }
    }

    /// Returns the run options.
    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Executes the run sequence.
    ///
    /// Failures from triple resolution, distribution validation, recipe
    /// construction, or generator execution propagate unchanged; nothing is
    /// retried or resumed.
    pub async fn run(&self, token: &CancellationToken) -> Result<GenerationOutcome> {
        let (host, target) =
            TripleResolver::resolve(self.options.host_arch, self.options.target_arch)?;

        let distribution = LinuxDistribution::new(
            self.options.distribution_name,
            self.options.distribution_version.as_deref(),
        )?;

        let recipe = SdkRecipe::LinuxDistribution(LinuxRecipe::new(
            target,
            distribution,
            self.options.swift_version.clone(),
            self.options.swift_branch.clone(),
            self.options.lld_version.clone(),
            self.options.with_docker,
            self.options.container_image.clone(),
        )?);

        let artifact_id = self
            .options
            .sdk_name
            .clone()
            .unwrap_or_else(|| recipe.default_artifact_id());
        log::info!("artifact identifier: {}", artifact_id);

        let generator = SdkBundleGenerator::new(
            self.options.bundle_version.clone(),
            host,
            target,
            artifact_id,
            self.options.output_dir.clone(),
            self.options.incremental,
            self.options.verbose,
        );

        generator.run(&recipe, token).await
    }
}
