//! Recipe for Linux distribution SDK bundles.

use tokio_util::sync::CancellationToken;

use crate::bundler::generator::{GenerationOutcome, SdkBundleGenerator, SdkSettings};
use crate::bundler::{LinuxDistribution, Triple};
use crate::error::{GeneratorError, Result};

/// Descriptor for a cross-compilation SDK targeting a Linux distribution.
///
/// Constructed once from resolved triples and validated user options, then
/// never mutated. All fields feed [`default_artifact_id`](Self::default_artifact_id)
/// and the SDK settings the generator writes; none of them trigger I/O here.
#[derive(Clone, Debug)]
pub struct LinuxRecipe {
    target: Triple,
    distribution: LinuxDistribution,
    swift_version: String,
    swift_branch: Option<String>,
    lld_version: String,
    with_docker: bool,
    container_image: Option<String>,
}

impl LinuxRecipe {
    /// Creates a Linux SDK recipe.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::RecipeConstruction`] when a container image is given
    /// without container delegation enabled.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        target: Triple,
        distribution: LinuxDistribution,
        swift_version: String,
        swift_branch: Option<String>,
        lld_version: String,
        with_docker: bool,
        container_image: Option<String>,
    ) -> Result<Self> {
        if container_image.is_some() && !with_docker {
            return Err(GeneratorError::RecipeConstruction {
                reason: "--from-container-image requires --with-docker".to_string(),
            });
        }

        Ok(Self {
            target,
            distribution,
            swift_version,
            swift_branch,
            lld_version,
            with_docker,
            container_image,
        })
    }

    /// Deterministic bundle name used when the user supplies none.
    pub fn default_artifact_id(&self) -> String {
        format!(
            "{}_{}_{}_{}",
            self.swift_version,
            self.distribution.name(),
            self.distribution.version(),
            self.target.arch
        )
    }

    /// Drives the generator's assembly steps for the Linux target family.
    ///
    /// Cancellation is checked between steps; a cancel observed at a
    /// checkpoint unwinds cleanly with [`GenerationOutcome::Cancelled`]
    /// rather than abandoning a half-written bundle mid-step. The manifest
    /// is written last, so a cancelled assembly never looks complete to a
    /// later incremental run.
    pub(super) async fn make_bundle(
        &self,
        generator: &SdkBundleGenerator,
        token: &CancellationToken,
    ) -> Result<GenerationOutcome> {
        if self.with_docker {
            generator.ensure_container_runtime()?;
        }

        if token.is_cancelled() {
            return Ok(GenerationOutcome::Cancelled);
        }

        generator.materialize_skeleton().await?;

        if token.is_cancelled() {
            return Ok(GenerationOutcome::Cancelled);
        }

        let settings = SdkSettings {
            target_triple: self.target.to_string(),
            distribution_name: self.distribution.name().to_string(),
            distribution_version: self.distribution.version().to_string(),
            swift_version: self.swift_version.clone(),
            swift_branch: self.swift_branch.clone(),
            lld_version: self.lld_version.clone(),
            container_delegation: self.with_docker,
            container_image: self.container_image.clone(),
        };
        generator.write_sdk_settings(&settings).await?;

        if token.is_cancelled() {
            return Ok(GenerationOutcome::Cancelled);
        }

        generator.finalize_manifest().await?;

        Ok(GenerationOutcome::Generated)
    }
}
