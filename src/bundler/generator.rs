//! Bundle generator: materializes the SDK bundle on disk.
//!
//! The generator is the collaborator that owns all filesystem mutation. The
//! orchestration layer hands it a recipe and a cancellation token; the
//! generator either completes the bundle, reports a failure, or stops at a
//! checkpoint when cancellation was requested.

use std::path::{Path, PathBuf};

use anyhow::anyhow;
use tokio::fs;
use tokio_util::sync::CancellationToken;

use crate::bundler::recipe::SdkRecipe;
use crate::bundler::Triple;
use crate::error::{GeneratorError, Result};

/// Bundle manifest written at the root of every generated bundle.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleManifest {
    /// Manifest schema version
    pub schema_version: String,
    /// Artifact identifier the bundle was generated under
    pub artifact_id: String,
    /// User-facing bundle version
    pub bundle_version: String,
    /// Triple of the machine the bundle was generated on
    pub host_triple: String,
    /// Triple the bundle cross-compiles for
    pub target_triple: String,
    /// Generation timestamp
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Recipe-specific SDK settings recorded inside the bundle.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SdkSettings {
    pub target_triple: String,
    pub distribution_name: String,
    pub distribution_version: String,
    pub swift_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swift_branch: Option<String>,
    pub lld_version: String,
    pub container_delegation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_image: Option<String>,
}

/// Terminal result of one generator invocation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GenerationOutcome {
    /// The bundle was materialized on disk
    Generated,
    /// Incremental mode found an existing bundle manifest and skipped work
    SkippedUpToDate,
    /// A cancellation request was observed at a checkpoint
    Cancelled,
}

/// Materializes SDK bundles under an output directory.
///
/// Constructed once per run with the resolved identifiers and flags, then
/// driven by the chosen recipe through [`run`](Self::run).
///
/// # Examples
///
/// ```no_run
/// use swift_sdk_bundler::bundler::SdkBundleGenerator;
/// use swift_sdk_bundler::bundler::{Arch, Triple};
/// use std::path::PathBuf;
///
/// let generator = SdkBundleGenerator::new(
///     "0.0.1".to_string(),
///     Triple::host(Arch::AArch64),
///     Triple::linux_target(Arch::AArch64),
///     "6.0.3-RELEASE_ubuntu_22.04_aarch64".to_string(),
///     PathBuf::from("Bundles"),
///     false,
///     false,
/// );
/// ```
#[derive(Debug)]
pub struct SdkBundleGenerator {
    bundle_version: String,
    host_triple: Triple,
    target_triple: Triple,
    artifact_id: String,
    output_dir: PathBuf,
    incremental: bool,
    verbose: bool,
}

impl SdkBundleGenerator {
    /// Creates a generator with resolved identifiers and flags.
    pub fn new(
        bundle_version: String,
        host_triple: Triple,
        target_triple: Triple,
        artifact_id: String,
        output_dir: PathBuf,
        incremental: bool,
        verbose: bool,
    ) -> Self {
        Self {
            bundle_version,
            host_triple,
            target_triple,
            artifact_id,
            output_dir,
            incremental,
            verbose,
        }
    }

    /// Returns the artifact identifier this generator materializes.
    #[allow(dead_code)] // Public API - preserved for external consumers
    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// Root directory of the bundle under construction.
    pub fn bundle_root(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.artifactbundle", self.artifact_id))
    }

    fn manifest_path(&self) -> PathBuf {
        self.bundle_root().join("info.json")
    }

    fn settings_path(&self) -> PathBuf {
        self.bundle_root().join("swift-sdk.json")
    }

    /// Runs the whole assembly for one recipe.
    ///
    /// With incremental mode on, an existing bundle manifest short-circuits
    /// the run as up to date. The manifest is the last file any assembly
    /// writes, so its presence implies a complete bundle; a run that was
    /// cancelled mid-assembly leaves no manifest and is regenerated. Any
    /// error raised during assembly is reported as a generator execution
    /// failure.
    pub async fn run(
        &self,
        recipe: &SdkRecipe,
        token: &CancellationToken,
    ) -> Result<GenerationOutcome> {
        if self.incremental && self.manifest_path().exists() {
            log::info!(
                "bundle '{}' already materialized, skipping (incremental mode)",
                self.artifact_id
            );
            return Ok(GenerationOutcome::SkippedUpToDate);
        }

        if self.verbose {
            log::info!(
                "generating bundle '{}' for {} (host {})",
                self.artifact_id,
                self.target_triple,
                self.host_triple
            );
        }

        recipe.make_bundle(self, token).await.map_err(|e| match e {
            e @ GeneratorError::GeneratorExecution(_) => e,
            other => GeneratorError::GeneratorExecution(anyhow::Error::new(other)),
        })
    }

    /// Verifies a container runtime is available for delegated file copies.
    pub(crate) fn ensure_container_runtime(&self) -> Result<()> {
        for runtime in ["docker", "podman"] {
            if let Ok(path) = which::which(runtime) {
                log::debug!("using container runtime {} at {}", runtime, path.display());
                return Ok(());
            }
        }
        Err(GeneratorError::GeneratorExecution(anyhow!(
            "container delegation requested but no container runtime (docker or podman) is on PATH"
        )))
    }

    /// Creates the bundle directory.
    pub(crate) async fn materialize_skeleton(&self) -> Result<()> {
        let root = self.bundle_root();
        fs::create_dir_all(&root).await?;
        log::debug!("materialized bundle skeleton at {}", root.display());
        Ok(())
    }

    /// Writes the recipe's SDK settings into the bundle.
    pub(crate) async fn write_sdk_settings(&self, settings: &SdkSettings) -> Result<()> {
        write_json(&self.settings_path(), settings).await?;
        log::debug!("wrote SDK settings for {}", settings.target_triple);
        Ok(())
    }

    /// Writes the bundle manifest, marking the assembly complete.
    ///
    /// Must be the final assembly step: the incremental check keys on this
    /// file, so it may only exist once everything else is in place.
    pub(crate) async fn finalize_manifest(&self) -> Result<()> {
        let manifest = BundleManifest {
            schema_version: "1.0".to_string(),
            artifact_id: self.artifact_id.clone(),
            bundle_version: self.bundle_version.clone(),
            host_triple: self.host_triple.to_string(),
            target_triple: self.target_triple.to_string(),
            generated_at: chrono::Utc::now(),
        };
        write_json(&self.manifest_path(), &manifest).await?;
        log::debug!("wrote bundle manifest for '{}'", self.artifact_id);
        Ok(())
    }
}

/// Serializes `value` as pretty JSON at `path`, creating parent directories.
async fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    let body = serde_json::to_vec_pretty(value)?;
    fs::write(path, body).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::recipe::LinuxRecipe;
    use crate::bundler::{Arch, DistributionName, LinuxDistribution};

    fn generator(output_dir: PathBuf, incremental: bool) -> SdkBundleGenerator {
        SdkBundleGenerator::new(
            "0.0.1".to_string(),
            Triple::host(Arch::AArch64),
            Triple::linux_target(Arch::AArch64),
            "6.0.3-RELEASE_ubuntu_22.04_aarch64".to_string(),
            output_dir,
            incremental,
            false,
        )
    }

    fn linux_recipe() -> SdkRecipe {
        SdkRecipe::LinuxDistribution(
            LinuxRecipe::new(
                Triple::linux_target(Arch::AArch64),
                LinuxDistribution::new(DistributionName::Ubuntu, None).unwrap(),
                "6.0.3-RELEASE".to_string(),
                None,
                "17.0.5".to_string(),
                false,
                None,
            )
            .unwrap(),
        )
    }

    #[tokio::test]
    async fn run_materializes_manifest_and_settings() {
        let dir = tempfile::tempdir().unwrap();
        let generator = generator(dir.path().to_path_buf(), false);

        let outcome = generator
            .run(&linux_recipe(), &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(outcome, GenerationOutcome::Generated);

        let manifest_body = std::fs::read(generator.manifest_path()).unwrap();
        let manifest: BundleManifest = serde_json::from_slice(&manifest_body).unwrap();
        assert_eq!(manifest.artifact_id, "6.0.3-RELEASE_ubuntu_22.04_aarch64");
        assert_eq!(manifest.target_triple, "aarch64-unknown-linux-gnu");

        let settings_body = std::fs::read(generator.settings_path()).unwrap();
        let settings: SdkSettings = serde_json::from_slice(&settings_body).unwrap();
        assert_eq!(settings.distribution_name, "ubuntu");
        assert_eq!(settings.distribution_version, "22.04");
        assert_eq!(settings.lld_version, "17.0.5");
    }

    #[tokio::test]
    async fn incremental_run_skips_existing_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let recipe = linux_recipe();

        let first = generator(dir.path().to_path_buf(), true);
        let outcome = first.run(&recipe, &CancellationToken::new()).await.unwrap();
        assert_eq!(outcome, GenerationOutcome::Generated);

        let second = generator(dir.path().to_path_buf(), true);
        let outcome = second.run(&recipe, &CancellationToken::new()).await.unwrap();
        assert_eq!(outcome, GenerationOutcome::SkippedUpToDate);
    }

    #[tokio::test]
    async fn non_incremental_run_regenerates() {
        let dir = tempfile::tempdir().unwrap();
        let recipe = linux_recipe();

        let generator = generator(dir.path().to_path_buf(), false);
        generator
            .run(&recipe, &CancellationToken::new())
            .await
            .unwrap();
        let outcome = generator
            .run(&recipe, &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(outcome, GenerationOutcome::Generated);
    }

    #[tokio::test]
    async fn incremental_rerun_after_interrupted_assembly_regenerates() {
        let dir = tempfile::tempdir().unwrap();
        let recipe = linux_recipe();

        // The state a cancel observed between assembly steps leaves behind:
        // bundle root present, completion manifest absent.
        let interrupted = generator(dir.path().to_path_buf(), true);
        interrupted.materialize_skeleton().await.unwrap();
        assert!(!interrupted.manifest_path().exists());

        let rerun = generator(dir.path().to_path_buf(), true);
        let outcome = rerun.run(&recipe, &CancellationToken::new()).await.unwrap();
        assert_eq!(outcome, GenerationOutcome::Generated);
        assert!(rerun.manifest_path().exists());
        assert!(rerun.settings_path().exists());
    }

    #[tokio::test]
    async fn manifest_is_only_written_once_settings_are_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let generator = generator(dir.path().to_path_buf(), true);

        let outcome = generator
            .run(&linux_recipe(), &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(outcome, GenerationOutcome::Generated);

        // The incremental sentinel implies a complete bundle.
        assert!(generator.manifest_path().exists());
        assert!(generator.settings_path().exists());
    }

    #[tokio::test]
    async fn cancelled_token_stops_at_first_checkpoint() {
        let dir = tempfile::tempdir().unwrap();
        let generator = generator(dir.path().to_path_buf(), false);

        let token = CancellationToken::new();
        token.cancel();

        let outcome = generator.run(&linux_recipe(), &token).await.unwrap();
        assert_eq!(outcome, GenerationOutcome::Cancelled);
        assert!(!generator.manifest_path().exists());
    }
}
