//! SDK bundle recipes.
//!
//! A recipe is a pure descriptor of how to assemble an SDK bundle for one
//! target family. The variant set is closed: adding a new target family adds
//! a variant here, and the orchestrator's control flow stays untouched
//! because it only depends on [`SdkRecipe::default_artifact_id`] and
//! [`SdkRecipe::make_bundle`].

mod linux;

pub use linux::LinuxRecipe;

use tokio_util::sync::CancellationToken;

use crate::bundler::generator::{GenerationOutcome, SdkBundleGenerator};
use crate::error::Result;

/// Build recipe for one SDK bundle.
#[derive(Clone, Debug)]
pub enum SdkRecipe {
    /// Cross-compilation SDK for a Linux distribution
    LinuxDistribution(LinuxRecipe),
}

impl SdkRecipe {
    /// Default artifact identifier derived from the recipe's fields.
    ///
    /// A pure function of the descriptor: recipes built from identical inputs
    /// produce identical identifiers, so reruns name their bundles stably.
    pub fn default_artifact_id(&self) -> String {
        match self {
            SdkRecipe::LinuxDistribution(recipe) => recipe.default_artifact_id(),
        }
    }

    /// Assembles the bundle through the external generator.
    ///
    /// The recipe itself performs no I/O; it drives the generator's assembly
    /// steps for its target family.
    pub async fn make_bundle(
        &self,
        generator: &SdkBundleGenerator,
        token: &CancellationToken,
    ) -> Result<GenerationOutcome> {
        match self {
            SdkRecipe::LinuxDistribution(recipe) => recipe.make_bundle(generator, token).await,
        }
    }
}
