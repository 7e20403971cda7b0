//! SDK bundle generation: platform descriptors, recipes, and orchestration.

mod generator;
mod linux;
mod orchestrator;
pub mod recipe;
mod resolver;
mod triple;

pub use generator::{BundleManifest, GenerationOutcome, SdkBundleGenerator, SdkSettings};
pub use linux::{DistributionName, LinuxDistribution};
pub use orchestrator::{RunOptions, SdkBundler};
pub use resolver::TripleResolver;
pub use triple::{Arch, Environment, Os, Triple, Vendor};
