//! Linux distribution selection and version validation.

use std::fmt;

use crate::error::{GeneratorError, Result};

/// Supported Linux distribution families.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DistributionName {
    /// Ubuntu LTS releases
    Ubuntu,
    /// Red Hat Enterprise Linux (Universal Base Image)
    Rhel,
}

impl DistributionName {
    /// Distribution name as it appears in artifact identifiers.
    pub fn name(&self) -> &'static str {
        match self {
            DistributionName::Ubuntu => "ubuntu",
            DistributionName::Rhel => "rhel",
        }
    }

    /// Versions this distribution name is known to support.
    ///
    /// Version matching is exact string equality; there is no semantic
    /// version range handling.
    pub fn supported_versions(&self) -> &'static [&'static str] {
        match self {
            DistributionName::Ubuntu => &["20.04", "22.04", "24.04"],
            DistributionName::Rhel => &["ubi9"],
        }
    }

    /// The version applied when the user supplies none.
    pub fn default_version(&self) -> &'static str {
        match self {
            DistributionName::Ubuntu => "22.04",
            DistributionName::Rhel => "ubi9",
        }
    }
}

impl fmt::Display for DistributionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated Linux distribution name/version pair.
///
/// Construction applies the name-specific default version and rejects any
/// pair outside the static compatibility table.
///
/// # Examples
///
/// ```no_run
/// use swift_sdk_bundler::bundler::{DistributionName, LinuxDistribution};
///
/// # fn example() -> swift_sdk_bundler::error::Result<()> {
/// let distro = LinuxDistribution::new(DistributionName::Ubuntu, None)?;
/// assert_eq!(distro.version(), "22.04");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct LinuxDistribution {
    name: DistributionName,
    version: String,
}

impl LinuxDistribution {
    /// Creates a distribution spec, defaulting the version for the name.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::DistributionValidation`] when the supplied version is
    /// not in the name's supported set.
    pub fn new(name: DistributionName, version: Option<&str>) -> Result<Self> {
        let version = version.unwrap_or_else(|| name.default_version());

        if !name.supported_versions().contains(&version) {
            return Err(GeneratorError::DistributionValidation {
                name: name.to_string(),
                version: version.to_string(),
                supported: name.supported_versions().join(", "),
            });
        }

        Ok(Self {
            name,
            version: version.to_string(),
        })
    }

    /// Returns the distribution name.
    pub fn name(&self) -> DistributionName {
        self.name
    }

    /// Returns the validated version string.
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for LinuxDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}
