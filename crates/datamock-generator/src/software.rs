//! Software version strings.

use std::fmt;
use std::str::FromStr;

use datamock_core::Sampler;
use serde::{Deserialize, Serialize};

use crate::error::{MockError, MockResult};

const PRE_RELEASE: &[&str] = &["pre", "alpha", "beta", "dev"];
const DEFAULT_PART_MAX: i64 = 100;

/// Layout produced by [`Software::version`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionFormat {
    /// `x.y.z`
    #[default]
    Semver,
    /// `x`
    Major,
    /// `x.y`
    MajorMinor,
}

impl FromStr for VersionFormat {
    type Err = MockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "semver" => Ok(VersionFormat::Semver),
            "major" => Ok(VersionFormat::Major),
            "major_minor" | "majorMinor" => Ok(VersionFormat::MajorMinor),
            other => Err(MockError::UnknownVersionFormat(other.to_string())),
        }
    }
}

impl fmt::Display for VersionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VersionFormat::Semver => "semver",
            VersionFormat::Major => "major",
            VersionFormat::MajorMinor => "major_minor",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionOptions {
    pub format: VersionFormat,
}

/// One numeric component of a version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionPart {
    /// Used verbatim
    Fixed(i64),
    /// Drawn from the inclusive range
    Range { min: i64, max: i64 },
}

impl Default for VersionPart {
    fn default() -> Self {
        VersionPart::Range {
            min: 0,
            max: DEFAULT_PART_MAX,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Software {
    sampler: Sampler,
}

impl Software {
    pub fn new(sampler: Sampler) -> Self {
        Self { sampler }
    }

    pub fn seed(&mut self, seed: Option<u32>) {
        self.sampler.seed(seed);
    }

    /// Draw from `sampler` from now on.
    pub(crate) fn set_sampler(&mut self, sampler: Sampler) {
        self.sampler = sampler;
    }

    fn part(&self, part: VersionPart) -> i64 {
        match part {
            VersionPart::Fixed(value) => value,
            VersionPart::Range { min, max } => self.sampler.integer(min, max),
        }
    }

    pub fn version(&self, options: VersionOptions) -> String {
        match options.format {
            VersionFormat::Semver => self.sem_ver(),
            VersionFormat::Major => self.major_version(VersionPart::default()).to_string(),
            VersionFormat::MajorMinor => self.major_minor_version(),
        }
    }

    pub fn major_version(&self, part: VersionPart) -> i64 {
        self.part(part)
    }

    pub fn minor_version(&self, part: VersionPart) -> i64 {
        self.part(part)
    }

    pub fn patch_version(&self, part: VersionPart) -> i64 {
        self.part(part)
    }

    /// `x.y`
    pub fn major_minor_version(&self) -> String {
        let major = self.major_version(VersionPart::default());
        let minor = self.minor_version(VersionPart::default());
        format!("{major}.{minor}")
    }

    /// `x.y.z`
    pub fn sem_ver(&self) -> String {
        let major = self.major_version(VersionPart::default());
        let minor = self.minor_version(VersionPart::default());
        let patch = self.patch_version(VersionPart::default());
        format!("{major}.{minor}.{patch}")
    }

    /// `x.y.z-<tag>` where the tag is a pre-release label.
    pub fn pre_version(&self) -> MockResult<String> {
        let version = self.sem_ver();
        let tag = self.sampler.pick_one(PRE_RELEASE)?;
        Ok(format!("{version}-{tag}"))
    }
}
