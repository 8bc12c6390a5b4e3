use crate::error::{PyPublishError, Result};
use std::fmt;
use std::str::FromStr;

/// Qualifier marking a pre-release artifact in the source build.
const SNAPSHOT_QUALIFIER: &str = "SNAPSHOT";

/// Strictly parsed view of a source build version.
///
/// A well-formed source version is `MAJOR.MINOR.PATCH` with an optional
/// `-QUALIFIER` suffix (e.g. `0.0.1-SNAPSHOT`). This view exists for reporting
/// only: translation itself treats versions as opaque text and never requires
/// a parse to succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub qualifier: Option<String>,
}

impl SourceVersion {
    /// Parse a version string into its structured form
    ///
    /// # Arguments
    /// * `input` - Version string to parse (e.g., "0.0.1-SNAPSHOT")
    ///
    /// # Returns
    /// * `Ok(SourceVersion)` - Successfully parsed version
    /// * `Err` - If the string is not `MAJOR.MINOR.PATCH[-QUALIFIER]`
    pub fn parse(input: &str) -> Result<Self> {
        let parsed = semver::Version::parse(input).map_err(|e| {
            PyPublishError::version(format!(
                "'{}' is not MAJOR.MINOR.PATCH[-QUALIFIER]: {}",
                input, e
            ))
        })?;

        // Build metadata (`+...`) is a semver notion the source build never
        // produces; reject it rather than silently dropping it.
        if !parsed.build.is_empty() {
            return Err(PyPublishError::version(format!(
                "'{}' carries unexpected build metadata '+{}'",
                input, parsed.build
            )));
        }

        let qualifier = if parsed.pre.is_empty() {
            None
        } else {
            Some(parsed.pre.as_str().to_string())
        };

        Ok(SourceVersion {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
            qualifier,
        })
    }

    /// Check whether this is a snapshot (pre-release) version
    pub fn is_snapshot(&self) -> bool {
        self.qualifier.as_deref() == Some(SNAPSHOT_QUALIFIER)
    }
}

impl FromStr for SourceVersion {
    type Err = PyPublishError;

    fn from_str(s: &str) -> Result<Self> {
        SourceVersion::parse(s)
    }
}

impl fmt::Display for SourceVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(ref qualifier) = self.qualifier {
            write!(f, "-{}", qualifier)?;
        }
        Ok(())
    }
}
