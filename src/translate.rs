//! Version translation between the JVM and Python packaging conventions.
//!
//! JVM builds mark pre-release artifacts with a trailing `-SNAPSHOT`; the Python
//! ecosystem has no such convention, so snapshot versions are mapped to a
//! `.preview` suffix instead (e.g. `0.0.1-SNAPSHOT` becomes `0.0.1.preview`).

use regex::Regex;

/// Pre-release marker used by the source (JVM) ecosystem.
pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// Pre-release marker used by the target (Python) ecosystem.
pub const PREVIEW_SUFFIX: &str = ".preview";

/// Translates a source-ecosystem version string into its Python equivalent.
///
/// Replaces the **first** occurrence of `-SNAPSHOT` with `.preview`. Strings
/// without the marker pass through unchanged. The input is treated as opaque
/// text: no format validation is performed and the function never fails.
///
/// Not idempotent on strings containing the marker more than once - a second
/// pass rewrites the next occurrence. Translated output should therefore not
/// be fed back in; callers that might do so can check for the `.preview`
/// suffix first (see [crate::advisory]).
///
/// # Arguments
/// * `source` - Version string from the source build (e.g., "0.0.1-SNAPSHOT")
///
/// # Returns
/// The translated version string, or `source` unchanged if no marker is present
///
/// # Example
/// ```ignore
/// assert_eq!(translate("0.0.1-SNAPSHOT"), "0.0.1.preview");
/// assert_eq!(translate("0.0.1"), "0.0.1");
/// assert_eq!(translate("1.2.3-SNAPSHOT-extra"), "1.2.3.preview-extra");
/// ```
pub fn translate(source: &str) -> String {
    // The marker contains no regex metacharacters, so the pattern matches it
    // literally and compilation cannot fail.
    match Regex::new(SNAPSHOT_SUFFIX) {
        Ok(re) => re.replace(source, PREVIEW_SUFFIX).into_owned(),
        Err(_) => source.to_string(),
    }
}
