use crate::domain::SourceVersion;
use crate::translate::PREVIEW_SUFFIX;
use std::fmt;

/// Non-fatal findings about the inputs handed to py-publish.
/// These never block a decision; they are reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Advisory {
    /// Source version does not follow MAJOR.MINOR.PATCH[-QUALIFIER]
    NonStandardVersion { version: String, reason: String },
    /// Source version already carries the target-ecosystem suffix
    AlreadyTranslated { version: String },
    /// Supplied signal name matches no configured signal class
    UnknownSignal { name: String },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::NonStandardVersion { version, reason } => {
                write!(
                    f,
                    "Version '{}' is not a standard source version ({}); translating it as opaque text",
                    version, reason
                )
            }
            Advisory::AlreadyTranslated { version } => {
                write!(
                    f,
                    "Version '{}' already uses the '{}' convention; expected an untranslated source version",
                    version, PREVIEW_SUFFIX
                )
            }
            Advisory::UnknownSignal { name } => {
                write!(f, "Signal '{}' matches no configured signal class", name)
            }
        }
    }
}

/// Inspect a source version string for conditions worth reporting.
///
/// Translation itself accepts anything; this surfaces inputs that usually
/// indicate an orchestration mistake, such as feeding an already-translated
/// version back in.
pub fn inspect_version(source: &str) -> Vec<Advisory> {
    if source.ends_with(PREVIEW_SUFFIX) {
        // The translated form is never standard, so a shape warning on top
        // would be noise.
        return vec![Advisory::AlreadyTranslated {
            version: source.to_string(),
        }];
    }

    match SourceVersion::parse(source) {
        Ok(_) => Vec::new(),
        Err(e) => vec![Advisory::NonStandardVersion {
            version: source.to_string(),
            reason: e.to_string(),
        }],
    }
}
