use std::fmt;

/// Class of condition an activation signal belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalSource {
    /// Explicit one-time build request passed on the command line
    BuildFlag,
    /// Developer's persistent opt-in environment variable
    LocalEnv,
    /// Environment variable set by a CI server
    CiIndicator,
}

impl SignalSource {
    /// Short human-readable description of the signal class
    pub fn describe(&self) -> &'static str {
        match self {
            SignalSource::BuildFlag => "one-time build flag",
            SignalSource::LocalEnv => "local environment",
            SignalSource::CiIndicator => "CI indicator",
        }
    }
}

/// A named condition observed to be present for one policy evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationSignal {
    pub name: String,
    pub source: SignalSource,
}

impl ActivationSignal {
    /// Create a new signal
    pub fn new(name: impl Into<String>, source: SignalSource) -> Self {
        ActivationSignal {
            name: name.into(),
            source,
        }
    }
}

impl fmt::Display for ActivationSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.source.describe())
    }
}
