use crate::config::SignalsConfig;
use crate::domain::{ActivationSignal, SignalSource};
use std::collections::HashSet;

/// Decides whether the gated Python packaging step should run.
///
/// The decision is a pure disjunction: the step runs if any recognized signal
/// is present. The policy holds only the configured signal names; it reads no
/// environment and performs no routing, so evaluations are safe to run
/// concurrently from any number of callers.
pub struct ActivationPolicy {
    signals: SignalsConfig,
}

/// Outcome of one policy evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationDecision {
    /// Whether the gated step should run
    pub active: bool,
    /// Recognized signals found in the input, in configuration order
    pub matched: Vec<ActivationSignal>,
    /// Input names no signal class recognizes, sorted
    pub unrecognized: Vec<String>,
}

impl ActivationPolicy {
    /// Create a policy from configured signal names
    pub fn new(signals: SignalsConfig) -> Self {
        ActivationPolicy { signals }
    }

    /// Classify a signal name into the class that recognizes it
    ///
    /// Classes are checked in configuration order (build flag, local
    /// environment, CI indicators); a name listed under several classes
    /// belongs to the first.
    pub fn classify(&self, name: &str) -> Option<SignalSource> {
        if name == self.signals.build_flag {
            return Some(SignalSource::BuildFlag);
        }
        if self.signals.local_env.iter().any(|n| n == name) {
            return Some(SignalSource::LocalEnv);
        }
        if self.signals.ci_env.iter().any(|n| n == name) {
            return Some(SignalSource::CiIndicator);
        }
        None
    }

    /// Decide whether the gated step should run for the given present signals
    ///
    /// Plain boolean form of [ActivationPolicy::evaluate]: `true` if any
    /// recognized signal is present, `false` otherwise (including for an
    /// empty set).
    pub fn should_activate(&self, present: &HashSet<String>) -> bool {
        self.evaluate(present).active
    }

    /// Evaluate the policy and report which signals drove the decision
    ///
    /// # Arguments
    /// * `present` - Names of the signals observed to be present
    ///
    /// # Returns
    /// The decision plus the matched signals (configuration order, each name
    /// counted once) and any unrecognized input names
    pub fn evaluate(&self, present: &HashSet<String>) -> ActivationDecision {
        let mut matched = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        // Walk configured names rather than the input set so the report
        // order is deterministic.
        if present.contains(&self.signals.build_flag) && seen.insert(self.signals.build_flag.as_str())
        {
            matched.push(ActivationSignal::new(
                self.signals.build_flag.as_str(),
                SignalSource::BuildFlag,
            ));
        }
        for name in &self.signals.local_env {
            if present.contains(name) && seen.insert(name.as_str()) {
                matched.push(ActivationSignal::new(name.as_str(), SignalSource::LocalEnv));
            }
        }
        for name in &self.signals.ci_env {
            if present.contains(name) && seen.insert(name.as_str()) {
                matched.push(ActivationSignal::new(
                    name.as_str(),
                    SignalSource::CiIndicator,
                ));
            }
        }

        let mut unrecognized: Vec<String> = present
            .iter()
            .filter(|name| self.classify(name).is_none())
            .cloned()
            .collect();
        unrecognized.sort();

        ActivationDecision {
            active: !matched.is_empty(),
            matched,
            unrecognized,
        }
    }
}
