//! Process-environment scanning for activation signals.
//!
//! The only place the crate reads the environment. Scanning is separated from
//! [crate::policy] so the policy itself stays a pure function of its inputs.

use crate::config::SignalsConfig;
use std::collections::HashSet;

/// Collect the configured environment signal names currently set.
///
/// Checks every name in the `local_env` and `ci_env` classes; the build flag
/// is a command-line concern and is never looked up here. A variable counts
/// as present when it is set at all - the value is ignored, including the
/// empty string, matching how the source build tool treats defined
/// properties.
///
/// # Arguments
/// * `signals` - Configured signal names to look up
///
/// # Returns
/// The subset of configured names present in the process environment
pub fn scan_environment(signals: &SignalsConfig) -> HashSet<String> {
    let mut present = HashSet::new();

    for name in signals.local_env.iter().chain(signals.ci_env.iter()) {
        if std::env::var_os(name).is_some() {
            present.insert(name.clone());
        }
    }

    present
}
