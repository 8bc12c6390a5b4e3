//! Domain types - pure data independent of configuration and I/O

pub mod signal;
pub mod version;

pub use signal::{ActivationSignal, SignalSource};
pub use version::SourceVersion;
