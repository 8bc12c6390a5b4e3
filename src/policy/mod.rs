//! Activation policy for the gated Python packaging step

pub mod activation;

pub use activation::{ActivationDecision, ActivationPolicy};
