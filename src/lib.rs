pub mod advisory;
pub mod config;
pub mod domain;
pub mod env;
pub mod error;
pub mod policy;
pub mod translate;
pub mod ui;

pub use error::{PyPublishError, Result};
