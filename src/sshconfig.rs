use crate::pipeline::{self, Summary};
use crate::store::FsStore;
use anyhow::{Context, Result};
use config::{BaseDirs, Paths};
use hosts::NumericPolicy;
use tracing::debug;

/// Loads settings, resolves paths from the environment and runs the
/// pipeline against the local filesystem.
///
/// # Errors
///
/// Returns an error if the settings are invalid, the home or config
/// directory cannot be determined, or any pipeline step fails.
pub fn run() -> Result<Summary> {
    let settings = config::load().context("failed to load settings")?;
    let base = BaseDirs::from_env()?;
    let paths = Paths::resolve(&settings, &base);
    debug!(?paths, strict_numbers = settings.strict_numbers, "resolved paths");

    let policy = if settings.strict_numbers {
        NumericPolicy::Strict
    } else {
        NumericPolicy::Lenient
    };

    pipeline::run(&mut FsStore, &paths, policy)
}
