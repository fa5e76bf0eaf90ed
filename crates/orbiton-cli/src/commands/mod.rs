pub mod backends;
pub mod orbital;
pub mod positions;
pub mod validate;

use crate::cli::BackendArg;
use crate::error::Result;
use orbiton::engine::backend::{BackendRegistry, Subsystem};

/// Builds the registry for a command, applying an explicit backend choice to
/// both subsystems when one was requested.
pub fn build_registry(backend: Option<BackendArg>) -> Result<BackendRegistry> {
    let registry = BackendRegistry::new();
    if let Some(choice) = backend {
        registry.select(Subsystem::SpecialFunctions, choice.into())?;
        registry.select(Subsystem::Geometry, choice.into())?;
    }
    Ok(registry)
}
