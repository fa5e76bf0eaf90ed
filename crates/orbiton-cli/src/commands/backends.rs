use crate::error::Result;
use orbiton::engine::backend::{BackendRegistry, Subsystem};

pub fn run() -> Result<()> {
    let registry = BackendRegistry::new();
    println!(
        "optimized library backend: {}",
        if BackendRegistry::library_available() {
            "available"
        } else {
            "not compiled in"
        }
    );
    println!(
        "special functions default: {}",
        registry.current(Subsystem::SpecialFunctions)
    );
    println!(
        "geometry default:          {}",
        registry.current(Subsystem::Geometry)
    );
    Ok(())
}
