use crate::cli::{BackendArg, PositionsArgs};
use crate::error::{CliError, Result};
use orbiton::workflows::positions::{self, NucleonKind};
use tracing::info;

pub fn run(args: PositionsArgs, backend: Option<BackendArg>) -> Result<()> {
    let registry = super::build_registry(backend)?;
    let model = args.model.into();

    if let (Some(protons), Some(neutrons)) = (args.protons, args.neutrons) {
        info!(
            "Generating {} protons and {} neutrons with seed {}...",
            protons, neutrons, args.seed
        );
        let sites =
            positions::generate_tagged_positions(&registry, model, protons, neutrons, args.seed);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&sites)?);
        } else {
            for (index, site) in sites.iter().enumerate() {
                let kind = match site.kind {
                    NucleonKind::Proton => "p",
                    NucleonKind::Neutron => "n",
                };
                println!(
                    "{index:>4} {kind}  {:>9.4} {:>9.4} {:>9.4}",
                    site.position.x, site.position.y, site.position.z
                );
            }
        }
        return Ok(());
    }

    let count = args.count.ok_or_else(|| {
        CliError::Argument("either --count or --protons/--neutrons is required".into())
    })?;

    info!("Generating {} nucleons with seed {}...", count, args.seed);
    let points = positions::generate_positions(&registry, model, count, args.seed);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&points)?);
    } else {
        for (index, point) in points.iter().enumerate() {
            println!(
                "{index:>4}    {:>9.4} {:>9.4} {:>9.4}",
                point.x, point.y, point.z
            );
        }
    }
    Ok(())
}
