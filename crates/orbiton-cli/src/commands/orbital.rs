use crate::cli::{BackendArg, OrbitalArgs};
use crate::error::{CliError, Result};
use orbiton::workflows::orbital;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
struct OrbitalSample {
    label: String,
    n: u32,
    l: u32,
    m: i32,
    r: f64,
    theta: f64,
    phi: f64,
    charge: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    effective_charge: Option<f64>,
    radial: f64,
    angular: f64,
    probability: f64,
}

pub fn run(args: OrbitalArgs, backend: Option<BackendArg>) -> Result<()> {
    let registry = super::build_registry(backend)?;

    info!(
        "Evaluating orbital {} at r = {}, theta = {}, phi = {}...",
        orbital::orbital_label(args.n, args.l),
        args.r,
        args.theta,
        args.phi
    );

    let (radial, effective_charge) = if args.screened {
        if args.charge.fract() != 0.0 || args.charge < 1.0 {
            return Err(CliError::Argument(format!(
                "--screened interprets --charge as an atomic number, got {}",
                args.charge
            )));
        }
        let z = args.charge as u32;
        let radial =
            orbital::radial_wavefunction_screened(&registry, args.n, args.l, args.r, z)?;
        (radial, Some(orbital::effective_nuclear_charge(z, args.n)))
    } else {
        (
            orbital::radial_wavefunction(&registry, args.n, args.l, args.r, args.charge)?,
            None,
        )
    };
    let angular =
        orbital::angular_wavefunction(&registry, args.l, args.m, args.theta, args.phi)?;
    let sample = OrbitalSample {
        label: orbital::orbital_label(args.n, args.l),
        n: args.n,
        l: args.l,
        m: args.m,
        r: args.r,
        theta: args.theta,
        phi: args.phi,
        charge: args.charge,
        effective_charge,
        radial,
        angular,
        probability: radial * radial * angular,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sample)?);
    } else {
        println!("orbital       {} (m = {})", sample.label, sample.m);
        if let Some(z_eff) = sample.effective_charge {
            println!("Z_eff         {z_eff:.4}");
        }
        println!("radial R      {:.6e}", sample.radial);
        println!("angular |Y|^2 {:.6e}", sample.angular);
        println!("probability   {:.6e}", sample.probability);
    }
    Ok(())
}
