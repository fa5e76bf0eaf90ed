use crate::cli::{BackendArg, ValidateArgs};
use crate::error::{CliError, Result};
use tracing::info;

pub fn run(args: ValidateArgs, backend: Option<BackendArg>) -> Result<()> {
    let registry = super::build_registry(backend)?;

    info!(
        "Running dual-backend validation battery at tolerance {:.0e}...",
        args.tolerance
    );
    let report = registry.validate(args.tolerance)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{:<26} {:>8} {:>14} {:>14}  {}",
            "function", "tests", "max abs err", "max rel err", "status"
        );
        for function in &report.functions {
            println!(
                "{:<26} {:>8} {:>14.2e} {:>14.2e}  {}",
                function.name,
                function.tests_run,
                function.max_abs_error,
                function.max_rel_error,
                if function.passed { "PASS" } else { "FAIL" }
            );
        }
    }

    if report.all_passed() {
        info!("All functions agree within tolerance.");
        Ok(())
    } else {
        Err(CliError::ValidationFailed(
            report.failed_functions().join(", "),
        ))
    }
}
