use anyhow::{bail, Context, Result};
use config::{Case, Parameters};
use interpolation::interpolate_fraction_at;
use log::{info, warn};
use model::types_and_const::Secret;
use num_bigint::BigInt;
use num_traits::Zero;
use rayon::prelude::*;
use supply::ShareDocument;

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
pub mod pipeline_tests;

/// Result of reconstructing one share document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub secret: Secret,
    /// False when the value at zero was not an integer and got truncated.
    pub exact: bool,
}

/// Interpolates the first `k` shares of `document` at zero.
pub fn solve_document(document: &ShareDocument) -> Result<Outcome> {
    let points = document
        .select_points()
        .context("Failed to select the threshold shares")?;
    let fraction = interpolate_fraction_at(points.as_slice(), &BigInt::zero())
        .context("Failed to interpolate the selected shares")?;
    Ok(Outcome {
        secret: fraction.truncate()?,
        exact: fraction.is_integral(),
    })
}

pub fn solve_for_constant(path: &str) -> Result<Outcome> {
    let document = ShareDocument::load(path)
        .with_context(|| format!("Failed to load share document '{}'", path))?;
    solve_document(&document).with_context(|| format!("Failed to reconstruct the secret of '{}'", path))
}

pub fn run_case(case: &Case, strict: bool) -> Result<Secret> {
    let outcome = solve_for_constant(&case.file)?;
    if !outcome.exact {
        if strict {
            bail!(
                "Secret for {} is not an integer: the shares do not lie on one integer polynomial",
                case.label
            );
        }
        warn!(
            "Secret for {} was truncated toward zero: the shares do not lie on one integer polynomial",
            case.label
        );
    }
    info!("Reconstructed the secret of {} from {}", case.label, case.file);
    Ok(outcome.secret)
}

/// Reconstructs every configured case. Results keep the configured order.
pub fn run_batch(parameters: &Parameters) -> Vec<(&Case, Result<Secret>)> {
    let strict = parameters.strict;
    if parameters.parallel {
        parameters
            .cases
            .par_iter()
            .map(|case| (case, run_case(case, strict)))
            .collect()
    } else {
        parameters
            .cases
            .iter()
            .map(|case| (case, run_case(case, strict)))
            .collect()
    }
}

pub fn format_secret(label: &str, secret: &Secret) -> String {
    format!("Secret for {}: {}", label, secret)
}
