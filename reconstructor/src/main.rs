// Copyright(C) Facebook, Inc. and its affiliates.

use anyhow::{bail, Context, Result};
use clap::{crate_name, crate_version, App, AppSettings, ArgMatches, SubCommand};
use config::{Case, Parameters};
use env_logger::Env;
use log::error;
use model::file_io::Import;

mod pipeline;

use pipeline::{format_secret, run_batch, run_case};

fn main() -> Result<()> {
    let matches = App::new(crate_name!())
        .version(crate_version!())
        .about("Reconstructs Shamir secrets from threshold share documents.")
        .args_from_usage("-v... 'Sets the level of verbosity'")
        .subcommand(
            SubCommand::with_name("solve")
                .about("Reconstruct the secret of a single share document")
                .args_from_usage("--input=<FILE> 'The JSON share document'")
                .args_from_usage("--label=[LABEL] 'The label printed with the secret'")
                .args_from_usage("--strict 'Fail when the interpolated value is not an integer'"),
        )
        .subcommand(
            SubCommand::with_name("run")
                .about("Reconstruct the secret of every configured case")
                .args_from_usage("--parameters=[FILE] 'The file containing the batch parameters'"),
        )
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .get_matches();

    let log_level = match matches.occurrences_of("v") {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match matches.subcommand() {
        ("solve", Some(sub_matches)) => solve(sub_matches)?,
        ("run", Some(sub_matches)) => run(sub_matches)?,
        _ => unreachable!(),
    }
    Ok(())
}

// Reconstructs a single share document given on the command line.
fn solve(matches: &ArgMatches<'_>) -> Result<()> {
    let input = matches.value_of("input").context("Missing share document")?;
    let case = Case::new(matches.value_of("label").unwrap_or(input), input);

    let secret = run_case(&case, matches.is_present("strict"))?;
    println!("{}", format_secret(&case.label, &secret));
    Ok(())
}

// Reconstructs every case of the batch, reporting failures without stopping.
fn run(matches: &ArgMatches<'_>) -> Result<()> {
    // Load default parameters if none are specified.
    let parameters = match matches.value_of("parameters") {
        Some(filename) => {
            Parameters::import(filename).context("Failed to load the batch parameters")?
        }
        None => Parameters::default(),
    };
    parameters.validate().context("Invalid batch parameters")?;
    parameters.log();

    let results = run_batch(&parameters);
    let total = results.len();
    let mut failed = 0;
    for (case, result) in results {
        match result {
            Ok(secret) => println!("{}", format_secret(&case.label, &secret)),
            Err(e) => {
                error!("{}: {:#}", case.label, e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} cases failed", failed, total);
    }
    Ok(())
}
