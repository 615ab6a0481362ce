use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;

use crimescope_classifiers::categories::CrimeCategory;
use crimescope_classifiers::summary::RegionSummary;
use crimescope_cli::run::{
    load_run_config, run_prediction, validate_csv_file, write_run_report, RunConfig,
};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("CRIMESCOPE_LOG", "error,crimescope=info"))
        .init();

    let category_names: Vec<&'static str> = CrimeCategory::ALL
        .iter()
        .map(|c| c.column_name())
        .collect();

    let matches = Command::new("crimescope")
        .version(clap::crate_version!())
        .about("Regional crime risk prediction from spreadsheet statistics")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("predict")
                .about("Load a CSV, train per-category models, and predict risk for the latest row")
                .arg(
                    Arg::new("data")
                        .help("Path to the crime statistics CSV file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("category")
                        .short('c')
                        .long("category")
                        .help("Highlight a single category in the status output")
                        .value_parser(category_names)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .help("Path to a JSON run configuration file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output")
                        .help("Path for the HTML report. Defaults to crimescope_report.html")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("no_report")
                        .long("no-report")
                        .help("Disable HTML report generation.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("categories")
                .about("List the crime categories recognized in input spreadsheets"),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("predict", sub_m)) => handle_predict(sub_m),
        Some(("categories", _)) => {
            for category in CrimeCategory::ALL {
                println!("{}", category.column_name());
            }
            Ok(())
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_predict(matches: &ArgMatches) -> Result<()> {
    let data: &PathBuf = matches.get_one("data").unwrap();
    validate_csv_file(&data.to_string_lossy())?;

    let config = if let Some(config_path) = matches.get_one::<PathBuf>("config") {
        log::info!("Using run config: {}", config_path.display());
        load_run_config(config_path)?
    } else {
        RunConfig::default()
    };

    let category = matches
        .get_one::<String>("category")
        .map(|name| CrimeCategory::from_str(name).map_err(anyhow::Error::msg))
        .transpose()?;

    let outcome = match run_prediction(data, &config, category) {
        Ok(outcome) => outcome,
        Err(e) => {
            log::error!("Prediction run failed: {:#}", e);
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    };

    match &outcome.focus {
        Some(prediction) => println!("{}", prediction.status_line()),
        None => {
            for prediction in &outcome.predictions {
                println!("{}", prediction.status_line());
            }
        }
    }

    if let RegionSummary::Unavailable = outcome.summary {
        println!("No 'state/ut' column found; region summary unavailable.");
    }

    if config.report && !matches.get_flag("no_report") {
        let default_output = PathBuf::from("crimescope_report.html");
        let output: &PathBuf = matches.get_one("output_file").unwrap_or(&default_output);
        write_run_report(&outcome, output)?;
        println!("Report written to {}", output.display());
    }

    Ok(())
}
