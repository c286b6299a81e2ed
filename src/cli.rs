use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::{datasets::{DATASETS, DatasetOption}, error::DatasetError};

#[derive(Parser, Debug)]
#[command(name = "dataset-options", about = "Look up the dataset directory of each dataset option")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every label with its directory
    List {
        #[arg(long)]
        json: bool,
    },
    /// Print the directory of one label
    Lookup {
        key: String,
        /// Treat KEY as a directory and print its label instead
        #[arg(long)]
        reverse: bool,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct DatasetRow {
    label: &'static str,
    value: &'static str,
}

impl From<DatasetOption> for DatasetRow {
    fn from(option: DatasetOption) -> Self {
        DatasetRow {
            label: option.label(),
            value: option.value(),
        }
    }
}

/// Renders the command's stdout.
pub fn run(cli: &Cli) -> Result<String, CliError> {
    match &cli.command {
        Command::List { json } => {
            debug!("listing {} dataset options", DATASETS.len());
            if *json {
                let rows: Vec<DatasetRow> = DATASETS.values().copied().map(DatasetRow::from).collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            } else {
                Ok(DATASETS
                    .values()
                    .map(|option| format!("{}\t{}", option.label(), option.value()))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }
        Command::Lookup { key, reverse, json } => {
            let option = if *reverse {
                DatasetOption::from_value(key)?
            } else {
                DatasetOption::from_label(key)?
            };
            debug!(label = option.label(), value = option.value(), "resolved dataset option");
            if *json {
                Ok(serde_json::to_string_pretty(&DatasetRow::from(option))?)
            } else if *reverse {
                Ok(option.label().to_string())
            } else {
                Ok(option.value().to_string())
            }
        }
    }
}

/// Runs the command, writing its output to `out` and any error to `err`.
/// Returns the process exit status.
pub fn execute(cli: &Cli, out: &mut impl Write, err: &mut impl Write) -> u8 {
    let written = match run(cli) {
        Ok(output) => writeln!(out, "{}", output).map(|_| 0),
        Err(e) => writeln!(err, "error: {}", e).map(|_| 1),
    };
    written.unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String, CliError> {
        let cli = Cli::try_parse_from(std::iter::once("dataset-options").chain(args.iter().copied()))
            .expect("arguments should parse");
        run(&cli)
    }

    #[test]
    fn test_list_plain() {
        let output = run_args(&["list"]).unwrap();
        assert_eq!(
            output,
            "DIC\tDataSet/DIC-C2DH-HeLa\nFLuo\tDataSet/Fluo-N2DL-HeLa\nPhc\tDataSet/PhC-C2DH-U373"
        );
    }

    #[test]
    fn test_list_json() {
        let output = run_args(&["list", "--json"]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1]["label"], "FLuo");
        assert_eq!(rows[1]["value"], "DataSet/Fluo-N2DL-HeLa");
    }

    #[test]
    fn test_lookup_label() {
        assert_eq!(run_args(&["lookup", "DIC"]).unwrap(), "DataSet/DIC-C2DH-HeLa");
        let output = run_args(&["lookup", "Phc", "--json"]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["value"], "DataSet/PhC-C2DH-U373");
    }

    #[test]
    fn test_lookup_reverse() {
        assert_eq!(
            run_args(&["lookup", "--reverse", "DataSet/Fluo-N2DL-HeLa"]).unwrap(),
            "FLuo"
        );
    }

    #[test]
    fn test_lookup_unknown_label_names_valid_labels() {
        let err = run_args(&["lookup", "Fluo"]).unwrap_err();
        assert!(matches!(err, CliError::Dataset(DatasetError::UnknownLabel { .. })));
        assert_eq!(
            err.to_string(),
            "unknown dataset label 'Fluo', expected one of: DIC, FLuo, Phc"
        );
    }

    #[test]
    fn test_lookup_unknown_value() {
        let err = run_args(&["lookup", "--reverse", "DataSet"]).unwrap_err();
        assert!(matches!(err, CliError::Dataset(DatasetError::UnknownValue { .. })));
    }

    #[test]
    fn test_execute_exit_status() {
        let parse = |args: &[&str]| {
            Cli::try_parse_from(std::iter::once("dataset-options").chain(args.iter().copied()))
                .unwrap()
        };
        let (mut out, mut err) = (Vec::new(), Vec::new());

        assert_eq!(execute(&parse(&["lookup", "FLuo"]), &mut out, &mut err), 0);
        assert_eq!(String::from_utf8(out).unwrap(), "DataSet/Fluo-N2DL-HeLa\n");
        assert!(err.is_empty());

        let (mut out, mut err) = (Vec::new(), Vec::new());
        assert_eq!(execute(&parse(&["lookup", "HeLa"]), &mut out, &mut err), 1);
        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "error: unknown dataset label 'HeLa', expected one of: DIC, FLuo, Phc\n"
        );
    }
}
