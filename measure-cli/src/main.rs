//! measure - inspect prefixes and formats, render quantities
//!
//! Commands:
//! - prefixes [metric|binary]: list the prefix catalogs
//! - formats [unit|quantity] [--json]: list registered format names
//! - show <value> <unit> [--format NAME] [--to UNIT]: parse and render a quantity
//!
//! Environment:
//! - MEASURE_LOG: log level on stderr (default warn)
//! - MEASURE_UNIT_FORMAT / MEASURE_QUANTITY_FORMAT: default format names

use clap::{Parser, Subcommand, ValueEnum};
use measure_core::{codes, MeasureError, Prefix, Quantity};
use measure_spi::{FormatMeta, FormatService, FormatType, UnitFormatService, DEFAULT_FORMAT_NAME};
use measure_units::{format_service, BinaryPrefix, MetricPrefix};
use serde::Serialize;
use std::env;
use std::process::ExitCode;
use tracing::{debug, Level};

const LOG_ENV: &str = "MEASURE_LOG";

#[derive(Parser, Debug)]
#[command(name = "measure")]
#[command(version)]
#[command(about = "Inspect unit prefixes and formats, render quantities")]
#[command(after_help = "Environment: MEASURE_LOG, MEASURE_UNIT_FORMAT, MEASURE_QUANTITY_FORMAT")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// List the prefix catalogs (symbol, name, base^power, factor)
    Prefixes {
        #[arg(value_enum)]
        catalog: Option<Catalog>,
    },

    /// List registered format names, marking the default
    Formats {
        #[arg(value_enum)]
        kind: Option<Kind>,

        /// Output format metadata as JSON
        #[arg(long, short = 'j')]
        json: bool,
    },

    /// Parse a quantity written with unit symbols and render it
    ///
    /// Example: measure show 1500 m --to km --format Name
    Show {
        /// Value and unit, e.g. `5 km`
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true, value_name = "QUANTITY")]
        words: Vec<String>,

        /// Quantity format used for output
        #[arg(long, short = 'f')]
        format: Option<String>,

        /// Convert to this unit first
        #[arg(long)]
        to: Option<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Catalog {
    Metric,
    Binary,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Unit,
    Quantity,
}

impl From<Kind> for FormatType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Unit => FormatType::UnitFormat,
            Kind::Quantity => FormatType::QuantityFormat,
        }
    }
}

#[derive(Serialize)]
struct FormatListing {
    kind: FormatType,
    default: &'static str,
    formats: Vec<FormatMeta>,
}

fn prefix_rows<'a>(prefixes: impl Iterator<Item = &'a dyn Prefix>) -> Vec<String> {
    prefixes
        .map(|p| {
            let power = format!("{}^{}", p.base(), p.power());
            format!("{:<3} {:<7} {:<6} {}", p.symbol(), p.name(), power, p.factor())
        })
        .collect()
}

fn list_prefixes(catalog: Option<Catalog>) -> String {
    let metric = MetricPrefix::ALL.iter().map(|p| p as &dyn Prefix);
    let binary = BinaryPrefix::ALL.iter().map(|p| p as &dyn Prefix);
    let rows = match catalog {
        Some(Catalog::Metric) => prefix_rows(metric),
        Some(Catalog::Binary) => prefix_rows(binary),
        None => prefix_rows(metric.chain(binary)),
    };
    rows.join("\n")
}

fn list_formats(
    service: &measure_spi::FormatRegistry,
    kind: Option<FormatType>,
    json: bool,
) -> Result<String, MeasureError> {
    let kinds: Vec<FormatType> = match kind {
        Some(k) => vec![k],
        None => FormatType::ALL.to_vec(),
    };

    if json {
        let listings: Vec<FormatListing> = kinds.into_iter()
            .map(|kind| FormatListing {
                kind,
                default: service.default_format_name(kind),
                formats: service.list_formats(kind),
            })
            .collect();
        return serde_json::to_string_pretty(&listings)
            .map_err(|e| MeasureError::new(codes::REGISTRY, e.to_string()));
    }

    let mut lines = Vec::new();
    for kind in kinds {
        lines.push(format!("{}:", kind));
        let default = service.default_format_name(kind);
        for name in service.available_format_names(kind) {
            let marker = if name == default { " (default)" } else { "" };
            lines.push(format!("  {}{}", name, marker));
        }
    }
    Ok(lines.join("\n"))
}

fn show(
    service: &measure_spi::FormatRegistry,
    text: &str,
    format: Option<&str>,
    to: Option<&str>,
) -> Result<String, MeasureError> {
    // Input is always read as symbols
    let reader = service.get_quantity_format(DEFAULT_FORMAT_NAME)
        .unwrap_or_else(|| service.quantity_format());
    let mut quantity: Quantity = reader.parse(text)?;
    debug!(%quantity, "parsed");

    if let Some(target) = to {
        let unit = service.unit_format().parse(target)?;
        quantity = quantity.convert_to(&unit)?;
    }

    let writer = match format {
        Some(name) => service.get_quantity_format(name)
            .ok_or_else(|| MeasureError::unknown_format(name))?,
        None => service.quantity_format(),
    };
    Ok(writer.format(&quantity))
}

fn run(command: Command) -> Result<String, MeasureError> {
    match command {
        Command::Prefixes { catalog } => Ok(list_prefixes(catalog)),
        Command::Formats { kind, json } => {
            list_formats(format_service()?, kind.map(FormatType::from), json)
        }
        Command::Show { words, format, to } => {
            show(format_service()?, &words.join(" "), format.as_deref(), to.as_deref())
        }
    }
}

/// Process status for a failed command: 2 for an unknown format name, else 1
fn exit_status(err: &MeasureError) -> u8 {
    if err.code == codes::UNKNOWN_FORMAT {
        2
    } else {
        1
    }
}

fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|v| v.trim().parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(exit_status(&err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use measure_spi::FormatConfig;
    use measure_units::default_registry;

    fn parse(line: &str) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("measure").chain(line.split_whitespace()))
    }

    fn registry() -> measure_spi::FormatRegistry {
        default_registry(FormatConfig::default()).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse("prefixes binary").unwrap().command, Command::Prefixes { catalog: Some(Catalog::Binary) });
        assert_eq!(parse("prefixes").unwrap().command, Command::Prefixes { catalog: None });
        assert_eq!(
            parse("formats quantity --json").unwrap().command,
            Command::Formats { kind: Some(Kind::Quantity), json: true }
        );
        assert_eq!(
            parse("show 5 km --format Name").unwrap().command,
            Command::Show {
                words: vec!["5".to_string(), "km".to_string()],
                format: Some("Name".to_string()),
                to: None,
            }
        );
        assert_eq!(
            parse("show -f ASCII -40 degC --to K").unwrap().command,
            Command::Show {
                words: vec!["-40".to_string(), "degC".to_string()],
                format: Some("ASCII".to_string()),
                to: Some("K".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_rejects_bad_arguments() {
        assert!(parse("").is_err());
        assert!(parse("frobnicate").is_err());
        assert!(parse("prefixes decimal").is_err());
        assert!(parse("show").is_err());
        assert!(parse("show 5 km --format").is_err());
    }

    #[test]
    fn test_kind_maps_to_format_type() {
        assert_eq!(FormatType::from(Kind::Unit), FormatType::UnitFormat);
        assert_eq!(FormatType::from(Kind::Quantity), FormatType::QuantityFormat);
    }

    #[test]
    fn test_exit_status() {
        let reg = registry();
        let err = show(&reg, "5 km", Some("Fancy"), None).unwrap_err();
        assert_eq!(exit_status(&err), 2);

        let err = show(&reg, "5 parsecs", None, None).unwrap_err();
        assert_eq!(exit_status(&err), 1);
        assert_eq!(exit_status(&MeasureError::parse_error("x")), 1);
    }

    #[test]
    fn test_list_prefixes() {
        let binary = list_prefixes(Some(Catalog::Binary));
        assert_eq!(binary.lines().count(), 8);
        assert!(binary.lines().next().unwrap().contains("1024"));
        assert!(binary.lines().last().unwrap().ends_with(" 1208925819614629174706176"));

        let all = list_prefixes(None);
        assert_eq!(all.lines().count(), 32);
        assert!(all.lines().any(|l| l.starts_with("k ") && l.contains("1000")));
    }

    #[test]
    fn test_list_formats_marks_default() {
        let out = list_formats(&registry(), Some(FormatType::UnitFormat), false).unwrap();
        assert!(out.starts_with("UNIT_FORMAT:"));
        assert!(out.contains("  Simple (default)"));
        assert!(out.contains("  ASCII\n"));
    }

    #[test]
    fn test_list_formats_json() {
        let out = list_formats(&registry(), None, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["kind"], "UNIT_FORMAT");
        assert_eq!(value[1]["default"], "Simple");
        assert_eq!(value[1]["formats"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_show() {
        let reg = registry();
        assert_eq!(show(&reg, "5 km", None, None).unwrap(), "5 km");
        assert_eq!(show(&reg, "5 km", Some("Name"), None).unwrap(), "5 kilometer");
        assert_eq!(show(&reg, "1500 m", None, Some("km")).unwrap(), "1.5 km");
        assert_eq!(show(&reg, "25 °C", Some("ASCII"), None).unwrap(), "25 degC");
        assert_eq!(show(&reg, "-40 degC", None, Some("K")).unwrap(), "233.15 K");
    }

    #[test]
    fn test_show_errors() {
        let reg = registry();
        let err = show(&reg, "5 km", Some("Fancy"), None).unwrap_err();
        assert_eq!(err.code, codes::UNKNOWN_FORMAT);

        let err = show(&reg, "5 parsecs", None, None).unwrap_err();
        assert_eq!(err.code, codes::UNKNOWN_UNIT);

        let err = show(&reg, "5 km", None, Some("s")).unwrap_err();
        assert_eq!(err.code, codes::INCOMPATIBLE_UNITS);
    }
}
