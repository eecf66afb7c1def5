//! Command-line interface for the medical cost engine
//!
//! Results go to stdout; logs go to stderr and are filtered by `RUST_LOG`.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use medcost_core::tables::{AliasTables, PricingTables, TableError};
use medcost_core::{
    fallback_triage, format_cost_range, DiseaseInput, Engine, EngineError, Hospital, HospitalCatalog, ResultOrder,
    SearchQuery,
};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const EXIT_FAILURE: u8 = 1;
const EXIT_VALIDATION: u8 = 2;

#[derive(Parser)]
#[command(name = "medcost", version, about = "Estimate treatment costs and compare hospitals")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Pricing tables JSON file replacing the built-in tables
    #[arg(long, global = true, value_name = "FILE")]
    pricing: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the cost range for a disease at a hospital
    Estimate {
        /// Canonical disease name (ignored when --symptoms is given)
        #[arg(required_unless_present = "symptoms")]
        disease: Option<String>,

        /// Comma-separated symptoms to classify instead of a disease name
        #[arg(long, value_delimiter = ',')]
        symptoms: Vec<String>,

        #[arg(long)]
        city: String,

        /// Hospital type label (government, private, premium, trust)
        #[arg(long = "type")]
        hospital_type: Option<String>,

        /// Hospital base cost factor
        #[arg(long)]
        factor: Option<f64>,

        /// Show every pricing factor
        #[arg(long)]
        breakdown: bool,
    },

    /// Resolve free text to a canonical speciality
    Normalize { text: Vec<String> },

    /// Resolve symptoms to a canonical disease (first recognised wins)
    Classify { symptoms: Vec<String> },

    /// Search a hospital catalog
    Search {
        /// JSON array of hospital records
        #[arg(long, value_name = "FILE")]
        catalog: PathBuf,

        #[arg(long)]
        speciality: Option<String>,

        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        disease: Option<String>,

        /// Maximum acceptable low estimate (rupees)
        #[arg(long)]
        budget: Option<f64>,

        #[arg(long, value_enum, default_value_t = OrderArg::AsListed)]
        order: OrderArg,
    },

    /// Keyword triage for a symptom description
    Triage { text: Vec<String> },

    /// Print the pricing tables
    Tables {
        /// Print only the tables' SHA-256 fingerprint
        #[arg(long)]
        fingerprint: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderArg {
    AsListed,
    CostAscending,
    RatingDescending,
}

impl From<OrderArg> for ResultOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::AsListed => ResultOrder::AsListed,
            OrderArg::CostAscending => ResultOrder::CostAscending,
            OrderArg::RatingDescending => ResultOrder::RatingDescending,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with_writer(std::io::stderr)
        .init();
}

/// Failures reported by the command line
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Failed to write JSON output: {0}")]
    Output(#[source] serde_json::Error),
}

impl From<TableError> for CliError {
    fn from(error: TableError) -> Self {
        CliError::Engine(error.into())
    }
}

impl CliError {
    /// Validation errors exit with 2, everything else with 1
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Engine(e) if e.is_validation() => EXIT_VALIDATION,
            _ => EXIT_FAILURE,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn load_pricing(path: &Path) -> Result<PricingTables, EngineError> {
    debug!(path = %path.display(), "Loading pricing tables");
    let json = std::fs::read_to_string(path)?;
    Ok(PricingTables::from_json_str(&json)?)
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let pricing = match &cli.pricing {
        Some(path) => load_pricing(path)?,
        None => PricingTables::builtin().clone(),
    };
    let engine = Engine::new(&pricing, AliasTables::builtin())?;

    match &cli.command {
        Commands::Estimate {
            disease,
            symptoms,
            city,
            hospital_type,
            factor,
            breakdown,
        } => {
            let input = if symptoms.is_empty() {
                DiseaseInput::Disease(disease.clone().unwrap_or_default())
            } else {
                DiseaseInput::Symptoms(symptoms.clone())
            };

            let mut hospital = Hospital::new("command line", city.as_str());
            hospital.hospital_type = hospital_type.clone();
            hospital.base_cost_factor = *factor;

            let detail = engine.estimate_breakdown(input, city, &hospital);
            if cli.json {
                if *breakdown {
                    print_json(&detail)?;
                } else {
                    print_json(&medcost_core::CostEstimate::from(detail))?;
                }
            } else {
                println!("{}: {}", detail.disease, format_cost_range(detail.low, detail.high));
                if *breakdown {
                    println!("  severity:         {}", detail.severity.map_or("none", |s| s.as_str()));
                    println!("  base cost:        {} ({:?})", detail.base_cost, detail.base_source);
                    println!("  city factor:      {} ({})", detail.city_factor, detail.city);
                    println!(
                        "  type multiplier:  {} ({})",
                        detail.hospital_type_multiplier, detail.hospital_type
                    );
                    println!("  base factor:      {}", detail.hospital_base_factor);
                    println!("  total:            {}", detail.total);
                }
            }
        }

        Commands::Normalize { text } => {
            let speciality = engine.normalize_speciality(&text.join(" "));
            if cli.json {
                print_json(&speciality)?;
            } else {
                println!("{}", speciality);
            }
        }

        Commands::Classify { symptoms } => {
            let disease = engine.classify_symptoms(symptoms);
            if cli.json {
                print_json(&disease)?;
            } else {
                println!("{}", disease);
            }
        }

        Commands::Search {
            catalog,
            speciality,
            city,
            disease,
            budget,
            order,
        } => {
            let catalog = HospitalCatalog::from_json_file(catalog)?;
            let query = SearchQuery {
                speciality: speciality.clone(),
                city: city.clone(),
                disease: disease.clone().map(DiseaseInput::Disease),
                budget: *budget,
                order: (*order).into(),
            };

            let results = engine.search_hospitals(&catalog, &query)?;
            if cli.json {
                print_json(&results)?;
            } else if results.is_empty() {
                println!("No hospitals found");
            } else {
                for hospital in &results {
                    println!(
                        "{} ({}, rating {:.1}): {}",
                        hospital.name, hospital.hospital_type, hospital.rating, hospital.cost_text
                    );
                    if let Some(url) = &hospital.map_url {
                        println!("  {}", url);
                    }
                }
            }
        }

        Commands::Triage { text } => {
            let hint = fallback_triage(&text.join(" "));
            if cli.json {
                print_json(&hint)?;
            } else {
                println!("speciality: {}", hint.speciality);
                println!("urgency:    {:?}", hint.urgency);
                for disease in &hint.possible_diseases {
                    println!("  {} ({:.0}%) {}", disease.name, disease.probability * 100.0, disease.notes);
                }
            }
        }

        Commands::Tables { fingerprint } => {
            if *fingerprint {
                println!("{}", engine.pricing().fingerprint()?);
            } else {
                print_json(engine.pricing())?;
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value).map_err(CliError::Output)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::from(EngineError::MissingParameter("city")).exit_code(), EXIT_VALIDATION);
        assert_eq!(
            CliError::from(EngineError::Source("offline".to_string())).exit_code(),
            EXIT_FAILURE
        );
        assert_eq!(CliError::from(TableError::MissingSeverityCost("mild")).exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_output_error_is_not_reported_as_catalog_error() {
        let json_error = serde_json::from_str::<u32>("x").unwrap_err();
        let err = CliError::Output(json_error);

        assert!(err.to_string().starts_with("Failed to write JSON output"));
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_estimate_requires_disease_or_symptoms() {
        assert!(Cli::try_parse_from(["medcost", "estimate", "--city", "Delhi"]).is_err());
        assert!(Cli::try_parse_from(["medcost", "estimate", "--city", "Delhi", "--symptoms", "fever"]).is_ok());
    }
}
