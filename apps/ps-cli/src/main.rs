use clap::{Parser, Subcommand, ValueEnum};
use ps_app::{Action, AppError, AppResult, Quote, project_service};
use ps_core::TreatmentTrain;
use ps_reference::{Industry, standards, suggested_chemicals};
use std::path::{Path, PathBuf};

mod render;

#[derive(Parser)]
#[command(name = "ps-cli")]
#[command(about = "PlantSizer CLI - wastewater treatment plant sizing and quotation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate quote file syntax and values
    Validate {
        /// Path to the quote YAML or JSON file
        quote_path: PathBuf,
    },
    /// List industries with discharge standards
    Industries,
    /// Show discharge standards and suggested chemicals for an industry
    Standards {
        /// Industry name (e.g. "Textile", "dairy")
        industry: String,
    },
    /// Size tanks and estimate sludge for a quote file
    Size {
        /// Path to the quote YAML or JSON file
        quote_path: PathBuf,
        /// Override the treatment train from the file
        #[arg(long, value_enum)]
        train: Option<TrainArg>,
        /// Dosing pump flow (L/hr) for dose recommendations
        #[arg(long)]
        pump_flow: Option<f64>,
    },
    /// Produce a full quote
    Quote {
        /// Path to the quote YAML or JSON file
        quote_path: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TrainArg {
    Biological,
    Chemical,
}

impl From<TrainArg> for TreatmentTrain {
    fn from(arg: TrainArg) -> Self {
        match arg {
            TrainArg::Biological => TreatmentTrain::Biological,
            TrainArg::Chemical => TreatmentTrain::Chemical,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Yaml,
    Json,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { quote_path } => cmd_validate(&quote_path),
        Commands::Industries => cmd_industries(),
        Commands::Standards { industry } => cmd_standards(&industry),
        Commands::Size {
            quote_path,
            train,
            pump_flow,
        } => cmd_size(&quote_path, train.map(Into::into), pump_flow),
        Commands::Quote {
            quote_path,
            format,
            output,
        } => cmd_quote(&quote_path, format, output.as_deref()),
    }
}

fn cmd_validate(quote_path: &Path) -> AppResult<()> {
    println!("Validating quote file: {}", quote_path.display());
    let file = project_service::load_quote_file(quote_path)?;
    println!("✓ Quote file is valid ({})", file.name);
    Ok(())
}

fn cmd_industries() -> AppResult<()> {
    println!("Industries with discharge standards:");
    for industry in Industry::ALL {
        let s = standards(industry);
        println!(
            "  {:<26} BOD {:>5} COD {:>5} TSS {:>5} mg/L",
            industry.display_name(),
            s.bod_mg_l,
            s.cod_mg_l,
            s.tss_mg_l
        );
    }
    Ok(())
}

fn cmd_standards(name: &str) -> AppResult<()> {
    let industry = match project_service::resolve_industry(name) {
        Ok(industry) => industry,
        Err(AppError::UnknownIndustry(_)) => {
            println!("No standard values available");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    print!(
        "{}",
        render::standards(industry, &standards(industry), suggested_chemicals(industry))
    );
    Ok(())
}

fn cmd_size(quote_path: &Path, train: Option<TreatmentTrain>, pump_flow: Option<f64>) -> AppResult<()> {
    let file = project_service::load_quote_file(quote_path)?;
    let mut session = project_service::session_from_file(&file);
    if let Some(train) = train {
        session = session.apply(Action::SetTreatmentTrain(train));
    }

    let snapshot = session.snapshot();
    print!("{}", render::sizing(&snapshot));
    if let Some(flow) = pump_flow {
        let flow = ps_core::ensure_non_negative(flow, "pump flow")?;
        print!("{}", render::recommendations(&snapshot.recommendations(flow)));
    }
    Ok(())
}

fn cmd_quote(quote_path: &Path, format: Format, output: Option<&Path>) -> AppResult<()> {
    let file = project_service::load_quote_file(quote_path)?;
    let session = project_service::session_from_file(&file);
    let today = chrono::Local::now().date_naive();
    let quote = Quote::assemble(&file, &session, today);

    let content = match format {
        Format::Text => render::quote(&quote),
        Format::Yaml => serde_yaml::to_string(&quote)?,
        Format::Json => serde_json::to_string_pretty(&quote)?,
    };

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, content).map_err(|e| AppError::ProjectFileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
        println!("✓ Quote {} written to {}", quote.reference, path.display());
    } else {
        print!("{}", content);
    }

    Ok(())
}
