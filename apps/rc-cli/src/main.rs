use clap::{Parser, Subcommand, ValueEnum};
use rc_cycle::{CycleConfig, CycleError, CycleResult, ScenarioReport, report, run_scenario};
use rc_fluids::CoolPropModel;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "rc-cli")]
#[command(about = "Regenerative cooling cycle analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate scenarios and print the results
    Run {
        /// Configuration YAML file (defaults to the reference scenarios)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Only run the scenario with this name
        #[arg(short, long)]
        scenario: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the reference configuration as YAML
    Config {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check a configuration file without running it
    Validate {
        /// Path to the configuration YAML file
        config_path: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Yaml,
    Json,
}

fn main() -> CycleResult<()> {
    // Logs go to stderr so structured output on stdout stays parseable
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            scenario,
            format,
        } => cmd_run(config.as_deref(), scenario.as_deref(), format),
        Commands::Config { output } => cmd_config(output.as_deref()),
        Commands::Validate { config_path } => cmd_validate(&config_path),
    }
}

fn load_config(path: Option<&Path>) -> CycleResult<CycleConfig> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading configuration");
            CycleConfig::load_yaml(path)
        }
        None => Ok(CycleConfig::reference()),
    }
}

fn cmd_run(path: Option<&Path>, only: Option<&str>, format: OutputFormat) -> CycleResult<()> {
    let config = load_config(path)?;
    config.validate()?;

    let selected: Vec<_> = match only {
        Some(name) => vec![config.scenario(name).ok_or_else(|| CycleError::Config {
            what: format!("unknown scenario '{}'", name),
        })?],
        None => config.scenarios.iter().collect(),
    };

    let model = CoolPropModel::new();
    let reports = selected
        .into_iter()
        .map(|scenario| run_scenario(&model, &config.constants, scenario))
        .collect::<CycleResult<Vec<ScenarioReport>>>()?;

    match format {
        OutputFormat::Text => {
            for r in &reports {
                println!("{}", report::render(r));
            }
        }
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&reports)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }
    Ok(())
}

fn cmd_config(output: Option<&Path>) -> CycleResult<()> {
    let config = CycleConfig::reference();
    match output {
        Some(path) => {
            config.save_yaml(path)?;
            println!("✓ Wrote reference configuration to {}", path.display());
        }
        None => print!("{}", config.to_yaml_string()?),
    }
    Ok(())
}

fn cmd_validate(path: &Path) -> CycleResult<()> {
    println!("Validating configuration: {}", path.display());
    let config = CycleConfig::load_yaml(path)?;
    println!("✓ Configuration is valid");
    for scenario in &config.scenarios {
        println!(
            "  {} - wall fraction {:.3}, fuel factor {:.3}",
            scenario.name, scenario.wall_heat_fraction, scenario.fuel_heat_factor
        );
    }
    Ok(())
}
