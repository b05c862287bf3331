use clap::{Parser, Subcommand};
use planner_core::*;
use std::io;
use std::path::{Path, PathBuf};

mod prompt;
mod render;

#[derive(Parser)]
#[command(name = "weekplan")]
#[command(about = "Weekly workout and meal planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for plan generation (overrides the config)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a week for the profile in a .toml or .json file
    Plan {
        /// Profile file
        #[arg(long)]
        profile: PathBuf,

        /// Print the plan as JSON instead of tables
        #[arg(long)]
        json: bool,

        /// Also write every exercise and meal to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Print only the aggregated shopping list
    Shopping {
        /// Profile file
        #[arg(long)]
        profile: PathBuf,

        /// Also write the list to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Answer questions, then plan a week (default)
    Interactive {
        /// Print the plan as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// List and validate the catalog
    Catalog,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    planner_core::logging::init_for_verbosity(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let seed = cli.seed.unwrap_or(config.planner.seed);

    match cli.command {
        Some(Commands::Plan { profile, json, csv }) => {
            let input = ProfileInput::load_from(&profile)?;
            cmd_plan(&config, seed, input, json, csv.as_deref())
        }
        Some(Commands::Shopping { profile, csv }) => {
            cmd_shopping(&config, seed, &profile, csv.as_deref())
        }
        Some(Commands::Interactive { json }) => cmd_interactive(&config, seed, json),
        Some(Commands::Catalog) => cmd_catalog(&config),
        None => cmd_interactive(&config, seed, false),
    }
}

fn build_report(config: &Config, seed: u64, input: ProfileInput) -> Result<PlanReport> {
    let catalog = config.catalog()?;
    let profile = input.into_profile_with(&config.defaults);
    let planner = Planner::new(&catalog).with_seed(seed);
    Ok(PlanReport::build(&planner, profile))
}

fn cmd_plan(
    config: &Config,
    seed: u64,
    input: ProfileInput,
    json: bool,
    csv: Option<&Path>,
) -> Result<()> {
    let report = build_report(config, seed, input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render::print_report(&report);
    }

    let empty = report.empty_meal_days();
    if !empty.is_empty() {
        eprintln!(
            "Note: no suitable meal options on {} day(s); try relaxing diet or cuisine filters.",
            empty.len()
        );
    }

    if let Some(path) = csv {
        let rows = write_plan_csv(&report.plan, path)?;
        eprintln!("✓ Wrote {} rows to {}", rows, path.display());
    }

    Ok(())
}

fn cmd_shopping(config: &Config, seed: u64, profile: &Path, csv: Option<&Path>) -> Result<()> {
    let input = ProfileInput::load_from(profile)?;
    let report = build_report(config, seed, input)?;

    render::print_shopping_list(&report.shopping_list);

    if let Some(path) = csv {
        let rows = write_shopping_csv(&report.shopping_list, path)?;
        eprintln!("✓ Wrote {} ingredients to {}", rows, path.display());
    }

    Ok(())
}

fn cmd_interactive(config: &Config, seed: u64, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = prompt::Prompter::new(stdin.lock(), io::stderr());
    let input = prompter.collect(&config.defaults)?;
    cmd_plan(config, seed, input, json, None)
}

fn cmd_catalog(config: &Config) -> Result<()> {
    let catalog = match &config.catalog.dir {
        Some(dir) => Catalog::load_from_dir(dir)?,
        None => build_default_catalog(),
    };

    render::print_catalog(&catalog);

    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in &errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation(format!(
            "{} problem(s) found",
            errors.len()
        )));
    }

    println!("✓ Catalog OK");
    Ok(())
}
