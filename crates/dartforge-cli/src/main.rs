use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dartforge::{
    checkouts_with_config, console, is_bogey, CheckoutType, ConfigError, DartForgeError,
    DartsConfig, Turn,
};
use owo_colors::OwoColorize;

#[derive(Debug, Parser)]
#[command(name = "dartforge", version, about = "Darts checkout calculator")]
struct Cli {
    /// Log search statistics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Suggest checkouts for a remaining score
    Suggest {
        /// Remaining score
        #[arg(allow_negative_numbers = true)]
        score: i32,

        /// Maximum number of checkouts to list
        #[arg(long)]
        limit: Option<usize>,

        /// Darts left in the turn
        #[arg(long)]
        max_throws: Option<u8>,

        /// Finishing rule: double-out | straight-out
        #[arg(long)]
        out: Option<CheckoutType>,

        /// TOML or YAML settings file; flags override its values
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show the value of entered throws, e.g. `T20 T20 DB`
    Parse {
        #[arg(required = true, num_args = 1..)]
        throws: Vec<String>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] DartForgeError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        console::init_with_directive("dartforge_solver=debug");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".bright_red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Suggest {
            score,
            limit,
            max_throws,
            out,
            config,
        } => {
            let mut settings = match config {
                Some(path) => DartsConfig::from_file(path)?,
                None => DartsConfig::new(),
            };
            if let Some(limit) = limit {
                settings = settings.with_limit(limit);
            }
            if let Some(max_throws) = max_throws {
                settings = settings.with_max_throws(max_throws);
            }
            if let Some(out) = out {
                settings = settings.with_checkout_type(out);
            }
            settings.validate()?;

            suggest(score, &settings);
            Ok(())
        }
        Command::Parse { throws } => parse(&throws.join(" ")),
    }
}

fn suggest(score: i32, settings: &DartsConfig) {
    let checkout_type = settings.checkout.checkout_type;
    let checkouts = checkouts_with_config(score, settings);

    println!(
        "{} {}",
        score.bright_yellow().bold(),
        format!("({checkout_type})").bright_black()
    );

    if checkouts.is_empty() {
        if checkout_type == CheckoutType::DoubleOut && is_bogey(score) {
            println!("  {} (bogey number)", "no checkout".bright_red());
        } else {
            println!("  {}", "no checkout".bright_red());
        }
        return;
    }

    for (i, checkout) in checkouts.iter().enumerate() {
        let rank = format!("{:>2}.", i + 1);
        println!("  {} {}", rank.bright_black(), checkout.bright_green());
    }
}

fn parse(input: &str) -> Result<(), CliError> {
    let turn = Turn::parse(input)?;

    for throw in turn.throws() {
        let name = format!("{:>4}", throw.render());
        println!("  {} = {:>2}", name.bright_cyan(), throw.value());
    }
    println!("   sum = {}", turn.total().bright_yellow().bold());
    Ok(())
}
