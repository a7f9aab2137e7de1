//! Alphabet Buttons - CLI
//!
//! Terminal host for the Alphabet Buttons module with TUI and CLI modes.

use alphabet_buttons::{
    commands::{
        FactsSource, Session, SessionConfig, SolveConfig, run_simple, run_survey, solve_puzzle,
    },
    facts::loader::load_from_file,
    output::{print_solve_result, print_survey_result},
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::Rng;

#[derive(Parser)]
#[command(
    name = "alphabet_buttons",
    about = "Play, solve and survey the Alphabet Buttons bomb-defusal module",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for button layout and random bombs (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Bomb facts: 'random' (default) or path to a JSON facts file
    #[arg(short, long, global = true, default_value = "random")]
    facts: String,

    /// Module id of the first puzzle, shown in log lines
    #[arg(long, global = true, default_value = "1")]
    id: u32,

    /// Log filter, e.g. 'info' or 'alphabet_buttons=trace' (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type press commands without TUI)
    Simple,

    /// Show the solution of one puzzle
    Solve {
        /// Show every rule with its verdict
        #[arg(short, long)]
        verbose: bool,

        /// Run a command such as "press A C Z" against the puzzle
        #[arg(short, long)]
        press: Option<String>,
    },

    /// Evaluate many random puzzles and report rule statistics
    Survey {
        /// Number of puzzles to evaluate
        #[arg(short = 'n', long, default_value = "10000")]
        count: usize,
    },
}

fn init_logging(log_level: Option<&str>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(filters) = log_level {
        builder.parse_filters(filters);
    }
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let seed = cli.seed.unwrap_or_else(|| {
        let seed = rand::rng().random();
        eprintln!("Using seed {seed}");
        seed
    });

    let mut session_config = SessionConfig::new(seed, FactsSource::from_arg(&cli.facts));
    session_config.first_id = cli.id;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(session_config),
        Commands::Simple => run_simple_command(session_config),
        Commands::Solve { verbose, press } => {
            let mut config = SolveConfig::new(session_config);
            config.press = press;
            let result = solve_puzzle(config)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Survey { count } => run_survey_command(&session_config, count),
    }
}

fn run_survey_command(config: &SessionConfig, count: usize) -> Result<()> {
    let fixed_facts = match &config.facts {
        FactsSource::Random => None,
        FactsSource::File(path) => Some(load_from_file(path)?),
    };

    println!("Surveying {count} puzzles from seed {}...", config.seed);
    let result = run_survey(count, config.seed, fixed_facts.as_ref(), true);
    print_survey_result(&result);
    Ok(())
}

fn run_simple_command(config: SessionConfig) -> Result<()> {
    let mut session = Session::start(config)?;
    run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(config: SessionConfig) -> Result<()> {
    use alphabet_buttons::interactive::{App, run_tui};

    let session = Session::start(config)?;
    run_tui(App::new(session))
}
