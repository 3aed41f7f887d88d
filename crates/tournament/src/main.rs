//! Tournament CLI
//!
//! Keep a KDK roster and schedule, enter scores, and run a knockout bracket.
//! State is loaded from and saved back to JSON snapshots after every command.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use kdk_core::{start_bracket, BracketFormat, BracketState, BracketTeam, Entrant, Gender};
use std::path::PathBuf;
use tournament::{
    bracket_report, load, load_or_default, roster_report, save, schedule_report, standings_report,
    Settings, TournamentSession, DEFAULT_SETTINGS_FILE,
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "tournament", about = "KDK doubles scheduling and knockout brackets")]
struct Cli {
    /// Settings file
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    settings: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage the roster
    #[command(subcommand)]
    Player(PlayerCommand),
    /// Change courts, rounds or modes (only before a schedule exists)
    Config(ConfigArgs),
    /// Generate the schedule for the active players
    Generate,
    /// Enter the score of a match
    Score {
        match_id: String,
        score1: u32,
        score2: u32,
    },
    /// Mark a match as unplayed again
    Unscore { match_id: String },
    /// Show the schedule
    Matches,
    /// Show the standings
    Standings,
    /// Drop the schedule and scores, keep the roster
    Reset,
    /// Drop everything, including the roster
    Clear,
    /// Single-elimination bracket
    #[command(subcommand)]
    Bracket(BracketCommand),
}

#[derive(Subcommand)]
enum PlayerCommand {
    Add {
        name: String,
        #[arg(long)]
        female: bool,
        #[arg(long)]
        rating: Option<f64>,
    },
    Remove {
        id: String,
    },
    Toggle {
        id: String,
    },
    List,
}

#[derive(Args)]
struct ConfigArgs {
    #[arg(long)]
    courts: Option<u32>,
    #[arg(long)]
    rounds: Option<u32>,
    #[arg(long)]
    mixed: Option<bool>,
    #[arg(long)]
    strict: Option<bool>,
}

#[derive(Subcommand)]
enum BracketCommand {
    /// Start a bracket; each team is a comma-separated list of names
    Start {
        size: u32,
        #[arg(long)]
        singles: bool,
        teams: Vec<String>,
    },
    Score {
        round_index: usize,
        match_id: String,
        score1: u32,
        score2: u32,
    },
    Show,
    Reset,
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_session(settings: &Settings) -> Result<TournamentSession> {
    let path = &settings.state_path;
    if !path.exists() {
        return Ok(TournamentSession::new(settings.defaults));
    }
    load(path).with_context(|| format!("loading session from {}", path.display()))
}

fn save_session(settings: &Settings, session: &TournamentSession) -> Result<()> {
    save(&settings.state_path, session).context("saving session")
}

fn parse_team(names: &str) -> BracketTeam {
    names
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| Entrant::new(Uuid::new_v4().to_string(), name))
        .collect()
}

fn run_player(settings: &Settings, command: PlayerCommand) -> Result<()> {
    let session = load_session(settings)?;
    let next = match command {
        PlayerCommand::Add {
            name,
            female,
            rating,
        } => {
            let gender = if female { Gender::Female } else { Gender::Male };
            session.add_player(&name, gender, rating)?
        }
        PlayerCommand::Remove { id } => session.remove_player(&id)?,
        PlayerCommand::Toggle { id } => session.toggle_active(&id)?,
        PlayerCommand::List => session,
    };
    save_session(settings, &next)?;
    println!("{}", roster_report(&next));
    Ok(())
}

fn run_config(settings: &Settings, args: ConfigArgs) -> Result<()> {
    let session = load_session(settings)?;
    let mut config = session.config;
    if let Some(courts) = args.courts {
        config.courts = courts;
    }
    if let Some(rounds) = args.rounds {
        config.rounds = rounds;
    }
    if let Some(mixed) = args.mixed {
        config.mixed_doubles = mixed;
    }
    if let Some(strict) = args.strict {
        config.strict_gender = strict;
    }

    let next = session.set_config(config);
    if next.config != config.normalized() {
        eprintln!("Configuration is locked while matches exist. Run `reset` first.");
    }
    save_session(settings, &next)?;
    println!("{:#?}", next.config);
    Ok(())
}

fn run_bracket(settings: &Settings, command: BracketCommand) -> Result<()> {
    let path = &settings.bracket_path;
    let state: BracketState = load_or_default(path)
        .with_context(|| format!("loading bracket from {}", path.display()))?;

    let next = match command {
        BracketCommand::Start {
            size,
            singles,
            teams,
        } => {
            let format = if singles {
                BracketFormat::Singles
            } else {
                BracketFormat::Doubles
            };
            let teams: Vec<BracketTeam> = teams.iter().map(|t| parse_team(t)).collect();
            start_bracket(size, format, &teams)?
        }
        BracketCommand::Score {
            round_index,
            match_id,
            score1,
            score2,
        } => state.report_score(round_index, &match_id, score1, score2),
        BracketCommand::Show => state,
        BracketCommand::Reset => BracketState::default(),
    };

    save(path, &next).context("saving bracket")?;
    println!("{}", bracket_report(&next));
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(&cli.settings)?;
    init_logging(&settings);

    match cli.command {
        Command::Player(command) => run_player(&settings, command)?,
        Command::Config(args) => run_config(&settings, args)?,
        Command::Generate => {
            let session = load_session(&settings)?.generate(&mut rand::thread_rng());
            if session.matches.is_empty() {
                eprintln!("At least 4 active players are needed to generate matches.");
            }
            save_session(&settings, &session)?;
            println!("{}", schedule_report(&session));
        }
        Command::Score {
            match_id,
            score1,
            score2,
        } => {
            let session = load_session(&settings)?.record_score(&match_id, score1, score2);
            save_session(&settings, &session)?;
            println!("{}", schedule_report(&session));
        }
        Command::Unscore { match_id } => {
            let session = load_session(&settings)?.clear_score(&match_id);
            save_session(&settings, &session)?;
            println!("{}", schedule_report(&session));
        }
        Command::Matches => println!("{}", schedule_report(&load_session(&settings)?)),
        Command::Standings => println!("{}", standings_report(&load_session(&settings)?)),
        Command::Reset => {
            let session = load_session(&settings)?.reset_matches();
            save_session(&settings, &session)?;
            info!("schedule and scores cleared");
        }
        Command::Clear => {
            let session = load_session(&settings)?
                .clear_all()
                .set_config(settings.defaults);
            save_session(&settings, &session)?;
            info!("all tournament data cleared");
        }
        Command::Bracket(command) => run_bracket(&settings, command)?,
    }

    Ok(())
}
