use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use letterdrop_core::{GameSession, HintOutcome, MoveOutcome, SessionProgress, SlotId, TileId, Verdict};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use command::Command;
use settings::{Overrides, Settings};

mod command;
mod render;
mod settings;

/// Spell the hidden word from a pool of letter tiles.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[command(flatten)]
    overrides: Overrides,
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

enum Flow {
    Continue,
    Quit,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.verbose);

    let mut settings = Settings::load(cli.config.as_deref())?;
    settings.apply(&cli.overrides);
    let bank = settings.word_bank()?;
    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Starting session with seed {}", seed);

    let mut session =
        GameSession::new(settings.game, bank, seed).context("could not start a session")?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    writeln!(out, "Type `help` for commands.")?;
    render::round(&mut out, &session)?;

    while !session.is_finished() {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };

        if let Flow::Quit = play(&mut session, command, &mut out)? {
            break;
        }
    }

    let summary = session.quit();
    render::summary(&mut out, &summary)?;
    Ok(())
}

fn play(session: &mut GameSession, command: Command, out: &mut impl Write) -> Result<Flow> {
    let round = session.round_mut();
    match command {
        Command::Place { tile, slot } => match round.place_tile(TileId(tile), SlotId(slot)) {
            Ok(MoveOutcome::NoChange) => writeln!(out, "That tile or slot is already taken.")?,
            Ok(_) => {}
            Err(err) => writeln!(out, "{err}")?,
        },
        Command::Remove { slot } => match round.remove_tile(SlotId(slot)) {
            Ok(MoveOutcome::NoChange) => writeln!(out, "Slot {slot} is empty.")?,
            Ok(_) => {}
            Err(err) => writeln!(out, "{err}")?,
        },
        Command::Hint => match round.use_hint() {
            HintOutcome::Filled { .. } => {}
            HintOutcome::NoEmptySlot => writeln!(out, "Every slot is already filled.")?,
            HintOutcome::NoMatchingTile => writeln!(
                out,
                "No free tile fits the next slot, take a misplaced one out first."
            )?,
        },
        Command::Reset => {
            round.reset();
        }
        Command::Submit => {
            if let Verdict::Incomplete = round.submit() {
                writeln!(out, "Fill every slot first.")?;
            }
        }
        Command::Skip => {
            writeln!(out, "The word was {}.", round.word())?;
            return next_round(session, out, GameSession::skip);
        }
        Command::Help => {
            render::help(out)?;
            return Ok(Flow::Continue);
        }
        Command::Quit => return Ok(Flow::Quit),
    }

    let events = session.round_mut().take_events();
    render::events(out, &events)?;

    if session.round().is_solved() {
        return next_round(session, out, GameSession::advance);
    }
    render::board(out, session)?;
    Ok(Flow::Continue)
}

fn next_round(
    session: &mut GameSession,
    out: &mut impl Write,
    step: fn(&mut GameSession) -> letterdrop_core::Result<SessionProgress>,
) -> Result<Flow> {
    match step(session)? {
        SessionProgress::NextRound => {
            render::round(out, session)?;
            Ok(Flow::Continue)
        }
        SessionProgress::Finished => Ok(Flow::Quit),
    }
}

fn init_logging(verbose: &Verbosity<WarnLevel>) {
    let default_level = verbose.log_level_filter().to_string().to_lowercase();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Seed from the wall clock when none was configured.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
