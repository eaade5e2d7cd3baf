use letterdrop_core::{GameSession, RoundEvent, SessionSummary};
use std::io::{Result, Write};

pub(crate) fn round(out: &mut impl Write, session: &GameSession) -> Result<()> {
    let round = session.round();
    writeln!(out)?;
    writeln!(
        out,
        "Round {} ({}), score {}",
        session.round_number(),
        session.difficulty().name(),
        session.summary().total_score,
    )?;
    board(out, session)?;
    writeln!(
        out,
        "hints used: {}, attempts failed: {}",
        round.hints_used(),
        round.failed_attempts()
    )
}

pub(crate) fn board(out: &mut impl Write, session: &GameSession) -> Result<()> {
    let round = session.round();

    write!(out, "  word ")?;
    for letter in round.guess().chars() {
        write!(out, " [{letter}]")?;
    }
    writeln!(out)?;

    write!(out, "  slot ")?;
    for slot in round.slots() {
        write!(out, " {:^3}", slot.index)?;
    }
    writeln!(out)?;

    write!(out, "  tiles")?;
    for tile in round.available_tiles() {
        write!(out, " {}:{}", tile.id.0, tile.letter)?;
    }
    writeln!(out)
}

/// Stands in for the sound and haptics a touch front-end would fire.
pub(crate) fn events(out: &mut impl Write, events: &[RoundEvent]) -> Result<()> {
    for event in events {
        match *event {
            RoundEvent::Placed { .. } | RoundEvent::Removed { .. } => {}
            RoundEvent::Reset => writeln!(out, "Slots cleared.")?,
            RoundEvent::HintUsed { slot, letter } => {
                writeln!(out, "Hint: slot {} is {}.", slot.0, letter)?
            }
            RoundEvent::RoundSuccess { score } => writeln!(out, "Correct! +{score}")?,
            RoundEvent::RoundFailed => writeln!(out, "Not quite, the letters are back. Try again.")?,
        }
    }
    Ok(())
}

pub(crate) fn summary(out: &mut impl Write, summary: &SessionSummary) -> Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Played {} rounds: {} solved, {} skipped, {} hints.",
        summary.rounds_played, summary.solved, summary.skipped, summary.hints_used
    )?;
    writeln!(out, "Final score: {}", summary.total_score)
}

pub(crate) fn help(out: &mut impl Write) -> Result<()> {
    writeln!(out, "  place <tile> <slot>  (p)  put a tile into a slot")?;
    writeln!(out, "  remove <slot>        (r)  take a tile back out")?;
    writeln!(out, "  hint                 (h)  fill the next slot, costs points")?;
    writeln!(out, "  reset                     clear every slot")?;
    writeln!(out, "  submit               (s)  check the word")?;
    writeln!(out, "  skip                      give up on this word")?;
    writeln!(out, "  quit                 (q)  end the game")
}
