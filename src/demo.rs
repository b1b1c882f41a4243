//! Text demos driving the engine
//!
//! Each routine plays from the initial position and writes boards and
//! results to `out`. The CLI passes stdout; tests pass a `Vec<u8>`.

use std::io::Write;

use tracing::{debug, info};

use crate::board::{Pos, INITIAL_DISKS};
use crate::engine::{AIEngine, MoveResult};
use crate::error::{Error, Result};
use crate::game::GameSession;

const SECTION_RULE: usize = 68;
const STEP_RULE: usize = 47;

/// Final state of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub black: u32,
    pub white: u32,
    /// +1 Black wins, -1 White wins, 0 draw
    pub utility: i32,
    pub moves: u32,
}

impl GameOutcome {
    fn of(game: &GameSession) -> Self {
        let (black, white) = game.count_disks();
        Self {
            black,
            white,
            utility: game.utility(),
            moves: game.moves_applied(),
        }
    }

    pub fn winner(&self) -> &'static str {
        match self.utility {
            1 => "black",
            -1 => "white",
            _ => "draw",
        }
    }
}

/// Play first-legal moves until `disk_target` disks are down, then list every
/// legal action from there with the board it produces.
pub fn display_all_actions<W: Write>(out: &mut W, disk_target: usize) -> Result<()> {
    let mut game = GameSession::new();
    for _ in 0..disk_target.saturating_sub(INITIAL_DISKS) {
        if !game.first_step() {
            break;
        }
    }

    for (pos, next) in game.successors() {
        let (black, white) = next.count_disks();
        writeln!(out, "State {}", game.moves_applied())?;
        write!(out, "{}", game.board())?;
        writeln!(
            out,
            "\nState {}, Player {} moved, Action in cell {}",
            next.moves_applied(),
            game.turn(),
            pos
        )?;
        write!(out, "{}", next.board())?;
        writeln!(
            out,
            "Result - Player black: {black}, Player white: {white}, Total: {}",
            black + white
        )?;
        writeln!(out, "\n{}\n", "=".repeat(SECTION_RULE))?;
    }
    Ok(())
}

/// Show the board before each of the first `shown_moves` first-legal moves,
/// then finish the game silently and show the final board.
pub fn methodical<W: Write>(out: &mut W, shown_moves: usize) -> Result<GameOutcome> {
    let mut game = GameSession::new();
    for _ in 0..shown_moves {
        write!(out, "{}", game.board())?;
        writeln!(out, "{}", "-".repeat(STEP_RULE))?;
        if !game.first_step() {
            break;
        }
    }

    while !game.is_terminal() {
        if !game.first_step() {
            break;
        }
    }

    write!(out, "{}", game.board())?;
    let outcome = GameOutcome::of(&game);
    write_outcome(out, &outcome)?;
    Ok(outcome)
}

/// Both sides play the engine's move until the game ends.
pub fn ai_game<W: Write>(out: &mut W, engine: &mut AIEngine) -> Result<GameOutcome> {
    let mut game = GameSession::new();
    info!(depth = engine.max_depth(), "starting engine self-play");

    while !game.is_terminal() {
        let Some(pos) = engine.get_move(&game) else {
            break;
        };
        if !game.step(pos) {
            return Err(Error::IllegalMove { pos });
        }
        debug!(moves = game.moves_applied(), "engine move applied");
    }

    write!(out, "{}", game.board())?;
    let outcome = GameOutcome::of(&game);
    write_outcome(out, &outcome)?;
    Ok(outcome)
}

/// Replay `moves` from the initial position.
pub fn replay(moves: &[Pos]) -> Result<GameSession> {
    let mut game = GameSession::new();
    for &pos in moves {
        if !game.step(pos) {
            return Err(Error::IllegalMove { pos });
        }
    }
    Ok(game)
}

/// Replay `moves`, then report the engine's choice for the player to move.
pub fn best_move<W: Write>(
    out: &mut W,
    engine: &mut AIEngine,
    moves: &[Pos],
) -> Result<MoveResult> {
    let game = replay(moves)?;
    write!(out, "{}", game.board().render_with_coords())?;

    let result = engine.get_move_with_stats(&game);
    match result.best_move {
        Some(pos) => writeln!(
            out,
            "Player {} best move: {pos}, value {:.4} (depth {}, {} nodes, {} ms)",
            game.turn(),
            result.score,
            result.depth,
            result.nodes,
            result.time_ms
        )?,
        None => writeln!(out, "No legal move: game over, value {:.4}", result.score)?,
    }
    Ok(result)
}

fn write_outcome<W: Write>(out: &mut W, outcome: &GameOutcome) -> Result<()> {
    writeln!(
        out,
        "Result - Player black: {}, Player white: {}, Total: {}, Winner: {}",
        outcome.black,
        outcome.white,
        outcome.black + outcome.white,
        outcome.winner()
    )?;
    Ok(())
}
