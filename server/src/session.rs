//! Per-connection puzzle session state machine
//!
//! A session walks one client through rounds of board presentation,
//! timeout-bounded input collection, and verification:
//! - Generate boards until the GF(2) solver confirms one is clearable
//! - Present the board and prompt for a solution line
//! - Verify by replaying the submitted presses against a board copy
//! - Win ends the session; timeouts and wrong answers start a new round
//!
//! The loop is written against generic buffered reader/writer halves, so
//! the same code runs over a TCP socket in production and an in-memory
//! duplex pipe in tests.

use std::io;
use std::ops::RangeInclusive;
use std::time::Duration;

use log::{debug, info};
use puzzle::{check_solution, parse_glyphs, solve, Board};
use rand::Rng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;

/// Instructional banner sent once per connection, before the first round.
pub const BANNER: &str = concat!(
    "\nWelcome to Lights Out!\n",
    "\nThe goal of the game is to turn off all the lights on the board.\n",
    "You can toggle any light by entering its position in a string format,\n",
    "where # represents ON and . represents OFF.\n",
    "Each toggle will also flip the state of its adjacent lights ",
    "(above, below, left, right).\n",
    "Try to turn off all the lights to win!\n",
    "\nEnter your solution as a string of #s and .s for ALL board positions, ",
    "read from left to right, top to bottom (e.g., ..##...#.)\n",
    "\nEXAMPLE\n",
    "To solve the board:\n\n",
    "\t###\n\t#.#\n\t.##\n\n",
    "Your solution would be: ..##...#.\n\n\n",
);

/// Label preceding each round's board grid.
pub const BOARD_HEADER: &str = "\nLights Out Board:\n\n";
/// Prompt that closes each round's presentation.
pub const SOLUTION_PROMPT: &str = "\nYour Solution: ";
/// Notice sent when the input deadline passes.
pub const TIMEOUT_NOTICE: &str = "\n\nTime out. Generating a new board...\n";
/// Notice sent for a wrong (or wrongly sized) submission.
pub const INCORRECT_NOTICE: &str = "\n\nIncorrect solution. Generating a new board...\n";

/// Tunables for a session, shared by every connection of one server.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Inclusive range the board edge length is drawn from each round.
    pub board_sizes: RangeInclusive<usize>,
    /// How long the client may take to answer one board.
    pub input_timeout: Duration,
    /// Payload sent to a client that clears a board.
    pub flag: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board_sizes: 15..=25,
            input_timeout: Duration::from_secs(10),
            flag: "corctf{freshman_math_class_throwback}".to_string(),
        }
    }
}

/// Runs one puzzle session to completion.
///
/// Returns `Ok(())` when the client wins or closes the connection; I/O
/// errors on the transport propagate to the caller. The loop never ends on
/// its own - there is no round counter and no attempt limit.
pub async fn run_session<R, W, G>(
    config: &SessionConfig,
    rng: &mut G,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    G: Rng,
{
    writer.write_all(BANNER.as_bytes()).await?;
    writer.flush().await?;

    loop {
        let board = next_solvable_board(config, rng);

        writer.write_all(BOARD_HEADER.as_bytes()).await?;
        writer.write_all(board.render().as_bytes()).await?;
        writer.write_all(SOLUTION_PROMPT.as_bytes()).await?;
        writer.flush().await?;

        let mut line = Vec::new();
        let read = match timeout(config.input_timeout, reader.read_until(b'\n', &mut line)).await {
            Err(_elapsed) => {
                // Late answers are not an error; the round just ends.
                writer.write_all(TIMEOUT_NOTICE.as_bytes()).await?;
                writer.flush().await?;
                continue;
            }
            Ok(result) => result?,
        };
        if read == 0 {
            debug!("client closed the connection mid-session");
            return Ok(());
        }

        // Lossy decode keeps arbitrary bytes on the "counts as off" path
        // instead of killing the session.
        let text = String::from_utf8_lossy(&line);
        let submission = parse_glyphs(text.trim());

        if check_solution(&board, &submission) {
            info!("client solved the {0}x{0} board", board.size());
            writer
                .write_all(format!("\n{}\n", config.flag).as_bytes())
                .await?;
            writer.flush().await?;
            return Ok(());
        }

        writer.write_all(INCORRECT_NOTICE.as_bytes()).await?;
        writer.flush().await?;
    }
}

/// Draws random boards until one admits a solution.
///
/// Unsolvable boards are an expected fraction of the draw, not a fault;
/// they are discarded without the client ever seeing them.
fn next_solvable_board(config: &SessionConfig, rng: &mut impl Rng) -> Board {
    loop {
        let n = rng.gen_range(config.board_sizes.clone());
        let board = Board::random(n, rng);
        if solve(&board).is_some() {
            return board;
        }
        debug!("discarded unsolvable {0}x{0} board", n);
    }
}
