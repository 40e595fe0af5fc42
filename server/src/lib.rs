//! # Lights Out Server Library
//!
//! This library serves the Lights Out puzzle over plain TCP. Each client
//! that connects gets its own session: the server generates a random
//! solvable board, prints it as a grid of `#` and `.` glyphs, and waits a
//! bounded amount of time for a one-line solution. Correct solutions end
//! the session with the success payload; wrong or late answers start a
//! fresh round with a newly sized board.
//!
//! ## Core Responsibilities
//!
//! ### Board Screening
//! Random boards are not always clearable. Before a board is ever shown,
//! the session runs it through the GF(2) solver in the `puzzle` crate and
//! silently regenerates until a solvable one comes up, so every puzzle a
//! client sees has at least one answer.
//!
//! ### Session Lifecycle
//! Handles the complete lifecycle of a client connection:
//! - Instructional banner on connect
//! - Round loop of board presentation and answer collection
//! - Timeout and incorrect-answer notices between rounds
//! - Clean teardown when the client disconnects or wins
//!
//! ### Verification
//! Submitted solutions are judged by replaying their toggles against the
//! presented board, not by comparison with the solver's own answer, so any
//! valid press pattern wins even on boards with multiple solutions.
//!
//! ## Architecture Design
//!
//! ### Task-per-Connection
//! The accept loop spawns one independent task per client. Sessions share
//! no mutable state - board, RNG, and buffers are owned by the task - so
//! no locking is involved and a slow or stalled client never affects the
//! others.
//!
//! ### Line-Oriented Protocol
//! All traffic is human-readable text, one solution line per round. The
//! session logic is written against generic buffered reader/writer halves
//! rather than a concrete socket type, which is what the in-memory
//! transport used by the tests plugs into.
//!
//! ## Module Organization
//!
//! ### Session Module (`session`)
//! The per-connection state machine: banner and notice text, the round
//! loop, timeout-bounded input, and the win/retry decision.
//!
//! ### Network Module (`network`)
//! TCP listener setup and the accept loop that dispatches sessions.

pub mod network;
pub mod session;
