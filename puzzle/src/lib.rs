//! Game logic for the Lights Out puzzle service.
//!
//! Everything in this crate is pure state and arithmetic: the board type,
//! the toggle model, the GF(2) solver used to screen generated boards, and
//! the verifier that replays a submitted solution. All arithmetic is over
//! GF(2) - addition is XOR, there is no carry. Networking and session
//! handling live in the `server` crate.

pub mod board;
pub mod solver;
pub mod verify;

pub use board::{parse_glyphs, Board, OFF_GLYPH, ON_GLYPH};
pub use solver::{build_augmented, gauss_jordan, is_solvable, solve, toggle_vectors};
pub use verify::check_solution;
