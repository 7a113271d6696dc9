//! quad: a four-quadrant priority task board.
//!
//! The core is the canonical task sequence and the placement engine that
//! recomputes it from move/reorder gestures ([`ops`]), fronted by a CLI and
//! a terminal UI. State persists as two JSON blobs in a `.quad/` data
//! directory ([`io::storage`]).

pub mod board;
pub mod cli;
pub mod io;
pub mod model;
pub mod ops;
pub mod tui;
