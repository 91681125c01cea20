//! Client-side state for the activity board.
//!
//! DESIGN
//! ======
//! State is split by concern (`activities`, `status`, `form`) and aggregated
//! in `board::BoardState`, which is the single value held by the UI signal.

pub mod activities;
pub mod board;
pub mod form;
pub mod status;
