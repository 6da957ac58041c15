//! Life Grid - Game of Life on a fixed square board

pub mod automaton;
pub mod core;
pub mod graph;
pub mod montecarlo;
pub mod simulation;
