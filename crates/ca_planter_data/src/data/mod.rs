//! Core data structures for the automaton history.

pub mod cell;
pub mod grid;
pub mod seed;
