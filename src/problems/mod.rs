//! Ready-made problem definitions for the search engine.

pub mod latin_square;
pub mod n_queens;
