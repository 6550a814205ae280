//! Console output

pub mod terminal;
