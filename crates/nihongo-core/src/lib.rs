//! nihongo-core — Vocabulary model, answer matching, quiz engine, and tables.
//!
//! This crate holds everything the `nihongo` CLI does apart from argument
//! handling: loading and validating the verb list, grading answers, running
//! the quiz loop, and laying the vocabulary out as a table.

pub mod config;
pub mod error;
pub mod group;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod quiz;
pub mod table;
pub mod traits;
