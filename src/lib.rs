//! batch-rewrite library — ordered text substitutions over the files of one directory.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
