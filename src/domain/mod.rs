pub mod ports;
pub mod rewriter;
pub mod rule;
