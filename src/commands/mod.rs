pub mod audit;
pub mod completions;
