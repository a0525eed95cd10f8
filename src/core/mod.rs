pub mod aliases;
pub mod cli;
pub mod context;
pub mod models;
pub mod types;
