pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod hook;
pub mod output;
pub mod runner;
pub mod simulator;
