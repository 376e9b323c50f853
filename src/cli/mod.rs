//! CLI module for the registration API

pub mod serve;

use clap::{Parser, Subcommand};

/// Registration API - user registration with cascading location dropdowns
#[derive(Parser)]
#[command(name = "registration-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
