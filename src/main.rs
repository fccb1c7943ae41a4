use std::process;

use clap::Parser;
use colored::Colorize;
use kmercount::{cli::Args, config::Config, logging, run};

fn main() {
    let args = Args::parse();

    let config = Config::from_args(args).unwrap_or_else(|e| {
        eprintln!(
            "{}\n {}",
            "Problem parsing arguments:".blue().bold(),
            e.to_string().blue()
        );
        eprintln!(
            "{}\n {}",
            "Help menu:".blue().bold(),
            "$ kmercount --help".bold()
        );
        process::exit(1);
    });
    logging::init(config.log_level);

    if let Err(e) = run::run(&config) {
        eprintln!(
            "{}\n {}",
            "Application error:".blue().bold(),
            e.to_string().blue()
        );
        process::exit(1);
    }
}
