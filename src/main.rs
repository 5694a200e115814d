use clap::Parser;
use colored::Colorize;
use makefile_gen::cli::{self, Cli};

fn main() {
    env_logger::init();

    let args = Cli::parse();

    if let Err(e) = cli::main(&args) {
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
