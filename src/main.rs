use colored::Colorize;
use csv_filter::{run, PipelineConfig};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run(&PipelineConfig::default()) {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(1);
    }
}
