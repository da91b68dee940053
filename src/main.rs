use std::process;

use clap::Parser;
use log::info;
use node_list::{config::Config, selftest};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    config.validate()?;

    env_logger::Builder::new()
        .filter_level(config.level_filter()?)
        .parse_env("RUST_LOG")
        .init();

    if config.list {
        for check in selftest::CHECKS {
            println!("{}", check.name);
        }
        return Ok(());
    }

    let report = selftest::run(&config);
    info!(
        "{} passed, {} failed",
        report.passed,
        report.failures.len()
    );

    if !report.is_success() {
        for (name, reason) in &report.failures {
            eprintln!("{name}: {reason}");
        }
        process::exit(1);
    }

    Ok(())
}
