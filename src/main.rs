// Inherit lint configuration from lib.rs for consistency
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::needless_pass_by_value
)]

use clap::Parser;

use profile_api::cli::commands::{Cli, Command};
use profile_api::cli::output;
use profile_api::config::Config;
use profile_api::operations::{self, BuildRequest};
use profile_api::publish::{self, PublishOptions};

fn main() {
    // Logs go to stderr; stdout carries the JSON result
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CmdResult {
    match cli.command {
        Command::Build {
            input,
            output,
            date,
        } => cmd_build(input.as_deref(), output.as_deref(), date.as_deref()),
        Command::Check { input } => cmd_check(input.as_deref()),
        Command::Show {
            endpoint,
            input,
            date,
        } => cmd_show(&endpoint, input.as_deref(), date.as_deref()),
        Command::Template { output, force } => cmd_template(output.as_deref(), force),
    }
}

type CmdResult = Result<(), Box<dyn std::fmt::Display>>;

fn map_err(e: impl std::fmt::Display + 'static) -> Box<dyn std::fmt::Display> {
    Box::new(e.to_string())
}

fn get_config() -> Result<Config, Box<dyn std::fmt::Display>> {
    Config::from_cwd().map_err(map_err)
}

fn resolve_date(date: Option<&str>) -> Result<chrono::NaiveDate, Box<dyn std::fmt::Display>> {
    match date {
        Some(value) => publish::parse_date(value).map_err(map_err),
        None => Ok(publish::today()),
    }
}

fn cmd_build(input: Option<&str>, output_dir: Option<&str>, date: Option<&str>) -> CmdResult {
    let config = get_config()?;
    let request = BuildRequest {
        input: config.input_path(input),
        output_dir: config.output_dir(output_dir),
        version: config.version().to_string(),
        last_updated: resolve_date(date)?,
        pretty: config.pretty(),
    };

    let result = operations::build(&request).map_err(map_err)?;
    println!("{}", output::format_json(&result));
    Ok(())
}

fn cmd_check(input: Option<&str>) -> CmdResult {
    let config = get_config()?;
    let result = operations::check(&config.input_path(input)).map_err(map_err)?;
    println!("{}", output::format_json(&result));
    Ok(())
}

fn cmd_show(endpoint: &str, input: Option<&str>, date: Option<&str>) -> CmdResult {
    let config = get_config()?;
    let opts = PublishOptions::new(config.version(), resolve_date(date)?, config.pretty());
    let json = operations::show(&config.input_path(input), endpoint, &opts).map_err(map_err)?;
    print!("{json}");
    Ok(())
}

fn cmd_template(output_path: Option<&str>, force: bool) -> CmdResult {
    let config = get_config()?;
    let path = config.input_path(output_path);
    let result = operations::write_template(&path, force).map_err(map_err)?;
    println!("{}", output::format_json(&result));
    Ok(())
}
