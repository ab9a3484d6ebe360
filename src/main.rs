//! repl-router demo: an interactive shell with two routers.

mod cli;

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use cli::Cli;
use repl_router::app::App;
use repl_router::commands::{defaults, Command, Flag, Response, ResponseStatus, Router};
use repl_router::config::AppConfig;
use repl_router::error::RegistrationError;
use repl_router::logging;
use tracing::{error, info};

fn main() {
    logging::init_stderr_logging();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = AppConfig::load_from_file(&config_path)?;

    let mut app = App::builder(config)
        .router(deploy_router()?)
        .router(info_router()?)
        .build()
        .context("Invalid command wiring")?;

    let stdout = io::stdout();
    match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Cannot open script {}", path.display()))?;
            app.run(BufReader::new(file), stdout.lock())?;
        }
        None => app.run(io::stdin().lock(), stdout.lock())?,
    }

    Ok(())
}

fn deploy_router() -> Result<Router, RegistrationError> {
    let mut router = Router::with_title("Deployment");

    router.route(
        Command::new("deploy")
            .with_description("Deploy the service")
            .with_aliases(["ship"])
            .with_flag(Flag::new("env").with_values(["dev", "staging", "prod"]))
            .with_flag(Flag::new("force").toggle())
            .with_flag(defaults::host())
            .with_flag(defaults::port()),
        |response| {
            if report_flag_problems(response) {
                return;
            }
            let env = flag_value(response, "env").unwrap_or("dev").to_string();
            let forced = response.input_flags.get_by_name("force").is_some();
            println!("Deploying to {env}{}", if forced { " (forced)" } else { "" });
            response.data.insert("last_env", env);
        },
    )?;

    router.route(
        Command::new("rollback")
            .with_description("Roll back the last deployment"),
        |response| match response.data.get("last_env").and_then(|v| v.as_str()) {
            Some(env) => println!("Rolling back {env}"),
            None => println!("Nothing to roll back"),
        },
    )?;

    Ok(router)
}

fn info_router() -> Result<Router, RegistrationError> {
    let mut router = Router::with_title("Information");

    router.route(
        Command::new("status")
            .with_description("Show service status")
            .with_flags([defaults::all(), defaults::short_all()]),
        |response| {
            if report_flag_problems(response) {
                return;
            }
            let last = response
                .data
                .get("last_env")
                .and_then(|v| v.as_str())
                .unwrap_or("none");
            println!("Last deployment: {last}");
            if response.input_flags.valid().next().is_some() {
                println!("Handlers share state through the data bridge");
            }
        },
    )?;

    Ok(router)
}

fn flag_value<'a>(response: &'a Response<'_>, name: &str) -> Option<&'a str> {
    response.input_flags.get_by_name(name).and_then(|f| f.value())
}

/// Prints undefined and invalid flags. Returns true if any were found.
fn report_flag_problems(response: &Response<'_>) -> bool {
    if response.status == ResponseStatus::AllValid {
        return false;
    }
    for flag in response.input_flags.undefined() {
        println!("Unknown flag: {}", flag.string_entity());
    }
    for flag in response.input_flags.invalid() {
        println!(
            "Invalid value for {}: {}",
            flag.string_entity(),
            flag.value().unwrap_or("<none>")
        );
    }
    true
}
