mod cli;
mod commands;
mod infra;
mod shared;
mod thread;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive.
const LOG_ENV: &str = "GH_COMMENTS_LOG";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Cli { log_json, command } = Cli::parse();

    init_tracing(log_json);

    match command {
        Commands::Render(args) => commands::render::run(&args)?,
        Commands::Links(args) => commands::links::run(&args)?,
        Commands::Config(config_cmd) => config_cmd.run()?,
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "gh-comments",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only the rendered output.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
