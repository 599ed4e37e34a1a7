use clap::{Parser, Subcommand};
use clap_complete::Shell;
use indoc::indoc;

use crate::commands::config::ConfigCommands;
use crate::commands::links::LinksArgs;
use crate::commands::render::RenderArgs;

const AFTER_HELP: &str = indoc! {"
    Configuration is read from ~/.config/gh-comments/config.yaml.
    Set GH_COMMENTS_LOG (e.g. `debug`) to see what each request decided.
"};

#[derive(Parser)]
#[command(
    name = "gh-comments",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true,
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Fetch an issue's comments and print them as a comments section
    Render(RenderArgs),

    /// Parse a pagination Link header and print its relations
    Links(LinksArgs),

    /// Configuration file tools
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
