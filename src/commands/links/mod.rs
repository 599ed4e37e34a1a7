use clap::Args;

use crate::infra::github::parse_link_header;

#[derive(Args, Clone, PartialEq, Eq, Debug)]
pub struct LinksArgs {
    /// Raw Link header value, e.g. '<https://api.github.com/...?page=2>; rel="next"'
    pub header: String,
}

pub fn run(args: &LinksArgs) -> anyhow::Result<()> {
    println!("{}", format_links(&args.header)?);
    Ok(())
}

/// Relations keyed by name, as pretty-printed JSON.
fn format_links(header: &str) -> anyhow::Result<String> {
    let relations = parse_link_header(header)?;
    Ok(serde_json::to_string_pretty(&relations)?)
}
