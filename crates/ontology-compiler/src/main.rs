#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::too_many_lines)]

use clap::Parser;

use crate::ui::{Cli, Colors, Commands, colors};

mod generator;
mod reserved;
mod ui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let colors = Colors::new(colors::colors_enabled(cli.color), colors::detect_theme(cli.theme));

  match cli.command {
    Commands::Import(command) => ui::commands::import(command, &colors, cli.verbose, cli.quiet).await?,
    Commands::Regenerate(command) => ui::commands::regenerate(command, &colors, cli.quiet).await?,
    Commands::Resolve(command) => ui::commands::resolve(command, &colors).await?,
    Commands::List(command) => ui::commands::list(command, &colors).await?,
    Commands::Install(command) => ui::commands::install(command, &colors, cli.verbose, cli.quiet).await?,
  }

  Ok(())
}
