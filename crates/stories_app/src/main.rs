mod app;
mod cli;
mod effects;
mod input;
mod render;

use std::path::Path;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    anyhow::ensure!(
        stories_logging::initialize(&cli.log_settings()),
        "a global logger is already installed"
    );

    app::run(app::AppConfig {
        endpoint: cli.endpoint.clone(),
        state_file: cli.state_file().map(Path::to_path_buf),
        fetch: cli.fetch_settings(),
    })
}
