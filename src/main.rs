use anyhow::Context;
use bevy::app::AppExit;
use chess3d::core::{AppConfig, Cli};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, source) =
        AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    config
        .apply_cli(&cli)
        .context("invalid command-line settings")?;

    if cli.headless {
        return chess3d::headless::run(&config, &source, cli.json);
    }

    match chess3d::build_app(config, source).run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("application exited with code {}", code),
    }
}
