use anyhow::Result;
use clap::Parser;
use tui_snake::game::GameConfig;
use tui_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "tui-snake")]
#[command(version, about = "Classic Snake in the terminal")]
struct Cli {
    /// Grid width
    #[arg(long, default_value = "20")]
    width: usize,

    /// Grid height
    #[arg(long, default_value = "20")]
    height: usize,

    /// Seed for apple placement, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.width, cli.height);

    let mut mode = HumanMode::new(config, cli.seed)?;
    mode.run().await?;

    Ok(())
}
