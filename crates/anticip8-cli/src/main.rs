use clap::Parser;

use anticip8_cli::{load_config, run, Cli, Session};
use anticip8_observability::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config.observability);

    let session = Session::open(&cli, config)?;
    let output = run(&cli, &session)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
