use std::process::ExitCode;

use clap::Parser;
use kaspa_block_checker::config::{Args, Config};
use kaspa_block_checker::{BlockInspector, JsonRpcClient};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    // logging goes to stderr, the report to stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    match run(args).await {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<kaspa_block_checker::BlockReport> {
    let config = Config::try_from(args)?;
    let rpc = JsonRpcClient::new(config.rpc_url.clone())?;
    tracing::debug!(url = rpc.url(), network = %config.network, "connecting to node");

    let inspector =
        BlockInspector::new(rpc, config.network).check_all_children(config.check_all_children);
    inspector.inspect(&config.block_hash).await
}
