use clap::Parser;
use roadmap_server_lib::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    roadmap_server_lib::run(config).await
}
