use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;

use hotspot_core::DEFAULT_SERVER_PORT;

#[derive(Parser)]
#[command(name = "hotspot-server", about = "Sphere description backend for hotspot")]
struct Args {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_SERVER_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let port = listener.local_addr()?.port();
    log::info!("Server is running at http://localhost:{port}");

    hotspot_server::serve(listener).await;
    Ok(())
}
