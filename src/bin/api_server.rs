use clap::Parser;
use fire_proximity::{api::create_router, logging::init_logger};
use tracing::info;

/// HTTP server for fire perimeter distance queries
#[derive(Debug, Parser)]
#[command(name = "api-server", version)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:3000")]
    bind: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let app = create_router();
    let listener = tokio::net::TcpListener::bind(&args.bind).await?;

    info!("fire-proximity API listening on http://{}", args.bind);
    info!("  POST /api/distance  {{latitude, longitude, ring: [[x, y], ...]}}");
    info!("  POST /api/reproject {{ring: [[x, y], ...]}}");

    axum::serve(listener, app).await
}
