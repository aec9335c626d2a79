use std::net::SocketAddr;
use std::sync::Arc;

use catalog_api::application::http::server::http_server::{router, state};
use catalog_api::application::logger::init_logger;
use catalog_api::args::Args;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let app_state = state(args.clone()).await?;
    let router = router(app_state)?;

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;
    info!("listening on {}", addr);

    axum_server::bind(addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
