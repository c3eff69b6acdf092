use anyhow::Result;
use ap_typing::{utils::init_tracing, AppConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_tracing(&config.log_filter);
    ap_typing::services::bot::run_bot(&config).await
}
