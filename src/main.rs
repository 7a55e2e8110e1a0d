use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = mockbase_server::Config::load();
    mockbase_server::serve(config).await
}
