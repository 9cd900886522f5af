#[tokio::main]
async fn main() -> anyhow::Result<()> {
    puxa_server::start().await
}
