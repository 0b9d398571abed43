#[tokio::main]
async fn main() -> eyre::Result<()> {
    appicons::main().await
}
