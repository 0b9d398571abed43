#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    appicons::main().await
}
