use anyhow::Result;
use random_uploader::config::Config;
use random_uploader::s3::S3Store;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // 加载 .env 文件
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = try_main().await {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

async fn try_main() -> Result<()> {
    // 配置解析失败时不会产生任何文件或网络副作用
    let config = Config::from_env()?;
    tracing::info!("配置解析完成: {:?}", config);

    let store = S3Store::from_env(config.region.clone()).await;

    let report = random_uploader::run(&config, &store).await?;

    println!("{}", report);
    Ok(())
}
