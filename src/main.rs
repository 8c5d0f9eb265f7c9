use clap::Parser;
use number_classifier::core::ConfigProvider;
use number_classifier::utils::{logger, validation::validate_provider};
use number_classifier::{
    adapters::server, AppError, CliConfig, NumberClassifier, NumbersApiFactProvider, TomlConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 載入配置：指定了 TOML 檔案時以檔案為主
    let config: Box<dyn ConfigProvider> = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(mut config) => {
                config.logging.verbose |= cli.verbose;
                config.logging.json |= cli.json_logs;
                Box::new(config)
            }
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => Box::new(cli.clone()),
    };

    // 初始化日誌
    logger::init_logger(config.verbose(), config.json_logs());

    tracing::info!("Starting number-classifier");
    if let Some(path) = &cli.config {
        tracing::info!("📁 Configuration loaded from: {}", path);
    }

    // 驗證配置
    if let Err(e) = validate_provider(config.as_ref()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(config.as_ref()).await {
        tracing::error!("❌ Service failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    Ok(())
}

async fn run(config: &dyn ConfigProvider) -> Result<(), AppError> {
    let facts = NumbersApiFactProvider::from_config(config)?;
    match config.fact_timeout() {
        Some(timeout) => tracing::info!(
            "Fun facts from {} (timeout {:?})",
            config.fact_api_url(),
            timeout
        ),
        None => tracing::info!("Fun facts from {} (no timeout)", config.fact_api_url()),
    }

    let app = server::router(NumberClassifier::new(facts));

    let addr = config.bind_address();
    let listener = server::bind(&addr).await?;
    tracing::info!("🚀 Listening on http://{}{}", addr, server::CLASSIFY_PATH);

    server::serve(listener, app).await
}
