use clap::Parser;
use pokedex::domain::ports::ConfigProvider;
use pokedex::utils::validation::{validate_socket_addr, Validate};
use pokedex::utils::logger;
use pokedex::{build_lookup, create_router, AppState, CliConfig, TomlConfig};

fn load_config(cli: &CliConfig) -> pokedex::Result<Box<dyn ConfigProvider>> {
    match &cli.config {
        Some(path) => {
            tracing::info!("📄 Loading configuration from {}", path.display());
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            Ok(Box::new(config))
        }
        None => {
            cli.validate()?;
            Ok(Box::new(cli.clone()))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting pokedex v{}", env!("CARGO_PKG_VERSION"));
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Species API: {}", config.species_api_url());
    tracing::info!("Translation API: {}", config.translation_api_url());
    tracing::info!("Request timeout: {:?}", config.request_timeout());

    let lookup = build_lookup(&*config)?;
    let app = create_router(AppState::new(lookup));

    let addr = validate_socket_addr("bind", config.bind_addr())?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("✅ Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
