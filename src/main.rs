use clap::Parser;
use std::sync::Arc;

use dash_boot::domain::ports::ConfigProvider;
use dash_boot::utils::{logger, validation::Validate};
use dash_boot::{BootConfig, BootLoader, BootProfile, BootState, FilePage, HttpSource, TagRenderer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = BootConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting dash-boot");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    // 驗證配置（旗標或 TOML profile）
    let settings: Box<dyn ConfigProvider> = match args.profile.as_deref() {
        Some(path) => {
            let profile = match BootProfile::from_file(path).and_then(|p| {
                p.validate()?;
                Ok(p)
            }) {
                Ok(profile) => profile,
                Err(e) => {
                    tracing::error!("❌ Profile validation failed: {}", e);
                    eprintln!("❌ {}", e);
                    std::process::exit(1);
                }
            };
            Box::new(profile)
        }
        None => {
            if let Err(e) = args.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            Box::new(args.clone())
        }
    };

    let variant = settings.variant();
    let base = url::Url::parse(settings.base_url())?;
    let specs = variant.request_specs(&base)?;
    tracing::info!("Booting the {} page with {} request(s)", variant, specs.len());

    // 提前發出啟動請求，讓網路延遲與頁面載入重疊
    let source = Arc::new(HttpSource::new());
    let boot = BootLoader::start(source, variant, specs);

    let renderer = TagRenderer::new();
    let mut page = FilePage::new(
        settings.template_path().to_string(),
        settings.output_path().to_string(),
    );

    match boot.finish(&renderer, &mut page).await {
        BootState::Rendered => {
            tracing::info!("✅ Boot cycle completed");
            println!("✅ Rendered page written to: {}", settings.output_path());
        }
        _ => {
            eprintln!(
                "❌ Boot failed; the fallback message was written to: {}",
                settings.output_path()
            );
            std::process::exit(1);
        }
    }

    Ok(())
}
