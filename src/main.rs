use clap::Parser;
use company_search_link::utils::logger;
use company_search_link::{CliConfig, Result, SearchLinkBuilder};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌 (stderr)
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ search-link failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<()> {
    if let Some(link) = &config.decode {
        let filter = SearchLinkBuilder::default().decode(link)?;
        println!("{}", serde_json::to_string_pretty(&filter)?);
        return Ok(());
    }

    let settings = config.load_settings()?;
    tracing::debug!("Resolved settings: {:?}", settings);

    let link = SearchLinkBuilder::new(settings.base_url).build(&settings.filter)?;

    // stdout 只有這一行
    println!("{}", link);
    Ok(())
}
