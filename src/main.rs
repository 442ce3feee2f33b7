use clap::Parser;
use simuduck::utils::{logger, validation::Validate};
use simuduck::{CliConfig, DuckError, RunSummary, Scenario, ScenarioConfig, Simulator};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting simuduck");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let scenario = match load_scenario(&config) {
        Ok(scenario) => scenario,
        Err(e) => fail(&e),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match Simulator::new(scenario).run(&mut out) {
        Ok(summary) => {
            if config.json {
                print_summary(&mut out, &summary)?;
            }
        }
        Err(e) => fail(&e),
    }

    Ok(())
}

fn load_scenario(config: &CliConfig) -> simuduck::Result<Scenario> {
    let Some(path) = &config.config else {
        return Ok(config.scenario());
    };

    tracing::info!("📁 Loading scenario from: {}", path);
    let file_config = ScenarioConfig::from_file(path)?;
    file_config.validate()?;
    tracing::info!("✅ Loaded scenario '{}'", file_config.display_name());
    Ok(file_config.to_scenario())
}

fn print_summary(out: &mut dyn Write, summary: &RunSummary) -> simuduck::Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

fn fail(e: &DuckError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(1);
}
