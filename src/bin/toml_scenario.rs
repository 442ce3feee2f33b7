use anyhow::Context;
use clap::Parser;
use simuduck::utils::{logger, validation::Validate};
use simuduck::{ScenarioConfig, Simulator};

#[derive(Parser)]
#[command(name = "toml-scenario")]
#[command(about = "Run a duck scenario described in a TOML file")]
struct Args {
    /// Path to TOML scenario file
    #[arg(short, long, default_value = "scenario.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - list the steps without running them
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML scenario runner");
    tracing::info!("📁 Loading scenario from: {}", args.config);

    let config = match ScenarioConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load scenario file '{}': {}", args.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Scenario validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Scenario '{}' loaded and validated", config.display_name());

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No duck will be harmed");
        print_plan(&config);
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = Simulator::new(config.to_scenario())
        .run(&mut out)
        .context("scenario run failed")?;

    tracing::info!(
        "📊 {} steps, {} swaps, final behaviors: {} / {}",
        summary.steps_run,
        summary.swaps,
        summary.fly_behavior,
        summary.quack_behavior
    );

    Ok(())
}

fn print_plan(config: &ScenarioConfig) {
    for line in config.plan_lines() {
        println!("{}", line);
    }
}
