use crate::core::{DuckKind, FlyKind, QuackKind, Scenario, Step};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "simuduck")]
#[command(about = "Run a duck through its fly and quack behaviors")]
pub struct CliConfig {
    #[arg(long, value_enum, default_value_t = DuckKind::Mallard)]
    pub duck: DuckKind,

    #[arg(long, value_enum, default_value_t = FlyKind::NoWay, help = "Fly behavior swapped in at runtime")]
    pub set_fly: FlyKind,

    #[arg(long, value_enum, help = "Quack behavior swapped in at runtime")]
    pub set_quack: Option<QuackKind>,

    #[arg(long, help = "Skip the runtime behavior swap")]
    pub no_swap: bool,

    #[arg(long, help = "Let the duck introduce itself first")]
    pub display: bool,

    #[arg(long, help = "Also make the duck swim")]
    pub swim: bool,

    #[arg(
        short,
        long,
        conflicts_with_all = ["duck", "set_fly", "set_quack", "no_swap", "display", "swim"],
        help = "Load the scenario from a TOML file instead"
    )]
    pub config: Option<String>,

    #[arg(long, help = "Print a JSON run summary after the duck output")]
    pub json: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 依命令列旗標組出情境；沒有任何旗標時就是經典示範
    pub fn scenario(&self) -> Scenario {
        let mut steps = Vec::new();
        if self.display {
            steps.push(Step::Display);
        }
        steps.push(Step::Fly);
        steps.push(Step::Quack);
        if self.swim {
            steps.push(Step::Swim);
        }
        if !self.no_swap {
            steps.push(Step::SetFly(self.set_fly));
            steps.push(Step::Fly);
            if let Some(quack) = self.set_quack {
                steps.push(Step::SetQuack(quack));
                steps.push(Step::Quack);
            }
        }
        Scenario::new(self.duck, steps)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_gives_classic_scenario() {
        let config = CliConfig::parse_from(["simuduck"]);
        assert_eq!(config.scenario(), Scenario::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags_shape_scenario() {
        let config = CliConfig::parse_from([
            "simuduck",
            "--duck",
            "model",
            "--set-fly",
            "rocket-powered",
            "--set-quack",
            "squeak",
            "--swim",
            "--display",
        ]);
        let scenario = config.scenario();
        assert_eq!(scenario.kind, DuckKind::Model);
        assert_eq!(
            scenario.steps,
            vec![
                Step::Display,
                Step::Fly,
                Step::Quack,
                Step::Swim,
                Step::SetFly(FlyKind::RocketPowered),
                Step::Fly,
                Step::SetQuack(QuackKind::Squeak),
                Step::Quack,
            ]
        );
    }

    #[test]
    fn test_no_swap_ignores_set_quack() {
        let config =
            CliConfig::parse_from(["simuduck", "--no-swap", "--set-quack", "mute"]);
        assert_eq!(config.scenario().steps, vec![Step::Fly, Step::Quack]);
    }

    #[test]
    fn test_unknown_duck_is_rejected() {
        assert!(CliConfig::try_parse_from(["simuduck", "--duck", "goose"]).is_err());
    }

    #[test]
    fn test_config_file_conflicts_with_scenario_flags() {
        let mixed = [
            vec!["--duck", "rubber"],
            vec!["--set-fly", "with-wings"],
            vec!["--set-quack", "mute"],
            vec!["--no-swap"],
            vec!["--display"],
            vec!["--swim"],
        ];
        for extra in mixed {
            let mut args = vec!["simuduck", "--config", "x.toml"];
            args.extend(extra.iter().copied());
            assert!(CliConfig::try_parse_from(args.clone()).is_err(), "{:?}", args);
        }

        let config =
            CliConfig::try_parse_from(["simuduck", "--config", "x.toml", "--json"]).unwrap();
        assert_eq!(config.config.as_deref(), Some("x.toml"));
    }

    #[test]
    fn test_empty_config_path_fails_validation() {
        let config = CliConfig::parse_from(["simuduck", "--config", ""]);
        assert!(config.validate().is_err());
    }
}
