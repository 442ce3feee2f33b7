use crate::core::duck::Duck;
use crate::core::{Result, RunSummary, Scenario, Step};
use std::io::Write;

pub struct Simulator {
    scenario: Scenario,
}

impl Simulator {
    pub fn new(scenario: Scenario) -> Self {
        Self { scenario }
    }

    /// 建立鴨子並依序執行每個步驟，鴨子的輸出寫到 `out`
    pub fn run(&self, out: &mut dyn Write) -> Result<RunSummary> {
        let mut duck = Duck::from_kind(self.scenario.kind);
        tracing::info!(
            "🦆 Running {} duck scenario ({} steps)",
            duck.kind(),
            self.scenario.steps.len()
        );

        let mut swaps = 0;
        for (index, step) in self.scenario.steps.iter().enumerate() {
            tracing::debug!("step {}: {:?}", index + 1, step);
            match *step {
                Step::Fly => duck.perform_fly(out)?,
                Step::Quack => duck.perform_quack(out)?,
                Step::Swim => duck.swim(out)?,
                Step::Display => duck.display(out)?,
                Step::SetFly(kind) => {
                    duck.set_fly_behavior(kind.behavior());
                    swaps += 1;
                }
                Step::SetQuack(kind) => {
                    duck.set_quack_behavior(kind.behavior());
                    swaps += 1;
                }
            }
        }
        out.flush()?;

        let summary = RunSummary {
            duck: duck.kind(),
            steps_run: self.scenario.steps.len(),
            swaps,
            fly_behavior: duck.fly_behavior_name(),
            quack_behavior: duck.quack_behavior_name(),
        };
        tracing::info!(
            "✅ Scenario finished: {} swaps, now {} / {}",
            summary.swaps,
            summary.fly_behavior,
            summary.quack_behavior
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DuckKind, FlyKind, QuackKind};
    use crate::utils::error::DuckError;
    use std::io;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_default_scenario_transcript() {
        let mut out = Vec::new();
        let summary = Simulator::new(Scenario::default()).run(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Flying with wings!\nQUACK! QUACK! QUACK!\nI can't fly.\n"
        );
        assert_eq!(summary.swaps, 1);
        assert_eq!(summary.fly_behavior, "FlyNoWay");
        assert_eq!(summary.quack_behavior, "Quack");
    }

    #[test]
    fn test_quack_swap_leaves_fly_alone() {
        let scenario = Scenario::new(
            DuckKind::Mallard,
            vec![Step::SetQuack(QuackKind::Squeak), Step::Quack, Step::Fly],
        );
        let mut out = Vec::new();
        Simulator::new(scenario).run(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Squeak\nFlying with wings!\n");
    }

    #[test]
    fn test_swap_steps_write_nothing() {
        let scenario = Scenario::new(
            DuckKind::Rubber,
            vec![Step::SetFly(FlyKind::WithWings), Step::SetQuack(QuackKind::Quack)],
        );
        let mut out = Vec::new();
        let summary = Simulator::new(scenario).run(&mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(summary.swaps, 2);
        assert_eq!(summary.steps_run, 2);
    }

    #[test]
    fn test_write_failure_surfaces_as_io_error() {
        let mut out = ClosedPipe;
        let err = Simulator::new(Scenario::default())
            .run(&mut out)
            .unwrap_err();
        assert!(matches!(err, DuckError::IoError(_)));
    }

    #[test]
    fn test_mute_scenario_never_touches_sink() {
        // MuteQuack 不寫任何東西，所以關閉的 pipe 也沒問題
        let scenario = Scenario::new(DuckKind::Rubber, vec![Step::Quack, Step::Quack]);
        let mut out = ClosedPipe;
        assert!(Simulator::new(scenario).run(&mut out).is_ok());
    }
}
