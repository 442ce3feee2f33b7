use crate::core::behaviors::{FlyNoWay, FlyWithWings, MuteQuack, Quack};
use crate::core::{DuckKind, FlyBehavior, QuackBehavior, Result};
use std::io::Write;

/// 每隻鴨子剛好擁有一個飛行能力和一個叫聲能力。
/// 兩者都必須在建構時給定，所以不可能呼叫到尚未綁定的能力。
#[derive(Debug)]
pub struct Duck {
    kind: DuckKind,
    fly_behavior: Box<dyn FlyBehavior>,
    quack_behavior: Box<dyn QuackBehavior>,
}

impl Duck {
    pub fn new(
        kind: DuckKind,
        fly_behavior: Box<dyn FlyBehavior>,
        quack_behavior: Box<dyn QuackBehavior>,
    ) -> Self {
        Self {
            kind,
            fly_behavior,
            quack_behavior,
        }
    }

    /// 綠頭鴨：用翅膀飛，大聲叫
    pub fn mallard() -> Self {
        Self::new(DuckKind::Mallard, Box::new(FlyWithWings), Box::new(Quack))
    }

    /// 橡皮鴨：不會飛，也不出聲
    pub fn rubber() -> Self {
        Self::new(DuckKind::Rubber, Box::new(FlyNoWay), Box::new(MuteQuack))
    }

    /// 模型鴨：不會飛，除非換上火箭
    pub fn model() -> Self {
        Self::new(DuckKind::Model, Box::new(FlyNoWay), Box::new(Quack))
    }

    pub fn from_kind(kind: DuckKind) -> Self {
        match kind {
            DuckKind::Mallard => Self::mallard(),
            DuckKind::Rubber => Self::rubber(),
            DuckKind::Model => Self::model(),
        }
    }

    pub fn kind(&self) -> DuckKind {
        self.kind
    }

    pub fn perform_fly(&self, out: &mut dyn Write) -> Result<()> {
        self.fly_behavior.fly(out)?;
        Ok(())
    }

    pub fn perform_quack(&self, out: &mut dyn Write) -> Result<()> {
        self.quack_behavior.quack(out)?;
        Ok(())
    }

    pub fn set_fly_behavior(&mut self, behavior: Box<dyn FlyBehavior>) {
        tracing::debug!(
            "🔄 {} fly behavior: {:?} -> {:?}",
            self.kind,
            self.fly_behavior,
            behavior
        );
        self.fly_behavior = behavior;
    }

    pub fn set_quack_behavior(&mut self, behavior: Box<dyn QuackBehavior>) {
        tracing::debug!(
            "🔄 {} quack behavior: {:?} -> {:?}",
            self.kind,
            self.quack_behavior,
            behavior
        );
        self.quack_behavior = behavior;
    }

    // 所有鴨子都一樣，不委派
    pub fn swim(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "All ducks float, even decoys!")?;
        Ok(())
    }

    pub fn display(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", self.kind.description())?;
        Ok(())
    }

    /// 目前綁定的能力名稱，取自具體型別的 `Debug`
    pub fn fly_behavior_name(&self) -> String {
        format!("{:?}", self.fly_behavior)
    }

    pub fn quack_behavior_name(&self) -> String {
        format!("{:?}", self.quack_behavior)
    }
}
