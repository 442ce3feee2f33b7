use crate::utils::error::DuckError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum DuckKind {
    Mallard,
    Rubber,
    Model,
}

impl DuckKind {
    pub const ALL: [DuckKind; 3] = [DuckKind::Mallard, DuckKind::Rubber, DuckKind::Model];

    pub fn as_str(&self) -> &'static str {
        match self {
            DuckKind::Mallard => "mallard",
            DuckKind::Rubber => "rubber",
            DuckKind::Model => "model",
        }
    }

    /// `display` 印出的自我介紹
    pub fn description(&self) -> &'static str {
        match self {
            DuckKind::Mallard => "I'm a real Mallard duck",
            DuckKind::Rubber => "I'm a rubber duckie",
            DuckKind::Model => "I'm a model duck",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum FlyKind {
    WithWings,
    NoWay,
    RocketPowered,
}

impl FlyKind {
    pub const ALL: [FlyKind; 3] = [FlyKind::WithWings, FlyKind::NoWay, FlyKind::RocketPowered];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlyKind::WithWings => "with-wings",
            FlyKind::NoWay => "no-way",
            FlyKind::RocketPowered => "rocket-powered",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum QuackKind {
    Quack,
    Mute,
    Squeak,
}

impl QuackKind {
    pub const ALL: [QuackKind; 3] = [QuackKind::Quack, QuackKind::Mute, QuackKind::Squeak];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuackKind::Quack => "quack",
            QuackKind::Mute => "mute",
            QuackKind::Squeak => "squeak",
        }
    }
}

fn parse_kind<K: Copy>(
    field: &str,
    value: &str,
    all: &[K],
    name: fn(&K) -> &'static str,
) -> Result<K, DuckError> {
    let wanted = value.trim().to_ascii_lowercase().replace('_', "-");
    all.iter()
        .copied()
        .find(|kind| name(kind) == wanted)
        .ok_or_else(|| DuckError::InvalidConfigValueError {
            field: field.to_string(),
            value: value.to_string(),
            reason: format!(
                "Expected one of: {}",
                all.iter().map(name).collect::<Vec<_>>().join(", ")
            ),
        })
}

impl FromStr for DuckKind {
    type Err = DuckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_kind("duck", s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for FlyKind {
    type Err = DuckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_kind("fly behavior", s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for QuackKind {
    type Err = DuckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_kind("quack behavior", s, &Self::ALL, Self::as_str)
    }
}

impl fmt::Display for DuckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FlyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for QuackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 情境中的一個步驟。TOML 裡一般步驟寫成字串 (`"fly"`)，
/// 替換能力寫成 inline table (`{ set_fly = "no-way" }`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Fly,
    Quack,
    Swim,
    Display,
    SetFly(FlyKind),
    SetQuack(QuackKind),
}

impl Step {
    pub fn is_swap(&self) -> bool {
        matches!(self, Step::SetFly(_) | Step::SetQuack(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub kind: DuckKind,
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn new(kind: DuckKind, steps: Vec<Step>) -> Self {
        Self { kind, steps }
    }
}

impl Default for Scenario {
    /// 經典示範：綠頭鴨先飛、再叫，換成不會飛之後再飛一次
    fn default() -> Self {
        Self {
            kind: DuckKind::Mallard,
            steps: vec![
                Step::Fly,
                Step::Quack,
                Step::SetFly(FlyKind::NoWay),
                Step::Fly,
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub duck: DuckKind,
    pub steps_run: usize,
    pub swaps: usize,
    pub fly_behavior: String,
    pub quack_behavior: String,
}
