use crate::core::{FlyBehavior, FlyKind, QuackBehavior, QuackKind};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default)]
pub struct FlyWithWings;

impl FlyBehavior for FlyWithWings {
    fn fly(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Flying with wings!")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FlyNoWay;

impl FlyBehavior for FlyNoWay {
    fn fly(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "I can't fly.")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FlyRocketPowered;

impl FlyBehavior for FlyRocketPowered {
    fn fly(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "I'm flying with a rocket!")
    }
}

/// 大聲呱呱叫
#[derive(Debug, Clone, Copy, Default)]
pub struct Quack;

impl QuackBehavior for Quack {
    fn quack(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "QUACK! QUACK! QUACK!")
    }
}

/// 不出聲，什麼都不寫
#[derive(Debug, Clone, Copy, Default)]
pub struct MuteQuack;

impl QuackBehavior for MuteQuack {
    fn quack(&self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Squeak;

impl QuackBehavior for Squeak {
    fn quack(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Squeak")
    }
}

impl FlyKind {
    pub fn behavior(self) -> Box<dyn FlyBehavior> {
        match self {
            FlyKind::WithWings => Box::new(FlyWithWings),
            FlyKind::NoWay => Box::new(FlyNoWay),
            FlyKind::RocketPowered => Box::new(FlyRocketPowered),
        }
    }
}

impl QuackKind {
    pub fn behavior(self) -> Box<dyn QuackBehavior> {
        match self {
            QuackKind::Quack => Box::new(Quack),
            QuackKind::Mute => Box::new(MuteQuack),
            QuackKind::Squeak => Box::new(Squeak),
        }
    }
}
