use std::fmt;
use std::io::{self, Write};

/// 飛行能力：唯一會變動的部分，所以抽成 trait
pub trait FlyBehavior: Send + Sync + fmt::Debug {
    fn fly(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// 叫聲能力；名稱由具體型別的 `Debug` 取得
pub trait QuackBehavior: Send + Sync + fmt::Debug {
    fn quack(&self, out: &mut dyn Write) -> io::Result<()>;
}
