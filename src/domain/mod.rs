// Domain layer: 鴨子模型與能力 ports，除了呼叫端給的輸出之外不做任何 I/O

pub mod model;
pub mod ports;
