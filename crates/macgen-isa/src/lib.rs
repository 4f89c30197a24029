mod instruction;
mod mnemonic;
mod target;

pub use instruction::*;
pub use mnemonic::*;
pub use target::*;
