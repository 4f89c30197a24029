#[macro_use]
extern crate derive_new;

mod config;
mod error;
mod mac;
mod patchup;
mod priority;
mod regmap;
mod select;

pub use config::*;
pub use error::*;
pub use mac::*;
pub use patchup::*;
pub use priority::*;
pub use regmap::*;
pub use select::*;
