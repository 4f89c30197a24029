#[path = "xf32.rs"]
mod xf32_impl;

pub use xf32_impl::*;
