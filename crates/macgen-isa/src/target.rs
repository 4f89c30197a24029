use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of the target compute unit generation, e.g. `gfx90a`.
///
/// Carried into error messages; never interpreted beyond its spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GfxTarget {
    name: String,
}

impl GfxTarget {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for GfxTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.starts_with("gfx") {
            return Err(format!("bad gfx target: {s}"));
        }
        Ok(Self { name: s.to_string() })
    }
}

impl Display for GfxTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
