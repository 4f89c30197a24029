use macgen_isa::{GfxTarget, Mnemonic};
use thiserror::Error;

/// Fatal conditions that abort kernel generation for the current
/// configuration. There is no retry and no degraded fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmitError {
    /// No compatible encoding exists for the requested instruction family on
    /// this target.
    #[error("{mnemonic} instruction specified but not supported on {target}")]
    UnsupportedInstruction { mnemonic: Mnemonic, target: GfxTarget },
}
