use serde::{Deserialize, Serialize};

/// Which multiply-accumulate family the kernel configuration requested.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum MacFamily {
    /// Separately rounded multiply then add.
    Mac,
    /// Single-rounding fused multiply-add.
    Fma,
}

/// Per-kernel parameters of the multiply-accumulate body, decided by the
/// configuration layer and read once per emission.
///
/// Tile dimensions and hint locations come pre-validated; this crate trusts
/// them as-is.
#[derive(new, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacKernelConfig {
    pub instruction_family: MacFamily,
    /// Accumulator tile dimensions (tile0, tile1).
    pub thread_tile: (u32, u32),
    /// Canonicalize operands ahead of the arithmetic, for bit-identical NaN
    /// behavior between the matrix path and the scalar path.
    pub xdl_math_op: bool,
    /// Zero-based ordinal of the mac after which to insert an extra counter
    /// wait. `None` disables the hint.
    pub wait_location: Option<u32>,
    /// `lgkmcnt` argument of the extra wait.
    pub wait_count: u32,
    /// Zero-based ordinal of the mac after which to insert an extra barrier.
    pub sync_location: Option<u32>,
    /// Swaps which tile axis indexes the A operand vs the B operand.
    pub tile01_swapped: bool,
}

impl MacKernelConfig {
    /// Number of arithmetic instructions one emission produces.
    pub fn mac_count(&self, inner_unroll: u32) -> u32 {
        self.thread_tile.0 * self.thread_tile.1 * inner_unroll
    }
}
