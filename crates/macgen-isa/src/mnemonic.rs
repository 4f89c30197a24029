use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The instruction encodings the emitter knows how to produce.
///
/// Capability detection reports support per concrete encoding, so two
/// semantically equivalent mnemonics are distinct variants here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Mnemonic {
    /// Multiply-accumulate with separate rounding of the product.
    VMacF32,
    /// Three-operand fused multiply-add.
    VFmaF32,
    /// Two-operand fused multiply-accumulate, destination doubles as addend.
    VFmacF32,
    /// Unordered compare, the NaN self-test.
    VCmpUF32,
    /// Bit field extract.
    VBfeU32,
    /// Three-operand add.
    VAdd3U32,
    /// Per-lane select on a condition mask.
    VCndmaskB32,
    /// Bitwise and.
    VAndB32,
    /// Instruction issue priority hint.
    SSetPrio,
    /// Counter wait barrier.
    SWaitcnt,
    /// Workgroup execution barrier.
    SBarrier,
}

impl Mnemonic {
    /// The assembly spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::VMacF32 => "v_mac_f32",
            Mnemonic::VFmaF32 => "v_fma_f32",
            Mnemonic::VFmacF32 => "v_fmac_f32",
            Mnemonic::VCmpUF32 => "v_cmp_u_f32",
            Mnemonic::VBfeU32 => "v_bfe_u32",
            Mnemonic::VAdd3U32 => "v_add3_u32",
            Mnemonic::VCndmaskB32 => "v_cndmask_b32",
            Mnemonic::VAndB32 => "v_and_b32",
            Mnemonic::SSetPrio => "s_setprio",
            Mnemonic::SWaitcnt => "s_waitcnt",
            Mnemonic::SBarrier => "s_barrier",
        }
    }
}

impl Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mnemonic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v_mac_f32" => Ok(Mnemonic::VMacF32),
            "v_fma_f32" => Ok(Mnemonic::VFmaF32),
            "v_fmac_f32" => Ok(Mnemonic::VFmacF32),
            "v_cmp_u_f32" => Ok(Mnemonic::VCmpUF32),
            "v_bfe_u32" => Ok(Mnemonic::VBfeU32),
            "v_add3_u32" => Ok(Mnemonic::VAdd3U32),
            "v_cndmask_b32" => Ok(Mnemonic::VCndmaskB32),
            "v_and_b32" => Ok(Mnemonic::VAndB32),
            "s_setprio" => Ok(Mnemonic::SSetPrio),
            "s_waitcnt" => Ok(Mnemonic::SWaitcnt),
            "s_barrier" => Ok(Mnemonic::SBarrier),
            _ => Err(format!("unknown mnemonic: {s}")),
        }
    }
}

/// Which [mnemonics](Mnemonic) the target compute unit supports.
///
/// Owned by the capability-detection layer and read-only for the duration of
/// one emission.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsaCapabilities {
    set: BTreeSet<Mnemonic>,
}

impl IsaCapabilities {
    /// Create a capability set with the given supported mnemonics.
    pub fn new(mnemonics: &[Mnemonic]) -> Self {
        let mut set = BTreeSet::new();
        for mnemonic in mnemonics {
            set.insert(*mnemonic);
        }

        IsaCapabilities { set }
    }

    /// Check if the provided [mnemonic](Mnemonic) is supported by the target.
    pub fn supported(&self, mnemonic: Mnemonic) -> bool {
        self.set.contains(&mnemonic)
    }

    /// Register a [mnemonic](Mnemonic) supported by the target.
    ///
    /// This should only be used by the capability-detection layer when
    /// initializing a target.
    pub fn register(&mut self, mnemonic: Mnemonic) -> bool {
        self.set.insert(mnemonic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Mnemonic; 11] = [
        Mnemonic::VMacF32,
        Mnemonic::VFmaF32,
        Mnemonic::VFmacF32,
        Mnemonic::VCmpUF32,
        Mnemonic::VBfeU32,
        Mnemonic::VAdd3U32,
        Mnemonic::VCndmaskB32,
        Mnemonic::VAndB32,
        Mnemonic::SSetPrio,
        Mnemonic::SWaitcnt,
        Mnemonic::SBarrier,
    ];

    #[test]
    fn spelling_round_trips() {
        for mnemonic in ALL {
            assert_eq!(mnemonic.to_string().parse::<Mnemonic>(), Ok(mnemonic));
        }
    }

    #[test]
    fn unknown_spelling_is_rejected() {
        assert!("v_mad_f32".parse::<Mnemonic>().is_err());
    }

    #[test]
    fn capability_queries() {
        let mut caps = IsaCapabilities::new(&[Mnemonic::VMacF32, Mnemonic::VFmaF32]);
        assert!(caps.supported(Mnemonic::VMacF32));
        assert!(!caps.supported(Mnemonic::VFmacF32));

        assert!(caps.register(Mnemonic::VFmacF32));
        assert!(!caps.register(Mnemonic::VFmacF32));
        assert!(caps.supported(Mnemonic::VFmacF32));
    }
}
