use macgen_isa::Reg;

/// Resolves logical register roles to addressable register names.
///
/// Owned by the register-allocation layer of the kernel writer; the emitter
/// treats every returned name as opaque text and only substitutes it into
/// instruction operands.
pub trait RegisterMap {
    /// Accumulator element at tile position (idx0, idx1).
    fn acc(&self, idx0: u32, idx1: u32) -> Reg;
    /// A-operand value register for the given unroll group, inner-unroll
    /// iteration and element offset.
    fn value_a(&self, group: u32, iter: u32, offset: u32) -> Reg;
    /// B-operand value register, same addressing as [`Self::value_a`].
    fn value_b(&self, group: u32, iter: u32, offset: u32) -> Reg;
    /// Scratch vgpr reused by every canonicalization step.
    fn xdl_tmp(&self) -> Reg;
    /// Vgpr preloaded with the rounding increment.
    fn xdl_inc(&self) -> Reg;
    /// Vgpr preloaded with the canonical quiet NaN.
    fn xdl_nan(&self) -> Reg;
    /// Sgpr pair receiving the NaN predicate mask.
    fn xdl_mask(&self) -> Reg;
}

/// Register names as the assembly kernel writer spells them.
#[derive(new, Clone, Copy, Debug)]
pub struct GcnRegisterMap {
    /// First tile dimension, the accumulator row stride.
    tile0: u32,
}

impl RegisterMap for GcnRegisterMap {
    fn acc(&self, idx0: u32, idx1: u32) -> Reg {
        Reg::from(format!("v[vgprValuC + {idx0} + {idx1}*{}]", self.tile0))
    }

    fn value_a(&self, group: u32, iter: u32, offset: u32) -> Reg {
        Reg::from(format!("v[vgprValuA_X{group}_I{iter} + {offset}]"))
    }

    fn value_b(&self, group: u32, iter: u32, offset: u32) -> Reg {
        Reg::from(format!("v[vgprValuB_X{group}_I{iter} + {offset}]"))
    }

    fn xdl_tmp(&self) -> Reg {
        Reg::from("v[vgprMacXdlF32Tmp]")
    }

    fn xdl_inc(&self) -> Reg {
        Reg::from("v[vgprMacXdlF32Inc]")
    }

    fn xdl_nan(&self) -> Reg {
        Reg::from("v[vgprMacXdlF32Nan]")
    }

    fn xdl_mask(&self) -> Reg {
        Reg::from("s[sgprMacXdlF32MaskTmp:sgprMacXdlF32MaskTmp+1]")
    }
}
