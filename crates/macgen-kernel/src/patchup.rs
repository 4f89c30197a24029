use macgen_common::float::{XF32_MASK, XF32_QUIET_NAN, XF32_ROUND_BIT, XF32_ROUND_INC};
use macgen_isa::{Block, Instruction, Reg};
use serde::{Deserialize, Serialize};

use crate::RegisterMap;

/// Instructions emitted per canonicalized operand.
pub const PATCH_LEN: usize = 5;

/// Immediate constants of the operand canonicalization sequence.
///
/// Defaults come from the `xf32` storage format, so the emitted stream and
/// the host-side [`macgen_common::float::xf32`] conversion agree bit for bit.
#[derive(new, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct XdlPatch {
    /// Bit offset of the round-to-even bit.
    pub round_bit: u32,
    /// Truncation mask applied after rounding.
    pub mask: u32,
}

impl Default for XdlPatch {
    fn default() -> Self {
        Self {
            round_bit: XF32_ROUND_BIT,
            mask: XF32_MASK,
        }
    }
}

impl XdlPatch {
    /// Value the `inc` register must be preloaded with.
    pub const fn inc_value() -> u32 {
        XF32_ROUND_INC
    }

    /// Value the `nan` register must be preloaded with.
    pub const fn nan_value() -> u32 {
        XF32_QUIET_NAN
    }
}

/// Scratch and constant register slots of the canonicalization sequence,
/// reused across every operand and iteration.
#[derive(Clone, Debug)]
pub struct XdlPatchRegs {
    pub tmp: Reg,
    pub inc: Reg,
    pub nan: Reg,
    pub mask: Reg,
}

impl XdlPatchRegs {
    pub fn from_map<R: RegisterMap + ?Sized>(registers: &R) -> Self {
        Self {
            tmp: registers.xdl_tmp(),
            inc: registers.xdl_inc(),
            nan: registers.xdl_nan(),
            mask: registers.xdl_mask(),
        }
    }
}

/// Rewrite one operand into canonical form ahead of the arithmetic op.
///
/// The five steps stay in exactly this order: the add consumes the extracted
/// round bit, the select consumes the add's scratch result, and the mask
/// consumes the selected value.
pub(crate) fn emit_operand_patch(
    block: &mut Block,
    patch: &XdlPatch,
    regs: &XdlPatchRegs,
    operand: &Reg,
) {
    block.push(Instruction::CmpUnordF32 {
        mask: regs.mask.clone(),
        src: operand.clone(),
    });
    block.push(Instruction::BfeU32 {
        dst: regs.tmp.clone(),
        src: operand.clone(),
        offset: patch.round_bit,
        width: 1,
    });
    block.push(Instruction::Add3U32 {
        dst: regs.tmp.clone(),
        a: operand.clone(),
        b: regs.tmp.clone(),
        c: regs.inc.clone(),
    });
    block.push(Instruction::CndMaskB32 {
        dst: operand.clone(),
        normal: regs.tmp.clone(),
        nan: regs.nan.clone(),
        mask: regs.mask.clone(),
    });
    block.push(Instruction::AndB32 {
        dst: operand.clone(),
        mask: patch.mask,
        src: operand.clone(),
    });
}
