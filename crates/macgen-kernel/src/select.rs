use macgen_isa::{GfxTarget, IsaCapabilities, Mnemonic};

use crate::{EmitError, MacFamily};

/// Resolve the requested instruction family into one concrete mnemonic.
///
/// The plain family always nominates `v_mac_f32`. The fused family tries
/// `v_fmac_f32` then `v_fma_f32`, in that order. Whichever candidate wins is
/// re-checked against the capability table, since the plain mnemonic may
/// itself be hardware-conditional even though it has no fallback.
///
/// Selection is invariant across the loop nest, so callers run this once per
/// emission.
pub fn select_mac_instruction(
    family: MacFamily,
    capabilities: &IsaCapabilities,
    target: &GfxTarget,
) -> Result<Mnemonic, EmitError> {
    let mut instruction = Mnemonic::VMacF32;
    if family == MacFamily::Fma {
        if capabilities.supported(Mnemonic::VFmacF32) {
            instruction = Mnemonic::VFmacF32;
        } else if capabilities.supported(Mnemonic::VFmaF32) {
            instruction = Mnemonic::VFmaF32;
        } else {
            return Err(EmitError::UnsupportedInstruction {
                mnemonic: Mnemonic::VFmaF32,
                target: target.clone(),
            });
        }
    }

    if !capabilities.supported(instruction) {
        return Err(EmitError::UnsupportedInstruction {
            mnemonic: instruction,
            target: target.clone(),
        });
    }

    Ok(instruction)
}
