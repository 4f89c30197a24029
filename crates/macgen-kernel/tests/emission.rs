use macgen_isa::{AsmFormat, GfxTarget, IsaCapabilities, Mnemonic};
use macgen_kernel::{
    GcnRegisterMap, MacBlockEmitter, MacFamily, MacKernelConfig, SetPrio, XdlPatch,
};
use pretty_assertions::assert_eq;

fn emit(config: &MacKernelConfig, capabilities: &IsaCapabilities, inner_unroll: u32) -> String {
    let target: GfxTarget = "gfx90a".parse().unwrap();
    let registers = GcnRegisterMap::new(config.thread_tile.0);
    MacBlockEmitter::new(
        config,
        capabilities,
        &target,
        &SetPrio,
        &registers,
        XdlPatch::default(),
    )
    .emit(0, inner_unroll)
    .unwrap()
    .render(&AsmFormat::default())
}

#[test]
fn canonicalized_fused_mac_with_hints() {
    let config = MacKernelConfig::new(
        MacFamily::Fma,
        (1, 1),
        true,
        Some(0),
        1,
        Some(0),
        false,
    );
    let capabilities = IsaCapabilities::new(&[
        Mnemonic::VMacF32,
        Mnemonic::VFmaF32,
        Mnemonic::VFmacF32,
    ]);

    assert_eq!(
        emit(&config, &capabilities, 1),
        "\
/* macs: 1x1 thread tile, inner unroll 1 */
v_cmp_u_f32 s[sgprMacXdlF32MaskTmp:sgprMacXdlF32MaskTmp+1], v[vgprValuA_X0_I0 + 0], v[vgprValuA_X0_I0 + 0]
v_bfe_u32 v[vgprMacXdlF32Tmp], v[vgprValuA_X0_I0 + 0], 14, 1
v_add3_u32 v[vgprMacXdlF32Tmp], v[vgprValuA_X0_I0 + 0], v[vgprMacXdlF32Tmp], v[vgprMacXdlF32Inc]
v_cndmask_b32 v[vgprValuA_X0_I0 + 0], v[vgprMacXdlF32Tmp], v[vgprMacXdlF32Nan], s[sgprMacXdlF32MaskTmp:sgprMacXdlF32MaskTmp+1]
v_and_b32 v[vgprValuA_X0_I0 + 0], 0xffffc000, v[vgprValuA_X0_I0 + 0]
v_cmp_u_f32 s[sgprMacXdlF32MaskTmp:sgprMacXdlF32MaskTmp+1], v[vgprValuB_X0_I0 + 0], v[vgprValuB_X0_I0 + 0]
v_bfe_u32 v[vgprMacXdlF32Tmp], v[vgprValuB_X0_I0 + 0], 14, 1
v_add3_u32 v[vgprMacXdlF32Tmp], v[vgprValuB_X0_I0 + 0], v[vgprMacXdlF32Tmp], v[vgprMacXdlF32Inc]
v_cndmask_b32 v[vgprValuB_X0_I0 + 0], v[vgprMacXdlF32Tmp], v[vgprMacXdlF32Nan], s[sgprMacXdlF32MaskTmp:sgprMacXdlF32MaskTmp+1]
v_and_b32 v[vgprValuB_X0_I0 + 0], 0xffffc000, v[vgprValuB_X0_I0 + 0]
v_fmac_f32 v[vgprValuC + 0 + 0*1], v[vgprValuA_X0_I0 + 0], v[vgprValuB_X0_I0 + 0]
s_setprio 1 // Raise priority while processing macs
s_waitcnt lgkmcnt(1) // extra wait for performance
s_barrier // extra barrier for performance
s_setprio 0 // Reset priority after macs
"
    );
}

#[test]
fn three_operand_fallback_repeats_the_accumulator() {
    let config = MacKernelConfig::new(MacFamily::Fma, (2, 1), false, None, 0, None, false);
    let capabilities = IsaCapabilities::new(&[Mnemonic::VMacF32, Mnemonic::VFmaF32]);

    assert_eq!(
        emit(&config, &capabilities, 1),
        "\
/* macs: 2x1 thread tile, inner unroll 1 */
v_fma_f32 v[vgprValuC + 0 + 0*2], v[vgprValuA_X0_I0 + 0], v[vgprValuB_X0_I0 + 0], v[vgprValuC + 0 + 0*2]
s_setprio 1 // Raise priority while processing macs
v_fma_f32 v[vgprValuC + 1 + 0*2], v[vgprValuA_X0_I0 + 0], v[vgprValuB_X0_I0 + 1], v[vgprValuC + 1 + 0*2]
s_setprio 1 // Raise priority while processing macs
s_setprio 0 // Reset priority after macs
"
    );
}
