use log::debug;
use macgen_isa::{Block, GfxTarget, Instruction, IsaCapabilities};

use crate::{
    EmitError, MacKernelConfig, PriorityHint, RegisterMap, XdlPatch, XdlPatchRegs,
    emit_operand_patch, select_mac_instruction,
};

/// Emits the unrolled multiply-accumulate body for one accumulator tile.
///
/// A pure, synchronous text-generation pass: one call consumes the
/// configuration and capability snapshot and appends nothing anywhere but its
/// own output block. Parallel emissions for different configurations are
/// independent.
#[derive(new)]
pub struct MacBlockEmitter<'a, P: PriorityHint, R: RegisterMap> {
    config: &'a MacKernelConfig,
    capabilities: &'a IsaCapabilities,
    target: &'a GfxTarget,
    priority: &'a P,
    registers: &'a R,
    patch: XdlPatch,
}

impl<P: PriorityHint, R: RegisterMap> MacBlockEmitter<'_, P, R> {
    /// Emit the mac body for the given unroll group and inner unroll count.
    ///
    /// The hint-placement ordinal counts arithmetic instructions only and is
    /// local to this call; it restarts at zero on every invocation.
    pub fn emit(&self, group: u32, inner_unroll: u32) -> Result<Block, EmitError> {
        let (tile0, tile1) = self.config.thread_tile;
        let instruction = select_mac_instruction(
            self.config.instruction_family,
            self.capabilities,
            self.target,
        )?;
        debug!(
            "mac block: target={} instruction={instruction} tile={tile0}x{tile1} inner_unroll={inner_unroll}",
            self.target
        );

        let mut block = Block::default();
        block.push(Instruction::Comment(format!(
            "macs: {tile0}x{tile1} thread tile, inner unroll {inner_unroll}"
        )));

        let patch_regs = XdlPatchRegs::from_map(self.registers);
        let mut mac_idx = 0u32;

        for idx1 in 0..tile1 {
            for idx0 in 0..tile0 {
                // Exactly one tile axis indexes A, the other indexes B.
                let (a, b) = if self.config.tile01_swapped {
                    (idx0, idx1)
                } else {
                    (idx1, idx0)
                };

                if self.config.xdl_math_op {
                    // All patch-ups for the cell come ahead of all of the
                    // cell's arithmetic, not interleaved per iteration.
                    for iter in 0..inner_unroll {
                        let value_a = self.registers.value_a(group, iter, a);
                        let value_b = self.registers.value_b(group, iter, b);
                        emit_operand_patch(&mut block, &self.patch, &patch_regs, &value_a);
                        emit_operand_patch(&mut block, &self.patch, &patch_regs, &value_b);
                    }
                }

                for iter in 0..inner_unroll {
                    block.push(Instruction::Mac {
                        mnemonic: instruction,
                        acc: self.registers.acc(idx0, idx1),
                        a: self.registers.value_a(group, iter, a),
                        b: self.registers.value_b(group, iter, b),
                    });

                    block.push(
                        self.priority
                            .emit(1, "Raise priority while processing macs"),
                    );

                    // Wait before barrier when both locations name this mac.
                    if self.config.wait_location == Some(mac_idx) {
                        block.push(Instruction::WaitCnt {
                            lgkm: self.config.wait_count,
                            comment: "extra wait for performance".to_string(),
                        });
                    }
                    if self.config.sync_location == Some(mac_idx) {
                        block.push(Instruction::Barrier {
                            comment: "extra barrier for performance".to_string(),
                        });
                    }
                    mac_idx += 1;
                }
            }
        }

        block.push(self.priority.emit(0, "Reset priority after macs"));

        Ok(block)
    }
}
