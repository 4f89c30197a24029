use macgen_isa::Instruction;

/// Emits instruction-issue priority hints.
///
/// External seam: the surrounding kernel writer may coalesce or decorate
/// priority changes. Called once per arithmetic instruction for the raise and
/// exactly once after the nest for the reset.
pub trait PriorityHint {
    fn emit(&self, level: u32, comment: &str) -> Instruction;
}

/// Plain `s_setprio` rendering of priority hints.
#[derive(Clone, Copy, Debug, Default)]
pub struct SetPrio;

impl PriorityHint for SetPrio {
    fn emit(&self, level: u32, comment: &str) -> Instruction {
        Instruction::SetPriority {
            level,
            comment: comment.to_string(),
        }
    }
}
