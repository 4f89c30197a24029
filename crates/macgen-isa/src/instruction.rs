use std::borrow::Cow;
use std::fmt::{Display, Write};

use crate::Mnemonic;

/// An addressable register name produced by the register-naming collaborator.
///
/// Opaque here: rendering substitutes the text verbatim, nothing parses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reg(String);

impl From<String> for Reg {
    fn from(name: String) -> Self {
        Reg(name)
    }
}

impl From<&str> for Reg {
    fn from(name: &str) -> Self {
        Reg(name.to_string())
    }
}

impl Display for Reg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One emitted instruction record. [`Display`] produces the exact assembly
/// text, without the line terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Unordered self-compare writing the NaN predicate into `mask`.
    CmpUnordF32 { mask: Reg, src: Reg },
    /// Extract `width` bits of `src` starting at `offset`.
    BfeU32 {
        dst: Reg,
        src: Reg,
        offset: u32,
        width: u32,
    },
    Add3U32 { dst: Reg, a: Reg, b: Reg, c: Reg },
    /// Select `nan` where `mask` is set, `normal` elsewhere.
    CndMaskB32 {
        dst: Reg,
        normal: Reg,
        nan: Reg,
        mask: Reg,
    },
    AndB32 { dst: Reg, mask: u32, src: Reg },
    /// One multiply-accumulate. The three-operand fused form repeats the
    /// accumulator as both input and output; the two-operand forms use it as
    /// the accumulation target only.
    Mac {
        mnemonic: Mnemonic,
        acc: Reg,
        a: Reg,
        b: Reg,
    },
    SetPriority { level: u32, comment: String },
    WaitCnt { lgkm: u32, comment: String },
    Barrier { comment: String },
    Comment(String),
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::CmpUnordF32 { mask, src } => {
                write!(f, "v_cmp_u_f32 {mask}, {src}, {src}")
            }
            Instruction::BfeU32 {
                dst,
                src,
                offset,
                width,
            } => write!(f, "v_bfe_u32 {dst}, {src}, {offset}, {width}"),
            Instruction::Add3U32 { dst, a, b, c } => {
                write!(f, "v_add3_u32 {dst}, {a}, {b}, {c}")
            }
            Instruction::CndMaskB32 {
                dst,
                normal,
                nan,
                mask,
            } => write!(f, "v_cndmask_b32 {dst}, {normal}, {nan}, {mask}"),
            Instruction::AndB32 { dst, mask, src } => {
                write!(f, "v_and_b32 {dst}, 0x{mask:x}, {src}")
            }
            Instruction::Mac {
                mnemonic: Mnemonic::VFmaF32,
                acc,
                a,
                b,
            } => write!(f, "v_fma_f32 {acc}, {a}, {b}, {acc}"),
            Instruction::Mac {
                mnemonic, acc, a, b
            } => write!(f, "{mnemonic} {acc}, {a}, {b}"),
            Instruction::SetPriority { level, comment } => {
                write!(f, "s_setprio {level} // {comment}")
            }
            Instruction::WaitCnt { lgkm, comment } => {
                write!(f, "s_waitcnt lgkmcnt({lgkm}) // {comment}")
            }
            Instruction::Barrier { comment } => write!(f, "s_barrier // {comment}"),
            Instruction::Comment(text) => write!(f, "/* {text} */"),
        }
    }
}

/// Formatting parameters owned by the host assembling the final source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsmFormat {
    /// Token appended to every emitted line.
    pub end_line: Cow<'static, str>,
}

impl Default for AsmFormat {
    fn default() -> Self {
        Self {
            end_line: Cow::Borrowed("\n"),
        }
    }
}

impl AsmFormat {
    /// Format for emission inside a single-line assembler macro body.
    pub fn inline_macro() -> Self {
        Self {
            end_line: Cow::Borrowed("\\n\n"),
        }
    }
}

/// An ordered sequence of [instructions](Instruction): the program order.
///
/// Append-only; instructions are never removed or reordered once pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    instructions: Vec<Instruction>,
}

impl Block {
    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Concatenate every instruction in emission order, terminating each line
    /// with the host's end-of-line token.
    pub fn render(&self, format: &AsmFormat) -> String {
        let mut out = String::new();
        for instruction in &self.instructions {
            // Writing to a String cannot fail.
            let _ = write!(out, "{instruction}{}", format.end_line);
        }
        out
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(&AsmFormat::default()))
    }
}
