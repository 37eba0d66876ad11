//! Instruction Disassembler for the LC-3.
//!
//! Converts a 16-bit instruction word into a human-readable mnemonic string
//! for debug tracing, logging, and test diagnostics. Offsets and immediates
//! are printed as signed decimal, trap vectors in LC-3 `x` hex notation.
//!
//! # Usage
//!
//! ```
//! use lc3sim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x103D), "add r0, r0, #-3");
//! assert_eq!(disassemble(0xF025), "halt");
//! ```

use crate::isa::decode::{Instruction, Operand, RET_BASE_REG, decode};
use crate::isa::vectors;

/// Register names for R0-R7.
const REG_NAMES: [&str; 8] = ["r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7"];

/// Returns the name for a register index.
#[inline]
fn reg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("r?")
}

/// Renders a sign-extended field as a signed decimal literal.
#[inline]
fn imm(val: u16) -> String {
    format!("#{}", val as i16)
}

/// Renders the second operand of ADD/AND.
fn operand(op: Operand) -> String {
    match op {
        Operand::Reg(r) => reg(r).to_string(),
        Operand::Imm(v) => imm(v),
    }
}

/// Disassembles a 16-bit LC-3 instruction into a human-readable string.
///
/// Returns a mnemonic like `"add r0, r1, r2"`; the unassigned opcode renders
/// as `".fill x...."`.
///
/// # Arguments
///
/// * `inst` - The raw 16-bit instruction word.
pub fn disassemble(inst: u16) -> String {
    match decode(inst) {
        Instruction::Add { dr, sr1, op2 } => {
            format!("add {}, {}, {}", reg(dr), reg(sr1), operand(op2))
        }
        Instruction::And { dr, sr1, op2 } => {
            format!("and {}, {}, {}", reg(dr), reg(sr1), operand(op2))
        }
        Instruction::Br { nzp: 0, .. } => "nop".to_string(),
        Instruction::Br { nzp, offset } => {
            let mut mn = String::from("br");
            if nzp & 0b100 != 0 {
                mn.push('n');
            }
            if nzp & 0b010 != 0 {
                mn.push('z');
            }
            if nzp & 0b001 != 0 {
                mn.push('p');
            }
            format!("{mn} {}", imm(offset))
        }
        Instruction::Jmp { base } if base == RET_BASE_REG => "ret".to_string(),
        Instruction::Jmp { base } => format!("jmp {}", reg(base)),
        Instruction::Jsr { offset } => format!("jsr {}", imm(offset)),
        Instruction::Jsrr { base } => format!("jsrr {}", reg(base)),
        Instruction::Ld { dr, offset } => format!("ld {}, {}", reg(dr), imm(offset)),
        Instruction::Ldi { dr, offset } => format!("ldi {}, {}", reg(dr), imm(offset)),
        Instruction::Ldr { dr, base, offset } => {
            format!("ldr {}, {}, {}", reg(dr), reg(base), imm(offset))
        }
        Instruction::Lea { dr, offset } => format!("lea {}, {}", reg(dr), imm(offset)),
        Instruction::Not { dr, sr } => format!("not {}, {}", reg(dr), reg(sr)),
        Instruction::Rti => "rti".to_string(),
        Instruction::St { sr, offset } => format!("st {}, {}", reg(sr), imm(offset)),
        Instruction::Sti { sr, offset } => format!("sti {}, {}", reg(sr), imm(offset)),
        Instruction::Str { sr, base, offset } => {
            format!("str {}, {}, {}", reg(sr), reg(base), imm(offset))
        }
        Instruction::Trap { vector } => match vector {
            vectors::GETC => "getc".to_string(),
            vectors::OUT => "out".to_string(),
            vectors::PUTS => "puts".to_string(),
            vectors::IN => "in".to_string(),
            vectors::PUTSP => "putsp".to_string(),
            vectors::HALT => "halt".to_string(),
            other => format!("trap x{other:02X}"),
        },
        Instruction::Reserved => format!(".fill x{inst:04X}"),
    }
}
