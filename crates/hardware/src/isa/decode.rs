//! LC-3 Instruction Decoder.
//!
//! This module turns a raw 16-bit instruction word into a typed [`Instruction`].
//! It extracts the opcode from bits 15-12, splits the shared JSR/JSRR opcode on
//! bit 11, sign-extends every immediate and offset field, and maps the one
//! unassigned opcode to [`Instruction::Reserved`], which executes as a no-op.

use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes;

/// Register number that turns `JMP` into `RET`.
pub const RET_BASE_REG: usize = 7;

/// Second operand of ADD/AND.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    /// Register mode: the value of SR2.
    Reg(usize),
    /// Immediate mode: the sign-extended 5-bit immediate.
    Imm(u16),
}

/// A decoded LC-3 instruction.
///
/// Offsets are already sign-extended to 16 bits; they are added to the
/// incremented PC (or a base register) with wrapping arithmetic at execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `DR = SR1 + op2`, sets condition codes.
    Add {
        /// Destination register.
        dr: usize,
        /// First source register.
        sr1: usize,
        /// Second operand.
        op2: Operand,
    },
    /// `DR = SR1 & op2`, sets condition codes.
    And {
        /// Destination register.
        dr: usize,
        /// First source register.
        sr1: usize,
        /// Second operand.
        op2: Operand,
    },
    /// Branch if any requested condition bit matches the current flags.
    Br {
        /// Requested n/z/p mask, n in bit 2.
        nzp: u16,
        /// PC-relative offset.
        offset: u16,
    },
    /// `PC = BaseR`; base register 7 is the `RET` form.
    Jmp {
        /// Base register.
        base: usize,
    },
    /// Subroutine call by PC-relative offset.
    Jsr {
        /// PC-relative offset.
        offset: u16,
    },
    /// Subroutine call through a register.
    Jsrr {
        /// Base register.
        base: usize,
    },
    /// `DR = mem[PC + offset]`, sets condition codes.
    Ld {
        /// Destination register.
        dr: usize,
        /// PC-relative offset.
        offset: u16,
    },
    /// `DR = mem[mem[PC + offset]]`, sets condition codes.
    Ldi {
        /// Destination register.
        dr: usize,
        /// PC-relative offset.
        offset: u16,
    },
    /// `DR = mem[BaseR + offset]`, sets condition codes.
    Ldr {
        /// Destination register.
        dr: usize,
        /// Base register.
        base: usize,
        /// Base offset.
        offset: u16,
    },
    /// `DR = PC + offset`; no memory access, flags untouched.
    Lea {
        /// Destination register.
        dr: usize,
        /// PC-relative offset.
        offset: u16,
    },
    /// `DR = !SR`, sets condition codes.
    Not {
        /// Destination register.
        dr: usize,
        /// Source register.
        sr: usize,
    },
    /// Pop the call stack into PC.
    Rti,
    /// `mem[PC + offset] = SR`.
    St {
        /// Source register.
        sr: usize,
        /// PC-relative offset.
        offset: u16,
    },
    /// `mem[mem[PC + offset]] = SR`.
    Sti {
        /// Source register.
        sr: usize,
        /// PC-relative offset.
        offset: u16,
    },
    /// `mem[BaseR + offset] = SR`.
    Str {
        /// Source register.
        sr: usize,
        /// Base register.
        base: usize,
        /// Base offset.
        offset: u16,
    },
    /// Built-in service call.
    Trap {
        /// Trap vector.
        vector: u8,
    },
    /// Unassigned opcode; silently ignored.
    Reserved,
}

/// Coarse instruction category used for statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstructionClass {
    /// ADD, AND, NOT, LEA.
    Alu,
    /// LD, LDI, LDR.
    Load,
    /// ST, STI, STR.
    Store,
    /// BR, JMP/RET, JSR/JSRR, RTI.
    Control,
    /// TRAP.
    Trap,
    /// Unassigned opcode.
    Ignored,
}

impl Instruction {
    /// Returns the statistics category of this instruction.
    pub const fn class(&self) -> InstructionClass {
        match self {
            Self::Add { .. } | Self::And { .. } | Self::Not { .. } | Self::Lea { .. } => {
                InstructionClass::Alu
            }
            Self::Ld { .. } | Self::Ldi { .. } | Self::Ldr { .. } => InstructionClass::Load,
            Self::St { .. } | Self::Sti { .. } | Self::Str { .. } => InstructionClass::Store,
            Self::Br { .. }
            | Self::Jmp { .. }
            | Self::Jsr { .. }
            | Self::Jsrr { .. }
            | Self::Rti => InstructionClass::Control,
            Self::Trap { .. } => InstructionClass::Trap,
            Self::Reserved => InstructionClass::Ignored,
        }
    }
}

/// Decodes a raw instruction word.
///
/// # Arguments
///
/// * `inst` - The 16-bit instruction word.
///
/// # Returns
///
/// The typed instruction. Every word decodes; the unassigned opcode yields
/// [`Instruction::Reserved`].
pub fn decode(inst: u16) -> Instruction {
    let second_operand = || {
        if inst.imm_mode() {
            Operand::Imm(inst.imm5())
        } else {
            Operand::Reg(inst.sr2())
        }
    };

    match inst.opcode() {
        opcodes::OP_BR => Instruction::Br {
            nzp: inst.nzp(),
            offset: inst.pc_offset9(),
        },
        opcodes::OP_ADD => Instruction::Add {
            dr: inst.dr(),
            sr1: inst.sr1(),
            op2: second_operand(),
        },
        opcodes::OP_LD => Instruction::Ld {
            dr: inst.dr(),
            offset: inst.pc_offset9(),
        },
        opcodes::OP_ST => Instruction::St {
            sr: inst.dr(),
            offset: inst.pc_offset9(),
        },
        opcodes::OP_JSR => {
            if inst.jsr_offset_mode() {
                Instruction::Jsr {
                    offset: inst.pc_offset11(),
                }
            } else {
                Instruction::Jsrr { base: inst.sr1() }
            }
        }
        opcodes::OP_AND => Instruction::And {
            dr: inst.dr(),
            sr1: inst.sr1(),
            op2: second_operand(),
        },
        opcodes::OP_LDR => Instruction::Ldr {
            dr: inst.dr(),
            base: inst.sr1(),
            offset: inst.offset6(),
        },
        opcodes::OP_STR => Instruction::Str {
            sr: inst.dr(),
            base: inst.sr1(),
            offset: inst.offset6(),
        },
        opcodes::OP_RTI => Instruction::Rti,
        opcodes::OP_NOT => Instruction::Not {
            dr: inst.dr(),
            sr: inst.sr1(),
        },
        opcodes::OP_LDI => Instruction::Ldi {
            dr: inst.dr(),
            offset: inst.pc_offset9(),
        },
        opcodes::OP_STI => Instruction::Sti {
            sr: inst.dr(),
            offset: inst.pc_offset9(),
        },
        opcodes::OP_JMP => Instruction::Jmp { base: inst.sr1() },
        opcodes::OP_LEA => Instruction::Lea {
            dr: inst.dr(),
            offset: inst.pc_offset9(),
        },
        opcodes::OP_TRAP => Instruction::Trap {
            vector: inst.trap_vector(),
        },
        // 0b1101 is unassigned.
        _ => Instruction::Reserved,
    }
}
