//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions for the fields of a 16-bit LC-3
//! instruction word and the sign-extension rule used for every immediate
//! and offset field.

/// Bit shift of the opcode field (bits 15-12).
const OPCODE_SHIFT: u16 = 12;
/// Bit mask for the opcode field after shifting.
const OPCODE_MASK: u16 = 0xF;
/// Bit shift of the destination/source register field (bits 11-9).
const DR_SHIFT: u16 = 9;
/// Bit shift of the first source / base register field (bits 8-6).
const SR1_SHIFT: u16 = 6;
/// Bit mask for any 3-bit register field.
const REG_MASK: u16 = 0x7;
/// Bit selecting immediate mode in ADD/AND (bit 5).
const IMM_MODE_BIT: u16 = 1 << 5;
/// Bit selecting the offset form of JSR (bit 11).
const JSR_MODE_BIT: u16 = 1 << 11;
/// Bit shift of the n/z/p condition field of BR (bits 11-9).
const NZP_SHIFT: u16 = 9;
/// Bit mask for the trap vector (bits 7-0).
const TRAP_VECTOR_MASK: u16 = 0xFF;

/// Width of the ADD/AND immediate field.
pub const IMM5_BITS: u32 = 5;
/// Width of the LDR/STR base offset field.
pub const OFFSET6_BITS: u32 = 6;
/// Width of the PC-relative offset field.
pub const PC_OFFSET9_BITS: u32 = 9;
/// Width of the JSR subroutine offset field.
pub const PC_OFFSET11_BITS: u32 = 11;

/// Sign-extends the low `bits` bits of `val` to a full 16-bit word.
///
/// If the field's top bit is set, the two's-complement fill for that width is
/// OR-ed into the high-order bits; otherwise the field is returned unchanged.
///
/// # Arguments
///
/// * `val` - Word containing the field in its low bits.
/// * `bits` - Field width (1-16).
///
/// # Returns
///
/// The sign-extended word.
///
/// # Examples
///
/// ```
/// use lc3sim_core::isa::instruction::sign_extend;
///
/// assert_eq!(sign_extend(0b01111, 5), 15);
/// assert_eq!(sign_extend(0b11101, 5), (-3i16) as u16);
/// ```
#[inline]
pub const fn sign_extend(val: u16, bits: u32) -> u16 {
    if bits >= 16 {
        return val;
    }
    if bits == 0 {
        return 0;
    }
    let field = val & ((1 << bits) - 1);
    if field & (1 << (bits - 1)) != 0 {
        field | (u16::MAX << bits)
    } else {
        field
    }
}

/// Trait for extracting instruction fields from encoded instructions.
///
/// Implemented for the raw `u16` instruction word. All register fields are
/// returned as indices into the register file.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 15-12).
    fn opcode(&self) -> u16;

    /// Extracts the destination (or store source) register field (bits 11-9).
    fn dr(&self) -> usize;

    /// Extracts the first source or base register field (bits 8-6).
    fn sr1(&self) -> usize;

    /// Extracts the second source register field (bits 2-0).
    fn sr2(&self) -> usize;

    /// Returns `true` when bit 5 selects the immediate operand of ADD/AND.
    fn imm_mode(&self) -> bool;

    /// Returns `true` when bit 11 selects the offset form of JSR.
    fn jsr_offset_mode(&self) -> bool;

    /// Extracts the n/z/p condition mask of BR (bits 11-9), n in bit 2.
    fn nzp(&self) -> u16;

    /// Sign-extended 5-bit immediate (bits 4-0).
    fn imm5(&self) -> u16;

    /// Sign-extended 6-bit base offset (bits 5-0).
    fn offset6(&self) -> u16;

    /// Sign-extended 9-bit PC offset (bits 8-0).
    fn pc_offset9(&self) -> u16;

    /// Sign-extended 11-bit PC offset (bits 10-0).
    fn pc_offset11(&self) -> u16;

    /// Extracts the 8-bit trap vector (bits 7-0).
    fn trap_vector(&self) -> u8;
}

impl InstructionBits for u16 {
    #[inline(always)]
    fn opcode(&self) -> u16 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn dr(&self) -> usize {
        ((self >> DR_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn sr1(&self) -> usize {
        ((self >> SR1_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn sr2(&self) -> usize {
        (self & REG_MASK) as usize
    }

    #[inline(always)]
    fn imm_mode(&self) -> bool {
        self & IMM_MODE_BIT != 0
    }

    #[inline(always)]
    fn jsr_offset_mode(&self) -> bool {
        self & JSR_MODE_BIT != 0
    }

    #[inline(always)]
    fn nzp(&self) -> u16 {
        (self >> NZP_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn imm5(&self) -> u16 {
        sign_extend(*self, IMM5_BITS)
    }

    #[inline(always)]
    fn offset6(&self) -> u16 {
        sign_extend(*self, OFFSET6_BITS)
    }

    #[inline(always)]
    fn pc_offset9(&self) -> u16 {
        sign_extend(*self, PC_OFFSET9_BITS)
    }

    #[inline(always)]
    fn pc_offset11(&self) -> u16 {
        sign_extend(*self, PC_OFFSET11_BITS)
    }

    #[inline(always)]
    fn trap_vector(&self) -> u8 {
        (self & TRAP_VECTOR_MASK) as u8
    }
}
