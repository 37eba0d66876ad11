//! # Disassembler Tests

use lc3sim_core::isa::disasm::disassemble;
use rstest::rstest;

use crate::common::builder::instruction::*;

#[rstest]
#[case(add_imm(0, 0, -3), "add r0, r0, #-3")]
#[case(add_reg(1, 2, 3), "add r1, r2, r3")]
#[case(and_imm(4, 4, 0), "and r4, r4, #0")]
#[case(not(5, 6), "not r5, r6")]
#[case(br(0b111, -1), "brnzp #-1")]
#[case(br(0b010, 4), "brz #4")]
#[case(br(0, 4), "nop")]
#[case(ret(), "ret")]
#[case(jmp(2), "jmp r2")]
#[case(jsr(16), "jsr #16")]
#[case(jsrr(3), "jsrr r3")]
#[case(ld(1, 2), "ld r1, #2")]
#[case(ldi(1, -2), "ldi r1, #-2")]
#[case(ldr(1, 2, 3), "ldr r1, r2, #3")]
#[case(lea(0, 9), "lea r0, #9")]
#[case(st(7, 1), "st r7, #1")]
#[case(sti(7, 1), "sti r7, #1")]
#[case(str(7, 6, -1), "str r7, r6, #-1")]
#[case(rti(), "rti")]
#[case(trap(0x20), "getc")]
#[case(trap(0x21), "out")]
#[case(trap(0x22), "puts")]
#[case(trap(0x23), "in")]
#[case(trap(0x24), "putsp")]
#[case(halt(), "halt")]
#[case(trap(0x30), "trap x30")]
#[case(0xD00F, ".fill xD00F")]
fn test_disassemble(#[case] word: u16, #[case] expected: &str) {
    assert_eq!(disassemble(word), expected);
}
