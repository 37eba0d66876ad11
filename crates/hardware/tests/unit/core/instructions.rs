//! # Instruction Handler Tests
//!
//! One or two instructions at `0x3000`; offsets are relative to the
//! incremented PC.

use lc3sim_core::core::arch::cc::ConditionCode;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::*;
use crate::common::harness::{BASE, TestContext};

#[test]
fn test_add_immediate_scenario() {
    let mut ctx = TestContext::new().load_program(BASE, &[add_imm(0, 1, -3)]);
    ctx.set_reg(1, 5);
    ctx.step().unwrap();

    assert_eq!(ctx.get_reg(0), 2);
    let cc = ctx.cc();
    assert_eq!((cc.n(), cc.z(), cc.p()), (false, false, true));
    assert_eq!(ctx.pc(), BASE + 1);
}

#[rstest]
#[case(0x7FFF, 1, 0x8000, ConditionCode::Negative)]
#[case(0xFFFF, 1, 0x0000, ConditionCode::Zero)]
#[case(0x0001, 0x0002, 0x0003, ConditionCode::Positive)]
fn test_add_register_wraps(
    #[case] a: u16,
    #[case] b: u16,
    #[case] sum: u16,
    #[case] cc: ConditionCode,
) {
    let mut ctx = TestContext::new().load_program(BASE, &[add_reg(2, 3, 4)]);
    ctx.set_reg(3, a);
    ctx.set_reg(4, b);
    ctx.step().unwrap();
    assert_eq!(ctx.get_reg(2), sum);
    assert_eq!(ctx.cc(), cc);
}

#[test]
fn test_and_immediate_clears_register() {
    let mut ctx = TestContext::new().load_program(BASE, &[and_imm(5, 5, 0)]);
    ctx.set_reg(5, 0xBEEF);
    ctx.step().unwrap();
    assert_eq!(ctx.get_reg(5), 0);
    assert_eq!(ctx.cc(), ConditionCode::Zero);
}

#[test]
fn test_and_negative_immediate_is_sign_extended() {
    let mut ctx = TestContext::new().load_program(BASE, &[and_imm(1, 2, -16)]);
    ctx.set_reg(2, 0x1234);
    ctx.step().unwrap();
    assert_eq!(ctx.get_reg(1), 0x1230);
}

#[test]
fn test_not_complements() {
    let mut ctx = TestContext::new().load_program(BASE, &[not(0, 0)]);
    ctx.step().unwrap();
    assert_eq!(ctx.get_reg(0), 0xFFFF);
    assert_eq!(ctx.cc(), ConditionCode::Negative);
}

#[rstest]
#[case(0b010, BASE + 3)]
#[case(0b111, BASE + 3)]
#[case(0b101, BASE + 1)]
#[case(0b000, BASE + 1)]
fn test_branch_on_zero_flag(#[case] nzp: u16, #[case] target: u16) {
    let mut ctx = TestContext::new().load_program(BASE, &[br(nzp, 2)]);
    ctx.step().unwrap();
    assert_eq!(ctx.pc(), target);
}

#[test]
fn test_branch_backward() {
    let mut ctx = TestContext::new().load_program(BASE, &[br(0b111, -1)]);
    ctx.steps(3);
    assert_eq!(ctx.pc(), BASE);
}

#[test]
fn test_branch_does_not_change_flags() {
    let mut ctx = TestContext::new().load_program(BASE, &[not(0, 0), br(0b100, 5)]);
    ctx.steps(2);
    assert_eq!(ctx.pc(), BASE + 7);
    assert_eq!(ctx.cc(), ConditionCode::Negative);
}

#[test]
fn test_jmp_leaves_call_stack_alone() {
    let mut ctx = TestContext::new().load_program(BASE, &[jmp(3)]);
    ctx.set_reg(3, 0x4000);
    ctx.step().unwrap();
    assert_eq!(ctx.pc(), 0x4000);
    assert!(ctx.cpu().stack.is_empty());
}

#[test]
fn test_ld_sets_flags() {
    let mut ctx = TestContext::new().load_program(BASE, &[ld(2, 1), halt(), 0xABCD]);
    ctx.step().unwrap();
    assert_eq!(ctx.get_reg(2), 0xABCD);
    assert_eq!(ctx.cc(), ConditionCode::Negative);
}

#[test]
fn test_ldi_follows_pointer() {
    let mut ctx = TestContext::new().load_program(BASE, &[ldi(3, 1), halt(), 0x3003, 0x0042]);
    ctx.step().unwrap();
    assert_eq!(ctx.get_reg(3), 0x0042);
    assert_eq!(ctx.cc(), ConditionCode::Positive);
}

#[test]
fn test_ldr_negative_offset() {
    let mut ctx = TestContext::new().load_program(BASE, &[ldr(4, 1, -1), 0x7777]);
    ctx.set_reg(1, 0x3002);
    ctx.step().unwrap();
    assert_eq!(ctx.get_reg(4), 0x7777);
}

#[test]
fn test_lea_computes_address_without_flags() {
    let mut ctx = TestContext::new().load_program(BASE, &[not(0, 0), lea(5, -2)]);
    ctx.steps(2);
    assert_eq!(ctx.get_reg(5), BASE);
    assert_eq!(ctx.cc(), ConditionCode::Negative);
}

#[test]
fn test_st_stores_register() {
    let mut ctx = TestContext::new().load_program(BASE, &[st(2, 1), halt(), 0]);
    ctx.set_reg(2, 0xBEEF);
    ctx.step().unwrap();
    assert_eq!(ctx.read_mem(0x3002), 0xBEEF);
    assert_eq!(ctx.cc(), ConditionCode::Zero);
}

#[test]
fn test_sti_stores_through_pointer() {
    let mut ctx = TestContext::new().load_program(BASE, &[sti(2, 1), halt(), 0x4000]);
    ctx.set_reg(2, 0x1234);
    ctx.step().unwrap();
    assert_eq!(ctx.read_mem(0x4000), 0x1234);
}

#[test]
fn test_str_base_plus_offset() {
    let mut ctx = TestContext::new().load_program(BASE, &[str(2, 1, 5)]);
    ctx.set_reg(1, 0x4000);
    ctx.set_reg(2, 0x0055);
    ctx.step().unwrap();
    assert_eq!(ctx.read_mem(0x4005), 0x0055);
}

#[test]
fn test_jsr_links_and_pushes() {
    let mut ctx = TestContext::new().load_program(BASE, &[jsr(0x10)]);
    ctx.step().unwrap();
    assert_eq!(ctx.get_reg(7), BASE + 1);
    assert_eq!(ctx.pc(), BASE + 0x11);
    assert_eq!(ctx.cpu().stack.depth(), 1);
    assert_eq!(ctx.read_mem(0x2FFF), BASE + 1);
}

#[test]
fn test_jsrr_jumps_to_register() {
    let mut ctx = TestContext::new().load_program(BASE, &[jsrr(2)]);
    ctx.set_reg(2, 0x5000);
    ctx.step().unwrap();
    assert_eq!(ctx.pc(), 0x5000);
    assert_eq!(ctx.get_reg(7), BASE + 1);
}

#[test]
fn test_jsrr_through_r7_reads_the_new_link() {
    let mut ctx = TestContext::new().load_program(BASE, &[jsrr(7)]);
    ctx.set_reg(7, 0x5000);
    ctx.step().unwrap();
    assert_eq!(ctx.pc(), BASE + 1);
}

#[test]
fn test_unassigned_opcode_is_ignored() {
    let mut ctx = TestContext::new().load_program(BASE, &[0xD123]);
    ctx.set_reg(0, 9);
    ctx.step().unwrap();
    assert_eq!(ctx.pc(), BASE + 1);
    assert_eq!(ctx.get_reg(0), 9);
    assert_eq!(ctx.cpu().stats.inst_ignored, 1);
    assert_eq!(ctx.cpu().stats.instructions_retired, 1);
}

#[test]
fn test_instruction_register_holds_fetched_word() {
    let mut ctx = TestContext::new().load_program(BASE, &[add_imm(0, 0, 1)]);
    ctx.step().unwrap();
    assert_eq!(ctx.cpu().current.ir, add_imm(0, 0, 1));
}
