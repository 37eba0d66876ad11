//! # Simulator Driver Tests
//!
//! Loading, `run`/`go` halt rules, and dump formats.

use lc3sim_core::config::Config;
use lc3sim_core::core::arch::cc::ConditionCode;
use lc3sim_core::sim::{DumpStyle, ProgramImage, RunOutcome};
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::*;
use crate::common::harness::{BASE, TestContext};

#[test]
fn test_pc_starts_at_first_image_base() {
    let mut ctx = TestContext::new();
    let images = [
        ProgramImage {
            base: 0x4000,
            words: vec![1],
        },
        ProgramImage {
            base: 0x3000,
            words: vec![2],
        },
    ];
    assert_eq!(ctx.sim.load(&images).unwrap(), vec![1, 1]);
    assert_eq!(ctx.pc(), 0x4000);
    assert_eq!(ctx.cc(), ConditionCode::Zero);
}

#[test]
fn test_later_images_overwrite_earlier() {
    let ctx = TestContext::new()
        .load_program(BASE, &[1, 2, 3])
        .load_program(0x3001, &[9]);
    assert_eq!(ctx.read_mem(0x3000), 1);
    assert_eq!(ctx.read_mem(0x3001), 9);
    assert_eq!(ctx.read_mem(0x3002), 3);
    assert_eq!(ctx.pc(), BASE);
}

#[test]
fn test_configured_start_pc_wins() {
    let mut config = Config::default();
    config.general.start_pc = Some(0x3001);
    let ctx = TestContext::with_config(&config).load_program(BASE, &[halt(), halt()]);
    assert_eq!(ctx.pc(), 0x3001);
}

#[test]
fn test_run_executes_requested_cycles() {
    let mut ctx = TestContext::new().load_program(BASE, &[add_imm(0, 0, 1); 8]);
    assert_eq!(
        ctx.sim.run(5).unwrap(),
        RunOutcome {
            cycles: 5,
            halted: false
        }
    );
    assert_eq!(ctx.get_reg(0), 5);
    assert!(!ctx.sim.is_halted());
}

#[test]
fn test_run_checks_halt_before_each_cycle() {
    let mut ctx = TestContext::new().load_program(BASE, &[halt()]);

    let first = ctx.sim.run(1).unwrap();
    assert_eq!(first, RunOutcome { cycles: 1, halted: false });
    assert!(!ctx.sim.is_halted());

    let second = ctx.sim.run(10).unwrap();
    assert_eq!(second, RunOutcome { cycles: 0, halted: true });
    assert!(ctx.sim.is_halted());
}

#[test]
fn test_halted_simulator_refuses_to_run() {
    let mut ctx = TestContext::new().load_program(BASE, &[halt()]);
    let _ = ctx.go();
    assert_eq!(
        ctx.sim.run(3).unwrap(),
        RunOutcome {
            cycles: 0,
            halted: true
        }
    );
    assert_eq!(ctx.sim.go().unwrap().cycles, 0);
    assert_eq!(ctx.cpu().stats.instructions_retired, 1);
}

#[test]
fn test_run_zero_cycles_does_nothing() {
    let mut ctx = TestContext::new().load_program(BASE, &[halt()]);
    assert_eq!(ctx.sim.run(0).unwrap().cycles, 0);
    assert_eq!(ctx.pc(), BASE);
}

#[test]
fn test_memory_dump_format() {
    let ctx = TestContext::new().load_program(BASE, &[halt(), 0x0005]);
    let expected = "\nMemory content [0x3000..0x3001] :\n\
                    -------------------------------------\n  \
                    0x3000 (12288) : 0xf025\n  \
                    0x3001 (12289) : 0x05\n\n";
    assert_eq!(
        ctx.sim.memory_dump(0x3000, 0x3001, DumpStyle::Console),
        expected
    );
}

#[test]
fn test_memory_dump_for_log_uses_single_space_indent() {
    let ctx = TestContext::new().load_program(BASE, &[halt()]);
    let expected = "\nMemory content [0x3000..0x3000] :\n\
                    -------------------------------------\n \
                    0x3000 (12288) : 0xf025\n\n";
    assert_eq!(ctx.sim.memory_dump(0x3000, 0x3000, DumpStyle::Log), expected);
}

#[test]
fn test_memory_dump_of_inverted_range_has_no_rows() {
    let ctx = TestContext::new();
    let dump = ctx.sim.memory_dump(0x3001, 0x3000, DumpStyle::Console);
    assert!(dump.starts_with("\nMemory content [0x3001..0x3000] :"));
    assert!(!dump.contains(" : 0x"));
}

#[test]
fn test_register_dump_after_halt() {
    let mut ctx = TestContext::new().load_program(BASE, &[add_imm(3, 3, -1), halt()]);
    let _ = ctx.go();
    let expected = "\nCurrent register/bus values :\n\
                    -------------------------------------\n\
                    Instruction Count : 2\n\
                    PC                : 0x0000\n\
                    CCs: N = 1  Z = 0  P = 0\n\
                    Registers:\n\
                    0: 0x0000\n\
                    1: 0x0000\n\
                    2: 0x0000\n\
                    3: 0xffff\n\
                    4: 0x0000\n\
                    5: 0x0000\n\
                    6: 0x0000\n\
                    7: 0x0000\n\n";
    assert_eq!(ctx.sim.register_dump(), expected);
}
