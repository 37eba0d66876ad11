//! # Statistics Tests

use lc3sim_core::common::{AccessType, Anomaly};
use lc3sim_core::isa::decode::InstructionClass;
use lc3sim_core::stats::SimStats;

#[test]
fn test_new_stats_are_zero() {
    let stats = SimStats::default();
    assert_eq!(stats.instructions_retired, 0);
    assert_eq!(stats.anomalies(), 0);
}

#[test]
fn test_instruction_mix_counts_each_class() {
    let mut stats = SimStats::default();
    for class in [
        InstructionClass::Alu,
        InstructionClass::Alu,
        InstructionClass::Load,
        InstructionClass::Store,
        InstructionClass::Control,
        InstructionClass::Trap,
        InstructionClass::Ignored,
    ] {
        stats.record_instruction(class);
    }
    assert_eq!(stats.instructions_retired, 7);
    assert_eq!(stats.inst_alu, 2);
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.inst_control, 1);
    assert_eq!(stats.inst_trap, 1);
    assert_eq!(stats.inst_ignored, 1);
}

#[test]
fn test_anomalies_are_counted_by_kind() {
    let mut stats = SimStats::default();
    stats.record_anomaly(&Anomaly::OutOfRange {
        access: AccessType::Fetch,
        addr: 0,
    });
    stats.record_anomaly(&Anomaly::OutOfRange {
        access: AccessType::Write,
        addr: 0xFD00,
    });
    stats.record_anomaly(&Anomaly::StackOverflow { value: 1 });
    stats.record_anomaly(&Anomaly::ReturnOnEmptyStack);
    stats.record_anomaly(&Anomaly::InterruptReturnOnEmptyStack);

    assert_eq!(stats.oob_fetches, 1);
    assert_eq!(stats.oob_reads, 0);
    assert_eq!(stats.oob_writes, 1);
    assert_eq!(stats.stack_overflows, 1);
    assert_eq!(stats.stack_underflows, 2);
    assert_eq!(stats.anomalies(), 5);
}

#[test]
fn test_report_lists_every_section() {
    let mut stats = SimStats::default();
    stats.record_instruction(InstructionClass::Alu);
    stats.record_instruction(InstructionClass::Trap);
    stats.record_anomaly(&Anomaly::StackOverflow { value: 0x3001 });

    let report = stats.report();
    assert!(report.contains("LC-3 SIMULATION STATISTICS"));
    assert!(report.contains("sim_insts                2"));
    assert!(report.contains("INSTRUCTION MIX"));
    assert!(report.contains("  op.alu                 1 (50.00%)"));
    assert!(report.contains("  op.trap                1 (50.00%)"));
    assert!(report.contains("  op.load                0 (0.00%)"));
    assert!(report.contains("ANOMALIES"));
    assert!(report.contains("  stack.overflow         1"));
}

#[test]
fn test_report_on_empty_run_has_no_division_by_zero() {
    let report = SimStats::default().report();
    assert!(report.contains("sim_insts                0"));
    assert!(report.contains("  op.ignored             0 (0.00%)"));
    assert!(!report.contains("NaN"));
}
