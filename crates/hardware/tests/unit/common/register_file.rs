//! # Register File Tests
//!
//! Tests for the LC-3 general-purpose register file.

use lc3sim_core::common::RegisterFile;

#[test]
fn test_new_initializes_to_zero() {
    let regs = RegisterFile::new();
    for i in 0..8 {
        assert_eq!(regs.read(i), 0);
    }
}

#[test]
fn test_r0_is_an_ordinary_register() {
    let mut regs = RegisterFile::new();
    regs.write(0, 0xDEAD);
    assert_eq!(regs.read(0), 0xDEAD);
}

#[test]
fn test_write_all_registers() {
    let mut regs = RegisterFile::new();
    for i in 0..8 {
        regs.write(i, 0x1111 * i as u16);
    }
    for i in 0..8 {
        assert_eq!(regs.read(i), 0x1111 * i as u16);
    }
}

#[test]
fn test_index_uses_low_three_bits() {
    let mut regs = RegisterFile::new();
    regs.write(9, 0x0042);
    assert_eq!(regs.read(1), 0x0042);
}

#[test]
fn test_iter_yields_every_register_in_order() {
    let mut regs = RegisterFile::new();
    regs.write(7, 0x7777);
    let all: Vec<(usize, u16)> = regs.iter().collect();
    assert_eq!(all.len(), 8);
    assert_eq!(all[0], (0, 0));
    assert_eq!(all[7], (7, 0x7777));
}
