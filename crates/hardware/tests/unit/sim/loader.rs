//! # Program Image Loader Tests

use std::io::Write;

use lc3sim_core::common::SimError;
use lc3sim_core::sim::ProgramImage;
use lc3sim_core::soc::Memory;
use tempfile::NamedTempFile;

#[test]
fn test_parse_base_and_body() {
    let image = ProgramImage::parse("3000\n1021\nF025\n").unwrap();
    assert_eq!(image.base, 0x3000);
    assert_eq!(image.words, vec![0x1021, 0xF025]);
}

#[test]
fn test_parse_accepts_prefix_case_and_spacing() {
    let image = ProgramImage::parse("0x3000 0XabCD\n\n  f025  \r\n").unwrap();
    assert_eq!(image.base, 0x3000);
    assert_eq!(image.words, vec![0xABCD, 0xF025]);
}

#[test]
fn test_base_only_image_has_empty_body() {
    let image = ProgramImage::parse("4000").unwrap();
    assert!(image.words.is_empty());
    let mut mem = Memory::new();
    assert_eq!(image.load_into(&mut mem).unwrap(), 0);
}

#[test]
fn test_empty_image_is_rejected() {
    assert!(matches!(ProgramImage::parse(""), Err(SimError::EmptyImage)));
    assert!(matches!(
        ProgramImage::parse(" \n\t\n"),
        Err(SimError::EmptyImage)
    ));
}

#[test]
fn test_bad_word_reports_line_and_token() {
    match ProgramImage::parse("3000\nzz12\n") {
        Err(SimError::BadWord { line, token }) => {
            assert_eq!(line, 2);
            assert_eq!(token, "zz12");
        }
        other => panic!("expected BadWord, got {other:?}"),
    }
}

#[test]
fn test_word_wider_than_sixteen_bits_is_rejected() {
    assert!(matches!(
        ProgramImage::parse("3000 10000"),
        Err(SimError::BadWord { .. })
    ));
}

#[test]
fn test_load_into_places_words() {
    let image = ProgramImage::parse("3000 1 2 3").unwrap();
    let mut mem = Memory::new();
    assert_eq!(image.load_into(&mut mem).unwrap(), 3);
    assert_eq!(mem.read(0x3000), 1);
    assert_eq!(mem.read(0x3002), 3);
}

#[test]
fn test_image_ending_at_last_word_fits() {
    let image = ProgramImage {
        base: 0x7FFF,
        words: vec![0xAAAA],
    };
    let mut mem = Memory::new();
    assert_eq!(image.load_into(&mut mem).unwrap(), 1);
    assert_eq!(mem.read(0x7FFF), 0xAAAA);
}

#[test]
fn test_image_past_end_of_memory_is_rejected() {
    let image = ProgramImage {
        base: 0x7FFF,
        words: vec![1, 2],
    };
    let mut mem = Memory::new();
    assert!(matches!(
        image.load_into(&mut mem),
        Err(SimError::ImageTooLarge {
            base: 0x7FFF,
            words: 2
        })
    ));
    assert_eq!(mem.read(0x7FFF), 0);
}

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "3000").unwrap();
    writeln!(file, "F025").unwrap();
    let image = ProgramImage::from_file(file.path()).unwrap();
    assert_eq!(image.base, 0x3000);
    assert_eq!(image.words, vec![0xF025]);
}

#[test]
fn test_missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.hex");
    match ProgramImage::from_file(&path) {
        Err(SimError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected Io, got {other:?}"),
    }
}
