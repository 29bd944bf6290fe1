use crate::*;
use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

#[test]
fn unitbuf_new() {
    assert!(CodeUnitBuf::new().units.is_empty());
    assert!(CodeUnitBuf::new().is_empty());
}

#[test]
fn unitbuf_from_str() {
    assert!(CodeUnitBuf::from_str("").units.is_empty());
    assert_eq!(
        CodeUnitBuf::from_str("aé 💩").units,
        [0x61, 0xE9, 0x20, 0xD83D, 0xDCA9]
    );
    assert_eq!(CodeUnitBuf::from(String::from("日本語")).len(), 3);
    assert_eq!("ABC".parse::<CodeUnitBuf>().unwrap().units, [0x41, 0x42, 0x43]);
}

#[test]
fn unitbuf_from_units_keeps_lone_surrogates() {
    let string = CodeUnitBuf::from_units(vec![0x41, 0xD83D]);
    assert_eq!(string.len(), 2);
    assert!(!string.is_well_formed());
    assert_eq!(string.into_units(), [0x41, 0xD83D]);
}

#[test]
fn unitbuf_push_char() {
    let mut string = CodeUnitBuf::from_str("ABC: ");
    string.push_char('💩');
    assert_eq!(string.len(), 7);
    assert!(string.is_well_formed());
}

#[test]
fn unitbuf_push_code_point() {
    fn c(value: u32) -> CodePoint {
        CodePoint::from_u32(value).unwrap()
    }

    let mut string = CodeUnitBuf::new();
    string.push(c(0x61));
    string.push(c(0x1F4A9));
    string.push(c(0xD83D));
    assert_eq!(string.units, [0x61, 0xD83D, 0xDCA9, 0xD83D]);
}

#[test]
fn unitbuf_push_low_completes_pair() {
    let mut string = CodeUnitBuf::from_str("|");
    string.push_unit(0xD83D);
    assert_eq!(string.defects().count(), 1);
    string.push_unit(0xDCA9);
    assert!(string.is_well_formed());
    assert_eq!(string.code_point_count(), 2);
}

#[test]
fn unitbuf_push_units() {
    let lone = CodeUnits::new(&[0xD83D_u16]);
    let mut string = CodeUnitBuf::from_str("|");
    string.push_units(lone);
    string.push_str("|");
    assert_eq!(string.units, [0x7C, 0xD83D, 0x7C]);
}

#[test]
fn unitbuf_truncate_may_split_pair() {
    let mut string = CodeUnitBuf::from_str("a💩");
    string.truncate(2);
    assert_eq!(string.units, [0x61, 0xD83D]);
    assert_eq!(
        string.validate().defects(),
        [Defect {
            position: 1,
            kind: DefectKind::LoneHighSurrogate
        }]
    );
}

#[test]
fn unitbuf_from_iterator() {
    let string: CodeUnitBuf = [0x41_u16, 0xDCA9].iter().copied().collect();
    assert_eq!(string.units, [0x41, 0xDCA9]);

    let string: CodeUnitBuf = "ab".chars().collect();
    assert_eq!(string.units, [0x61, 0x62]);

    let string: CodeUnitBuf = ["AB", "C"].iter().copied().collect();
    assert_eq!(string.units, [0x41, 0x42, 0x43]);

    let string: CodeUnitBuf = CodeUnits::new(&[0xD83D_u16, 0x41]).code_points().collect();
    assert_eq!(string.units, [0xD83D, 0x41]);
}

#[test]
fn unitbuf_extend() {
    let mut string = CodeUnitBuf::from_str("ABC: ");
    string.extend([0xD83D_u16, 0xDCA9]);
    assert_eq!(string.len(), 7);

    let mut string = CodeUnitBuf::new();
    string.extend(&[0xD83D_u16]);
    string.extend(['x']);
    string.extend([CodeUnits::new(&[0xDCA9_u16])]);
    assert_eq!(string.units, [0xD83D, 0x78, 0xDCA9]);
}

#[test]
fn unitbuf_to_owned_round_trip() {
    let units = CodeUnits::new(&[0x41_u16, 0xD83D]);
    let owned = units.to_owned();
    assert_eq!(owned, *units);
    let back: Vec<u16> = owned.into();
    assert_eq!(back, [0x41, 0xD83D]);
}

#[test]
fn unitbuf_debug_and_display() {
    let string = CodeUnitBuf::from_units(vec![0x41, 0x42, 0x43, 0x3A, 0x20, 0xD83D]);
    assert_eq!(format!("{:?}", string), "\"ABC: \\u{d83d}\"");
    assert_eq!(format!("{}", string), "ABC: \u{FFFD}");
}
