use crate::units::Utf16Chunk;
use crate::*;
use alloc::format;
use alloc::vec::Vec;

fn c(value: u32) -> CodePoint {
    CodePoint::from_u32(value).unwrap()
}

// "ABC: " followed by U+1F4A9 as a pair, and by its high half alone.
const PAIRED: [u16; 7] = [0x41, 0x42, 0x43, 0x3A, 0x20, 0xD83D, 0xDCA9];
const LONE: [u16; 6] = [0x41, 0x42, 0x43, 0x3A, 0x20, 0xD83D];

#[test]
fn code_units_new() {
    assert_eq!(CodeUnits::new(&PAIRED).as_slice(), &PAIRED);
    assert_eq!(CodeUnits::new(&[] as &[u16]).len(), 0);
    assert!(CodeUnits::new(&[] as &[u16]).is_empty());
    let units: &CodeUnits = PAIRED[..].as_ref();
    assert_eq!(units.len(), 7);
}

#[test]
fn code_units_len_ignores_well_formedness() {
    assert_eq!(CodeUnits::new(&PAIRED).len(), 7);
    assert_eq!(CodeUnits::new(&LONE).len(), 6);
    assert_eq!(CodeUnits::new(&[0xDCA9_u16, 0xD83D]).len(), 2);
}

#[test]
fn code_units_validate() {
    assert!(CodeUnits::new(&PAIRED).is_well_formed());
    assert_eq!(CodeUnits::new(&PAIRED).validate(), Validation::WellFormed);
    assert_eq!(
        CodeUnits::new(&LONE).defects().collect::<Vec<_>>(),
        [Defect {
            position: 5,
            kind: DefectKind::LoneHighSurrogate
        }]
    );
}

#[test]
fn code_units_index() {
    let units = CodeUnits::new(&PAIRED);
    assert_eq!(&units[..3], &[0x41_u16, 0x42, 0x43][..]);
    assert_eq!(&units[5..], &[0xD83D_u16, 0xDCA9][..]);
    // Splitting the pair leaves two lone halves.
    assert_eq!(units[..6].validate().defects()[0].kind, DefectKind::LoneHighSurrogate);
    assert_eq!(units[6..].validate().defects()[0].kind, DefectKind::LoneLowSurrogate);
}

#[test]
#[should_panic]
fn code_units_index_out_of_bounds() {
    let _ = &CodeUnits::new(&LONE)[..7];
}

#[test]
fn code_units_get() {
    let units = CodeUnits::new(&LONE);
    assert_eq!(units.get(5..).map(CodeUnits::len), Some(1));
    assert!(units.get(..7).is_none());
    assert!(units.get(4..2).is_none());
}

#[test]
fn code_units_code_points() {
    let cp: Vec<CodePoint> = CodeUnits::new(&[0x61_u16, 0xD83D, 0xDCA9, 0xDCA9])
        .code_points()
        .collect();
    assert_eq!(cp, [c(0x61), c(0x1F4A9), c(0xDCA9)]);
    assert_eq!(CodeUnits::new(&PAIRED).code_point_count(), 6);
    assert_eq!(CodeUnits::new(&LONE).code_point_count(), 6);
}

#[test]
fn code_units_code_point_indices() {
    let units = CodeUnits::new(&[0x41_u16, 0xD83D, 0xDCA9, 0xD83D, 0xDCA9, 0xD83D]);
    let indices: Vec<(usize, u32)> = units
        .code_point_indices()
        .map(|(i, c)| (i, c.to_u32()))
        .collect();
    assert_eq!(indices, [(0, 0x41), (1, 0x1F4A9), (3, 0x1F4A9), (5, 0xD83D)]);
}

#[test]
fn code_units_chunks() {
    let units = CodeUnits::new(&[0xDCA9_u16, 0x41, 0xD83D, 0xDCA9, 0xD83D, 0xD83D, 0x42]);
    let chunks: Vec<Utf16Chunk<'_>> = units.chunks().collect();
    assert_eq!(
        chunks,
        [
            Utf16Chunk::Lone(Defect {
                position: 0,
                kind: DefectKind::LoneLowSurrogate
            }),
            Utf16Chunk::WellFormed(CodeUnits::new(&[0x41_u16, 0xD83D, 0xDCA9])),
            Utf16Chunk::Lone(Defect {
                position: 4,
                kind: DefectKind::LoneHighSurrogate
            }),
            Utf16Chunk::Lone(Defect {
                position: 5,
                kind: DefectKind::LoneHighSurrogate
            }),
            Utf16Chunk::WellFormed(CodeUnits::new(&[0x42_u16])),
        ]
    );
}

#[test]
fn code_units_chunks_well_formed_is_one_run() {
    let units = CodeUnits::new(&PAIRED);
    let mut chunks = units.chunks();
    assert_eq!(chunks.next().and_then(Utf16Chunk::well_formed), Some(units));
    assert_eq!(chunks.next(), None);
    assert_eq!(CodeUnits::new(&[] as &[u16]).chunks().next(), None);
}

#[test]
fn code_units_debug() {
    assert_eq!(format!("{:?}", CodeUnits::new(&PAIRED)), "\"ABC: 💩\"");
    assert_eq!(format!("{:?}", CodeUnits::new(&LONE)), "\"ABC: \\u{d83d}\"");
    assert_eq!(format!("{:?}", CodeUnits::new(&[0x22_u16, 0xDCA9])), "\"\\\"\\u{dca9}\"");
}

#[test]
fn code_units_display() {
    assert_eq!(format!("{}", CodeUnits::new(&PAIRED)), "ABC: 💩");
    assert_eq!(format!("{}", CodeUnits::new(&LONE)), "ABC: \u{FFFD}");
}

#[test]
fn code_units_into_iter() {
    let units: Vec<u16> = CodeUnits::new(&LONE).into_iter().collect();
    assert_eq!(units, LONE);
}
