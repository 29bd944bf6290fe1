use super::*;
use alloc::string::ToString;
use alloc::vec::Vec;

const PAIRED: [u16; 7] = [0x41, 0x42, 0x43, 0x3A, 0x20, 0xD83D, 0xDCA9];
const LONE: [u16; 6] = [0x41, 0x42, 0x43, 0x3A, 0x20, 0xD83D];

#[test]
fn describe_well_formed() {
    assert_eq!(
        describe(&PAIRED).to_string(),
        "\"ABC: 💩\" (7 code units)\n\
         \x20 code units = [0x41, 0x42, 0x43, 0x3a, 0x20, 0xd83d, 0xdca9]\n\
         \x20 well formed"
    );
}

#[test]
fn describe_lone_surrogate() {
    assert_eq!(
        describe(&LONE).to_string(),
        "\"ABC: \\u{d83d}\" (6 code units)\n\
         \x20 code units = [0x41, 0x42, 0x43, 0x3a, 0x20, 0xd83d]\n\
         \x20 malformed: 1 defect\n\
         \x20   lone high surrogate at position 5 (0xd83d)"
    );
}

#[test]
fn describe_empty() {
    assert_eq!(
        describe(&[] as &[u16]).to_string(),
        "\"\" (0 code units)\n  code units = []\n  well formed"
    );
}

#[test]
fn describe_with_code_points_and_upper_hex() {
    let options = ReportOptions {
        show_code_units: false,
        show_code_points: true,
        uppercase_hex: true,
        max_defects: None,
    };
    let report = describe(&[0x7C_u16, 0xD83D, 0xDCA9, 0xDCA9])
        .with_options(options)
        .to_string();
    assert_eq!(
        report,
        "\"|💩\\u{dca9}\" (4 code units)\n\
         \x20 U+007C '|' starts at code unit 0\n\
         \x20 U+1F4A9 '💩' starts at code unit 1\n\
         \x20 U+DCA9 starts at code unit 3\n\
         \x20 malformed: 1 defect\n\
         \x20   lone low surrogate at position 3 (0xDCA9)"
    );
}

#[test]
fn describe_caps_listed_defects() {
    let units: Vec<u16> = [0xD800_u16; 5].to_vec();
    let options = ReportOptions {
        max_defects: Some(2),
        show_code_units: false,
        ..ReportOptions::default()
    };
    let report = describe(&units).with_options(options).to_string();
    assert!(report.contains("malformed: 5 defects"));
    assert!(report.contains("position 0"));
    assert!(report.contains("position 1"));
    assert!(!report.contains("position 2"));
    assert!(report.ends_with("... and 3 more"));
}

#[test]
fn report_keeps_validation() {
    let report = describe(&LONE);
    assert_eq!(report.validation().defects().len(), 1);
    assert!(describe(&PAIRED).validation().is_well_formed());
}

#[test]
fn report_options_default() {
    let options = ReportOptions::default();
    assert!(options.show_code_units);
    assert!(!options.show_code_points);
    assert!(!options.uppercase_hex);
    assert_eq!(options.max_defects, None);
}
