use scopeunit::unit::{self, INVALID_UNIT};
use scopeunit::{Unit, UnitError, UnitKind};

#[test]
fn test_display_strings() {
    let cases = [
        (UnitKind::Volts, 1500.0, "1.500 kV"),
        (UnitKind::Millivolts, 1.5, "1.500 mV"),
        (UnitKind::Hertz, 2_500_000_000.0, "2.500 GHz"),
        (UnitKind::Picoseconds, 5000.0, "5.000 ns"),
        (UnitKind::SampleRate, 1_000_000.0, "1 MS/s"),
        (UnitKind::LogBer, -9.0, "1e-9"),
        (UnitKind::Percent, 42.567, "42.567 %"),
    ];

    for (kind, value, expected) in cases {
        assert_eq!(unit::pretty_print(Unit::new(kind), value), expected);
        assert_eq!(Unit::from(kind).pretty_print(value), expected);
    }
}

#[test]
fn test_unknown_code_is_sentinel_not_panic() {
    for code in [13, 100, u32::MAX] {
        let unit = Unit::from_code(code);
        assert_eq!(unit.pretty_print(3.0), INVALID_UNIT);
        assert!(matches!(
            unit.try_pretty_print(3.0),
            Err(UnitError::InvalidUnit(c)) if c == code
        ));
    }
}

#[test]
fn test_parse_contract() {
    let volts = Unit::new(UnitKind::Volts);
    assert_eq!(unit::parse_string(volts, "1.5k"), 1.5);
    assert_eq!(unit::parse_string(volts, "1.5K"), 1500.0);
    assert_eq!(unit::parse_string(volts, ""), 0.0);
    assert_eq!(unit::parse_string(volts, "abc"), 0.0);

    let ps = Unit::new(UnitKind::Picoseconds);
    assert!((unit::parse_string(ps, "2.5n") - 2500.0).abs() < 1e-9);
}

#[test]
fn test_strict_parse() {
    let amps = Unit::new(UnitKind::Amps);
    assert!(unit::try_parse(amps, "").is_err());
    assert!((unit::try_parse(amps, "20 m").unwrap() - 0.02).abs() < 1e-15);

    let err = amps.try_parse("n/a").unwrap_err();
    assert_eq!(err.to_string(), "Parse error: no number in 'n/a'");
}
