use crate::unit::error::UnitError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measurement domain a value belongs to.
///
/// The discriminant is the stable numeric code of the kind; codes outside this range can
/// still be carried by a [`Unit`] built with [`Unit::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnitKind {
    /// Time, stored as integer-ish picoseconds
    #[serde(rename = "ps")]
    Picoseconds = 0,
    #[serde(rename = "hz")]
    Hertz = 1,
    #[serde(rename = "samplerate")]
    SampleRate = 2,
    #[serde(rename = "sampledepth")]
    SampleDepth = 3,
    #[serde(rename = "volts")]
    Volts = 4,
    /// Already milli-scaled, never rescaled for display
    #[serde(rename = "millivolts")]
    Millivolts = 5,
    #[serde(rename = "amps")]
    Amps = 6,
    #[serde(rename = "ohms")]
    Ohms = 7,
    #[serde(rename = "bitrate")]
    Bitrate = 8,
    #[serde(rename = "percent")]
    Percent = 9,
    #[serde(rename = "db")]
    Decibels = 10,
    /// Dimensionless count
    #[serde(rename = "counts")]
    Counts = 11,
    /// log10 of a bit error rate
    #[serde(rename = "log_ber")]
    LogBer = 12,
}

/// How the display magnitude of a kind is derived from the raw value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scaling {
    /// Generic G/M/k/m ladder
    Si,
    /// Raw value, no prefix
    Raw,
    /// Ladder shifted three decades for a picosecond base unit
    Picoseconds,
}

impl UnitKind {
    pub const ALL: [UnitKind; 13] = [
        UnitKind::Picoseconds,
        UnitKind::Hertz,
        UnitKind::SampleRate,
        UnitKind::SampleDepth,
        UnitKind::Volts,
        UnitKind::Millivolts,
        UnitKind::Amps,
        UnitKind::Ohms,
        UnitKind::Bitrate,
        UnitKind::Percent,
        UnitKind::Decibels,
        UnitKind::Counts,
        UnitKind::LogBer,
    ];

    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn from_code(code: u32) -> Option<UnitKind> {
        UnitKind::ALL.get(code as usize).copied()
    }

    /// Name used on the command line and in config files
    pub fn name(self) -> &'static str {
        match self {
            UnitKind::Picoseconds => "ps",
            UnitKind::Hertz => "hz",
            UnitKind::SampleRate => "samplerate",
            UnitKind::SampleDepth => "sampledepth",
            UnitKind::Volts => "volts",
            UnitKind::Millivolts => "millivolts",
            UnitKind::Amps => "amps",
            UnitKind::Ohms => "ohms",
            UnitKind::Bitrate => "bitrate",
            UnitKind::Percent => "percent",
            UnitKind::Decibels => "db",
            UnitKind::Counts => "counts",
            UnitKind::LogBer => "log_ber",
        }
    }

    /// Unit symbol appended after the SI prefix
    pub fn suffix(self) -> &'static str {
        match self {
            UnitKind::Picoseconds => "s",
            UnitKind::Hertz => "Hz",
            UnitKind::SampleRate => "S/s",
            UnitKind::SampleDepth => "S",
            UnitKind::Volts => "V",
            UnitKind::Millivolts => "mV",
            UnitKind::Amps => "A",
            UnitKind::Ohms => "Ω",
            UnitKind::Bitrate => "bps",
            UnitKind::Percent => "%",
            UnitKind::Decibels => "dB",
            UnitKind::Counts => "",
            UnitKind::LogBer => "",
        }
    }

    pub fn scaling(self) -> Scaling {
        match self {
            UnitKind::Picoseconds => Scaling::Picoseconds,
            UnitKind::Hertz
            | UnitKind::SampleRate
            | UnitKind::SampleDepth
            | UnitKind::Volts
            | UnitKind::Amps
            | UnitKind::Ohms
            | UnitKind::Bitrate => Scaling::Si,
            UnitKind::Millivolts
            | UnitKind::Percent
            | UnitKind::Decibels
            | UnitKind::Counts
            | UnitKind::LogBer => Scaling::Raw,
        }
    }

    /// Digits after the decimal point when rendering the magnitude
    pub fn decimals(self) -> usize {
        match self {
            UnitKind::SampleRate | UnitKind::SampleDepth => 0,
            _ => 3,
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnitKind {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        UnitKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnitError::UnknownKind(wanted.to_string()))
    }
}

/// Same case-insensitive lookup as the command line
impl<'de> Deserialize<'de> for UnitKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// A unit attached to a quantity: wraps exactly one kind code.
///
/// Most callers build one from a [`UnitKind`]. Codes that arrive from outside the crate
/// (JS, config, FFI) go through [`Unit::from_code`] and may name no known kind; formatting
/// such a unit yields the `"Invalid unit"` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unit {
    code: u32,
}

impl Unit {
    pub fn new(kind: UnitKind) -> Self {
        Self { code: kind.code() }
    }

    pub fn from_code(code: u32) -> Self {
        Self { code }
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    /// `None` when the code is outside the catalog
    pub fn kind(&self) -> Option<UnitKind> {
        UnitKind::from_code(self.code)
    }
}

impl From<UnitKind> for Unit {
    fn from(kind: UnitKind) -> Self {
        Unit::new(kind)
    }
}

/// Accepts either a kind name ("volts") or a raw numeric code ("4", "99")
impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.trim().parse::<u32>() {
            return Ok(Unit::from_code(code));
        }
        s.parse::<UnitKind>().map(Unit::new)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            Some(kind) => write!(f, "{}", kind),
            None => write!(f, "unit#{}", self.code),
        }
    }
}

/// Display magnitude, SI prefix and suffix of a value, before rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaledValue {
    pub magnitude: f64,
    pub prefix: &'static str,
    pub suffix: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_catalog_order() {
        for (i, kind) in UnitKind::ALL.iter().enumerate() {
            assert_eq!(kind.code() as usize, i);
            assert_eq!(UnitKind::from_code(i as u32), Some(*kind));
        }
        assert_eq!(UnitKind::from_code(13), None);
        assert_eq!(UnitKind::from_code(u32::MAX), None);
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in UnitKind::ALL {
            assert_eq!(kind.to_string().parse::<UnitKind>().unwrap(), kind);
        }
        assert_eq!("VOLTS".parse::<UnitKind>().unwrap(), UnitKind::Volts);
        assert_eq!(" hz ".parse::<UnitKind>().unwrap(), UnitKind::Hertz);
    }

    #[test]
    fn test_unknown_kind_name() {
        let err = "furlongs".parse::<UnitKind>().unwrap_err();
        assert!(matches!(err, UnitError::UnknownKind(ref s) if s == "furlongs"));
    }

    #[test]
    fn test_kind_serde_names_match_display() {
        for kind in UnitKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
            let back: UnitKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn test_kind_deserializes_case_insensitively() {
        let kind: UnitKind = serde_json::from_str("\"Volts\"").unwrap();
        assert_eq!(kind, UnitKind::Volts);
        let kind: UnitKind = serde_json::from_str("\"LOG_BER\"").unwrap();
        assert_eq!(kind, UnitKind::LogBer);
        assert!(serde_json::from_str::<UnitKind>("\"furlongs\"").is_err());
        assert!(serde_json::from_str::<UnitKind>("4").is_err());
    }

    #[test]
    fn test_unit_from_str_accepts_name_or_code() {
        assert_eq!("volts".parse::<Unit>().unwrap(), Unit::new(UnitKind::Volts));
        assert_eq!("0".parse::<Unit>().unwrap(), Unit::new(UnitKind::Picoseconds));

        let unknown = "99".parse::<Unit>().unwrap();
        assert_eq!(unknown.code(), 99);
        assert_eq!(unknown.kind(), None);
        assert_eq!(unknown.to_string(), "unit#99");

        assert!("parsecs".parse::<Unit>().is_err());
    }

    #[test]
    fn test_forced_raw_kinds() {
        let raw: Vec<_> = UnitKind::ALL
            .iter()
            .filter(|k| k.scaling() == Scaling::Raw)
            .copied()
            .collect();
        assert_eq!(
            raw,
            vec![
                UnitKind::Millivolts,
                UnitKind::Percent,
                UnitKind::Decibels,
                UnitKind::Counts,
                UnitKind::LogBer
            ]
        );
    }
}
