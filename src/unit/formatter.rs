use crate::unit::error::UnitError;
use crate::unit::types::{ScaledValue, Scaling, Unit, UnitKind};

/// Returned by [`pretty_print`] when the unit code names no known kind
pub const INVALID_UNIT: &str = "Invalid unit";

/// Generic SI ladder on the raw value.
///
/// The micro and pico arms sit behind `< 1` and can never be taken; they are kept so the
/// ladder reads the same as the one display code has always used.
fn si_scale(value: f64) -> (f64, &'static str) {
    let magnitude = value.abs();
    if magnitude >= 1e9 {
        (value / 1e9, "G")
    } else if magnitude >= 1e6 {
        (value / 1e6, "M")
    } else if magnitude >= 1e3 {
        (value / 1e3, "k")
    } else if magnitude < 1.0 {
        (value * 1e3, "m")
    } else if magnitude < 1e-6 {
        (value * 1e6, "μ")
    } else if magnitude < 1e-9 {
        (value * 1e9, "p")
    } else {
        (value, "")
    }
}

/// Ladder for a picosecond base unit: every prefix is three decades below the SI one
fn picosecond_scale(value: f64) -> (f64, &'static str) {
    let magnitude = value.abs();
    if magnitude >= 1e12 {
        (value / 1e12, "")
    } else if magnitude >= 1e9 {
        (value / 1e9, "m")
    } else if magnitude >= 1e6 {
        (value / 1e6, "μ")
    } else if magnitude >= 1e3 {
        (value / 1e3, "n")
    } else {
        (value, "p")
    }
}

/// Pick the display magnitude and prefix for `value` in `kind`
pub fn scale_value(kind: UnitKind, value: f64) -> ScaledValue {
    let (magnitude, prefix) = match kind.scaling() {
        Scaling::Si => si_scale(value),
        Scaling::Picoseconds => picosecond_scale(value),
        Scaling::Raw => (value, ""),
    };
    log::trace!(
        "scaled {} {} to {} with prefix '{}'",
        value,
        kind,
        magnitude,
        prefix
    );
    ScaledValue {
        magnitude,
        prefix,
        suffix: kind.suffix(),
    }
}

/// Render a scaled value; `value` is the unscaled input, only used for log BER
fn render(kind: UnitKind, value: f64, scaled: &ScaledValue) -> String {
    match kind {
        // Already logarithmic, show as a power of ten
        UnitKind::LogBer => format!("1e{:.0}", value),
        _ => format!(
            "{:.*} {}{}",
            kind.decimals(),
            scaled.magnitude,
            scaled.prefix,
            scaled.suffix
        ),
    }
}

pub fn format_kind(kind: UnitKind, value: f64) -> String {
    let scaled = scale_value(kind, value);
    render(kind, value, &scaled)
}

/// Format `value` for display, or return an error for an unknown unit code
pub fn try_pretty_print(unit: Unit, value: f64) -> Result<String, UnitError> {
    let kind = unit.kind().ok_or(UnitError::InvalidUnit(unit.code()))?;
    Ok(format_kind(kind, value))
}

/// Format `value` for display.
///
/// Never fails: an unknown unit code produces [`INVALID_UNIT`] instead of a reading.
pub fn pretty_print(unit: Unit, value: f64) -> String {
    match try_pretty_print(unit, value) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Cannot format {}: {}", value, e);
            INVALID_UNIT.to_string()
        }
    }
}

impl Unit {
    /// See [`pretty_print`]
    pub fn pretty_print(&self, value: f64) -> String {
        pretty_print(*self, value)
    }

    /// See [`try_pretty_print`]
    pub fn try_pretty_print(&self, value: f64) -> Result<String, UnitError> {
        try_pretty_print(*self, value)
    }

    /// Magnitude, prefix and suffix that [`Unit::pretty_print`] would render
    pub fn scale(&self, value: f64) -> Result<ScaledValue, UnitError> {
        let kind = self.kind().ok_or(UnitError::InvalidUnit(self.code()))?;
        Ok(scale_value(kind, value))
    }
}
