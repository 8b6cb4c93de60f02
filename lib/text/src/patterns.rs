//! Unit patterns for numeric literals in free text
//!
//! Each pattern captures the number in group 1. Text is matched after
//! lowercasing. Both `.` and `,` are accepted as decimal separators.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("unit pattern must compile")
}

/// `7850 kg/m3`, `7850kg/m³`
pub static KG_PER_M3: Lazy<Regex> = Lazy::new(|| compile(r"(\d+(?:[.,]\d+)?)\s*kg\s*/\s*m[3³]"));

/// `2.7 g/cm3`, `2,7 g/cm³`
pub static G_PER_CM3: Lazy<Regex> = Lazy::new(|| compile(r"(\d+(?:[.,]\d+)?)\s*g\s*/\s*cm[3³]"));

/// `250 mpa`
pub static MPA: Lazy<Regex> = Lazy::new(|| compile(r"(\d+(?:[.,]\d+)?)\s*mpa"));

/// `205 w/m·k`, `0.04 w/mk`, `15 w/m.k`
pub static W_PER_MK: Lazy<Regex> =
    Lazy::new(|| compile(r"(\d+(?:[.,]\d+)?)\s*w\s*/\s*m\s*[.·*]?\s*k"));

/// `660 °c`, `-40c`, `1200 celsius`: an integer followed by `c`, with no
/// check on what surrounds it
pub static CELSIUS: Lazy<Regex> = Lazy::new(|| compile(r"(-?\d+)\s*°?\s*c"));

/// Unit a numeric literal is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    KgPerM3,
    GPerCm3,
    Mpa,
    WPerMK,
    Celsius,
}

impl Unit {
    pub fn regex(self) -> &'static Regex {
        match self {
            Unit::KgPerM3 => &KG_PER_M3,
            Unit::GPerCm3 => &G_PER_CM3,
            Unit::Mpa => &MPA,
            Unit::WPerMK => &W_PER_MK,
            Unit::Celsius => &CELSIUS,
        }
    }

    /// First literal written in this unit
    pub fn capture(self, text: &str) -> Option<f64> {
        capture_number(self.regex(), text)
    }
}

/// First number captured by `pattern` in `text`
pub fn capture_number(pattern: &Regex, text: &str) -> Option<f64> {
    let caps = pattern.captures(text)?;
    let raw = caps.get(1)?.as_str().replace(',', ".");
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}
