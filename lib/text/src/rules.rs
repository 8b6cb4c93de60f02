//! Per-feature rule cascades
//!
//! Each feature owns an ordered list of signals. The first signal that fires
//! decides the value; if none fires, the feature's fallback applies. The
//! tables are plain data so every rule can be exercised on its own.

use crate::patterns::Unit;
use materia_core::Feature;
use serde::Serialize;

/// Words that cancel an immediately following mention
const NEGATIONS: &[&str] = &["não", "nao", "sem"];

/// A single textual signal for a feature value
#[derive(Debug, Clone, Copy)]
pub enum Signal {
    /// Any keyword appears as a substring
    Keywords { any_of: &'static [&'static str], value: f64 },
    /// Any keyword appears without a negation right before it
    Mention { any_of: &'static [&'static str], value: f64 },
    /// A unit pattern captures a number, scaled into canonical units
    Pattern { unit: Unit, scale: f64 },
}

/// What to use when no signal fires
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fallback {
    /// Always this value
    Constant(f64),
    /// The reference catalog median, or the feature default
    Reference,
}

/// Ordered signals and fallback for one feature
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub feature: Feature,
    pub signals: &'static [Signal],
    pub fallback: Fallback,
}

/// Which rule produced a feature value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    Keyword { keyword: &'static str },
    Pattern { unit: Unit, literal: f64 },
    Constant,
    ReferenceMedian,
    Default,
}

impl Signal {
    /// Value and resolution if the signal fires on lowercased `text`
    pub fn evaluate(&self, text: &str) -> Option<(f64, Resolution)> {
        match *self {
            Signal::Keywords { any_of, value } => any_of
                .iter()
                .find(|k| text.contains(*k))
                .map(|k| (value, Resolution::Keyword { keyword: *k })),
            Signal::Mention { any_of, value } => any_of
                .iter()
                .find(|k| mentioned(text, k))
                .map(|k| (value, Resolution::Keyword { keyword: *k })),
            Signal::Pattern { unit, scale } => unit
                .capture(text)
                .map(|literal| (literal * scale, Resolution::Pattern { unit, literal })),
        }
    }
}

/// True when `keyword` occurs at least once without a negation before it
fn mentioned(text: &str, keyword: &str) -> bool {
    text.match_indices(keyword)
        .any(|(at, _)| !is_negated(&text[..at]))
}

fn is_negated(prefix: &str) -> bool {
    let prefix = prefix.trim_end();
    NEGATIONS.iter().any(|neg| {
        prefix
            .strip_suffix(neg)
            .map(|before| before.chars().last().map_or(true, |c| !c.is_alphanumeric()))
            .unwrap_or(false)
    })
}

const fn keywords(any_of: &'static [&'static str], value: f64) -> Signal {
    Signal::Keywords { any_of, value }
}

pub const COST_RULES: &[Signal] = &[
    keywords(&["barato", "baixo custo"], 1.0),
    keywords(&["médio", "medio"], 3.0),
    keywords(&["caro", "alto custo"], 6.0),
];

pub const DENSITY_RULES: &[Signal] = &[
    keywords(&["leve", "levíssimo"], 900.0),
    keywords(&["pesado"], 7800.0),
    keywords(&["médio"], 2500.0),
    Signal::Pattern { unit: Unit::KgPerM3, scale: 1.0 },
    Signal::Pattern { unit: Unit::GPerCm3, scale: 1000.0 },
];

pub const TENSILE_RULES: &[Signal] = &[
    keywords(&["muito resistente", "alta resistência"], 400.0),
    keywords(&["resistente", "resistência alta"], 200.0),
    keywords(&["pouco resistente", "frágil"], 10.0),
    Signal::Pattern { unit: Unit::Mpa, scale: 1.0 },
];

pub const CONDUCTIVITY_RULES: &[Signal] = &[
    keywords(&["isolante", "baixo condutor"], 0.2),
    keywords(&["condutor", "alta condutividade", "elétrico"], 100.0),
    Signal::Pattern { unit: Unit::WPerMK, scale: 1.0 },
];

pub const RECYCLABLE_RULES: &[Signal] =
    &[Signal::Mention { any_of: &["recicl", "reutiliz"], value: 1.0 }];

pub const BIODEGRADABLE_RULES: &[Signal] =
    &[Signal::Mention { any_of: &["biodegrad", "compost"], value: 1.0 }];

pub const MELTING_RULES: &[Signal] = &[
    Signal::Pattern { unit: Unit::Celsius, scale: 1.0 },
    keywords(&["resiste ao calor", "alta temperatura"], 1000.0),
    keywords(&["nao derrete", "não derrete"], 1500.0),
];

/// Rule cascades for every feature, in canonical order
pub static FIELD_RULES: [FieldRules; 7] = [
    FieldRules { feature: Feature::CostIndex, signals: COST_RULES, fallback: Fallback::Constant(3.0) },
    FieldRules { feature: Feature::DensityKgM3, signals: DENSITY_RULES, fallback: Fallback::Reference },
    FieldRules { feature: Feature::TensileStrengthMpa, signals: TENSILE_RULES, fallback: Fallback::Reference },
    FieldRules {
        feature: Feature::ThermalConductivityWmK,
        signals: CONDUCTIVITY_RULES,
        fallback: Fallback::Reference,
    },
    FieldRules { feature: Feature::Recyclable, signals: RECYCLABLE_RULES, fallback: Fallback::Constant(0.0) },
    FieldRules {
        feature: Feature::Biodegradable,
        signals: BIODEGRADABLE_RULES,
        fallback: Fallback::Constant(0.0),
    },
    FieldRules { feature: Feature::MeltingPointC, signals: MELTING_RULES, fallback: Fallback::Reference },
];

impl FieldRules {
    /// First signal that fires, in priority order
    pub fn first_match(&self, text: &str) -> Option<(f64, Resolution)> {
        self.signals.iter().find_map(|s| s.evaluate(text))
    }
}
