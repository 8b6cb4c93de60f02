//! Legacy and alternate column names
//!
//! A declarative table from source column to canonical feature. The
//! normalizer consults it only for features whose canonical column is
//! absent; the first alias present in the table wins.

use materia_core::Feature;

/// How cells of a source column become a feature value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Numeric coercion of the cell as-is
    Numeric,
    /// Category lookup for text cells; numeric cells pass through
    Ordinal(&'static [(&'static str, f64)]),
    /// Category lookup; anything that is not a known category is missing
    Categorical(&'static [(&'static str, f64)]),
    /// Yes/no vocabulary
    Flag,
}

/// One alternate source for a canonical feature
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnAlias {
    pub source: &'static str,
    pub target: Feature,
    pub transform: Transform,
}

const fn alias(source: &'static str, target: Feature, transform: Transform) -> ColumnAlias {
    ColumnAlias { source, target, transform }
}

pub const COST_LEVELS: &[(&str, f64)] = &[
    ("baixo", 0.0),
    ("baixo-médio", 1.0),
    ("baixo-medio", 1.0),
    ("médio", 2.0),
    ("medio", 2.0),
    ("médio-alto", 3.0),
    ("medio-alto", 3.0),
    ("alto", 4.0),
];

pub const WEIGHT_DENSITY: &[(&str, f64)] = &[
    ("leve", 1000.0),
    ("médio", 5000.0),
    ("medio", 5000.0),
    ("pesado", 8000.0),
];

pub const RESISTANCE_TENSILE: &[(&str, f64)] = &[
    ("baixa", 10.0),
    ("média", 100.0),
    ("media", 100.0),
    ("alta", 400.0),
];

pub const CONDUCTIVITY_LEVELS: &[(&str, f64)] = &[
    ("baixa", 0.1),
    ("média", 1.0),
    ("media", 1.0),
    ("alta", 100.0),
];

pub const ALIASES: &[ColumnAlias] = &[
    alias("custo_index", Feature::CostIndex, Transform::Numeric),
    alias("cost", Feature::CostIndex, Transform::Ordinal(COST_LEVELS)),
    alias("custo", Feature::CostIndex, Transform::Ordinal(COST_LEVELS)),
    alias("densidade_kg_m3", Feature::DensityKgM3, Transform::Numeric),
    alias("weight", Feature::DensityKgM3, Transform::Categorical(WEIGHT_DENSITY)),
    alias("peso", Feature::DensityKgM3, Transform::Categorical(WEIGHT_DENSITY)),
    alias("resistance", Feature::TensileStrengthMpa, Transform::Categorical(RESISTANCE_TENSILE)),
    alias("resistencia", Feature::TensileStrengthMpa, Transform::Categorical(RESISTANCE_TENSILE)),
    alias("resistência", Feature::TensileStrengthMpa, Transform::Categorical(RESISTANCE_TENSILE)),
    alias("conductivity", Feature::ThermalConductivityWmK, Transform::Categorical(CONDUCTIVITY_LEVELS)),
    alias("condutividade", Feature::ThermalConductivityWmK, Transform::Categorical(CONDUCTIVITY_LEVELS)),
    alias("reciclavel", Feature::Recyclable, Transform::Flag),
    alias("biodegradavel", Feature::Biodegradable, Transform::Flag),
    alias("max_temperature", Feature::MeltingPointC, Transform::Numeric),
    alias("temperatura_max", Feature::MeltingPointC, Transform::Numeric),
];

/// Aliases for one feature, in priority order
pub fn aliases_for(feature: Feature) -> impl Iterator<Item = &'static ColumnAlias> {
    ALIASES.iter().filter(move |a| a.target == feature)
}

/// Transform applied to a feature's own canonical column
pub fn canonical_transform(feature: Feature) -> Transform {
    if feature.is_flag() {
        Transform::Flag
    } else {
        Transform::Numeric
    }
}
