use crate::rules::{Fallback, FieldRules, Resolution, FIELD_RULES};
use materia_core::{Feature, FeatureDefaults, FeatureMedians, FeatureVector, NormalizedTable};
use serde::Serialize;

/// How one feature of a description was resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedField {
    pub feature: Feature,
    pub value: f64,
    pub resolution: Resolution,
}

/// Converts free-text descriptions into feature vectors
///
/// Deterministic and total: every text yields a full vector. Fields the text
/// says nothing about fall back to the reference catalog medians when a
/// reference is set, else to the feature defaults.
#[derive(Debug, Clone, Default)]
pub struct TextVectorizer {
    defaults: FeatureDefaults,
    reference: Option<FeatureMedians>,
}

impl TextVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: FeatureDefaults) -> Self {
        Self { defaults, reference: None }
    }

    /// Use the medians of a normalized catalog as fallbacks
    pub fn with_reference(self, table: &NormalizedTable) -> Self {
        self.with_medians(FeatureMedians::from_table(table))
    }

    pub fn with_medians(mut self, medians: FeatureMedians) -> Self {
        self.reference = Some(medians);
        self
    }

    pub fn vectorize(&self, text: &str) -> FeatureVector {
        let mut vector = FeatureVector::zeros();
        for field in self.resolve(text) {
            vector[field.feature] = field.value;
        }
        vector
    }

    /// Resolve every feature, recording which rule decided it
    pub fn resolve(&self, text: &str) -> Vec<ResolvedField> {
        let text = text.to_lowercase();
        FIELD_RULES
            .iter()
            .map(|rules| self.resolve_field(rules, &text))
            .collect()
    }

    fn resolve_field(&self, rules: &FieldRules, text: &str) -> ResolvedField {
        let feature = rules.feature;
        let (value, resolution) = rules
            .first_match(text)
            .unwrap_or_else(|| self.fallback(feature, rules.fallback));
        ResolvedField { feature, value, resolution }
    }

    fn fallback(&self, feature: Feature, fallback: Fallback) -> (f64, Resolution) {
        match fallback {
            Fallback::Constant(v) => (v, Resolution::Constant),
            Fallback::Reference => match self.reference.and_then(|m| m.get(feature)) {
                Some(median) => (median, Resolution::ReferenceMedian),
                None => (self.defaults.get(feature), Resolution::Default),
            },
        }
    }
}

/// Vectorize `text`, falling back to `reference` medians when given
pub fn vectorize(text: &str, reference: Option<&NormalizedTable>) -> FeatureVector {
    let vectorizer = match reference {
        Some(table) => TextVectorizer::new().with_reference(table),
        None => TextVectorizer::new(),
    };
    vectorizer.vectorize(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::Unit;
    use materia_core::MaterialRecord;

    fn reference() -> NormalizedTable {
        NormalizedTable::new(vec![
            MaterialRecord::new(FeatureVector::new([0.0, 1000.0, 10.0, 0.1, 1.0, 1.0, 200.0])),
            MaterialRecord::new(FeatureVector::new([4.0, 7850.0, 400.0, 50.0, 1.0, 0.0, 1500.0])),
            MaterialRecord::new(FeatureVector::new([2.0, 2500.0, 60.0, 1.0, 0.0, 0.0, 660.0])),
        ])
    }

    #[test]
    fn test_light_cheap_description_without_reference() {
        let v = vectorize("leve, barato, resistência alta, não biodegradável", None);
        assert_eq!(v.as_slice(), &[1.0, 900.0, 200.0, 1.0, 0.0, 0.0, 300.0]);
    }

    #[test]
    fn test_light_cheap_description_with_reference() {
        let v = vectorize("Leve, barato, resistência alta, não biodegradável", Some(&reference()));
        assert_eq!(v.as_slice(), &[1.0, 900.0, 200.0, 1.0, 0.0, 0.0, 660.0]);
    }

    #[test]
    fn test_empty_text_uses_fallbacks() {
        let v = vectorize("", Some(&reference()));
        assert_eq!(v.as_slice(), &[3.0, 2500.0, 60.0, 1.0, 0.0, 0.0, 660.0]);

        let v = vectorize("", None);
        assert_eq!(v.as_slice(), &[3.0, 2000.0, 50.0, 1.0, 0.0, 0.0, 300.0]);
    }

    #[test]
    fn test_empty_reference_uses_defaults() {
        let v = vectorize("", Some(&NormalizedTable::default()));
        assert_eq!(v[Feature::DensityKgM3], 2000.0);
    }

    #[test]
    fn test_units_in_description() {
        let v = vectorize(
            "Caro, 2,7 g/cm3, 310 MPa, 205 W/m·K, reciclável, funde a 660 °C",
            None,
        );
        assert_eq!(v.as_slice(), &[6.0, 2700.0, 310.0, 205.0, 1.0, 0.0, 660.0]);
    }

    #[test]
    fn test_any_number_before_c_is_a_temperature() {
        assert_eq!(vectorize("placa de 10 cm", None)[Feature::MeltingPointC], 10.0);
        assert_eq!(vectorize("aguenta 2,5 °C", None)[Feature::MeltingPointC], 5.0);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            vectorize("PESADO E ISOLANTE", None),
            vectorize("pesado e isolante", None)
        );
    }

    #[test]
    fn test_resolve_records_rules() {
        let fields = TextVectorizer::new()
            .with_reference(&reference())
            .resolve("isolante, 40 mpa, compostável");
        assert_eq!(fields.len(), 7);

        assert_eq!(fields[Feature::CostIndex.index()].resolution, Resolution::Constant);
        assert_eq!(
            fields[Feature::DensityKgM3.index()].resolution,
            Resolution::ReferenceMedian
        );
        assert_eq!(
            fields[Feature::TensileStrengthMpa.index()].resolution,
            Resolution::Pattern { unit: Unit::Mpa, literal: 40.0 }
        );
        assert_eq!(
            fields[Feature::ThermalConductivityWmK.index()].resolution,
            Resolution::Keyword { keyword: "isolante" }
        );
        assert_eq!(fields[Feature::Biodegradable.index()].value, 1.0);
    }

    #[test]
    fn test_resolution_serializes_for_audit() {
        let fields = TextVectorizer::new().resolve("isolante");
        let json = serde_json::to_value(&fields[Feature::ThermalConductivityWmK.index()]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "feature": "thermal_conductivity_W_mK",
                "value": 0.2,
                "resolution": {"kind": "keyword", "keyword": "isolante"}
            })
        );
    }

    #[test]
    fn test_custom_defaults() {
        let defaults = FeatureDefaults { density_kg_m3: 1500.0, ..FeatureDefaults::default() };
        let v = TextVectorizer::with_defaults(defaults).vectorize("algo qualquer");
        assert_eq!(v[Feature::DensityKgM3], 1500.0);
    }
}
