use crate::config::RecommenderConfig;
use materia_core::{
    Error, FeatureVector, MaterialIndex, NormalizedTable, RawTable, Recommendation,
    RecommendationStats, Result, StructuredQuery,
};
use materia_normalize::Normalizer;
use materia_text::{ResolvedField, TextVectorizer};
use tracing::{debug, info};

/// A fitted recommender over one catalog
///
/// Built once per catalog and read-only afterwards; queries may run
/// concurrently against a shared reference.
#[derive(Debug, Clone)]
pub struct Recommender {
    config: RecommenderConfig,
    raw: RawTable,
    normalized: NormalizedTable,
    index: MaterialIndex,
    vectorizer: TextVectorizer,
}

impl Recommender {
    /// Normalize `raw` and fit the index over it
    pub fn new(raw: RawTable, config: RecommenderConfig) -> Result<Self> {
        let normalizer = Normalizer::with_defaults(config.defaults);
        let (normalized, reports) = normalizer.normalize_with_report(&raw);
        for report in &reports {
            debug!(
                feature = %report.feature,
                source = ?report.source,
                missing = report.missing,
                imputation = ?report.imputation,
                "normalized feature"
            );
        }

        let n_neighbors = config.fit_neighbors.clamp(1, normalized.len().max(1));
        let index = MaterialIndex::fit(&normalized, n_neighbors)?;
        info!(rows = index.len(), n_neighbors, "fitted material index");

        Ok(Self::assemble(raw, normalized, index, config))
    }

    /// Rebuild around an index restored from [`MaterialIndex::to_bytes`]
    pub fn from_snapshot(raw: RawTable, snapshot: &[u8], config: RecommenderConfig) -> Result<Self> {
        let index = MaterialIndex::from_bytes(snapshot)?;
        if index.len() != raw.len() {
            return Err(Error::Serialization(format!(
                "index was fitted on {} rows but the catalog has {}",
                index.len(),
                raw.len()
            )));
        }
        let normalized = Normalizer::with_defaults(config.defaults).normalize(&raw);
        info!(rows = index.len(), "restored material index");
        Ok(Self::assemble(raw, normalized, index, config))
    }

    fn assemble(
        raw: RawTable,
        normalized: NormalizedTable,
        index: MaterialIndex,
        config: RecommenderConfig,
    ) -> Self {
        let vectorizer = TextVectorizer::with_defaults(config.defaults).with_reference(&normalized);
        Self { config, raw, normalized, index, vectorizer }
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// The catalog as supplied
    pub fn raw(&self) -> &RawTable {
        &self.raw
    }

    pub fn normalized(&self) -> &NormalizedTable {
        &self.normalized
    }

    pub fn index(&self) -> &MaterialIndex {
        &self.index
    }

    /// Feature vector for a free-text description
    pub fn vectorize(&self, text: &str) -> FeatureVector {
        self.vectorizer.vectorize(text)
    }

    /// Per-feature account of how a description was read
    pub fn explain_text(&self, text: &str) -> Vec<ResolvedField> {
        self.vectorizer.resolve(text)
    }

    pub fn recommend_text(&self, text: &str, k: usize) -> Result<Vec<Recommendation>> {
        let vector = self.vectorize(text);
        debug!(text, ?vector, "vectorized description");
        self.recommend_vector(vector.as_slice(), k)
    }

    pub fn recommend_structured(
        &self,
        query: &StructuredQuery,
        k: usize,
    ) -> Result<Vec<Recommendation>> {
        self.recommend_vector(query.to_vector().as_slice(), k)
    }

    /// The `k` catalog rows nearest to `vector`, joined to their raw rows
    pub fn recommend_vector(&self, vector: &[f64], k: usize) -> Result<Vec<Recommendation>> {
        let hits = self.index.query(vector, k)?;
        debug!(k, hits = hits.len(), "queried material index");
        Ok(Recommendation::join(&hits, &self.raw))
    }

    /// Recommendations using the configured result count
    pub fn recommend_default(&self, vector: &[f64]) -> Result<Vec<Recommendation>> {
        self.recommend_vector(vector, self.config.result_count)
    }

    pub fn stats(&self, query: &FeatureVector, results: &[Recommendation]) -> RecommendationStats {
        RecommendationStats::compute(query, results, &self.index)
    }
}
