//! # materia Text
//!
//! Turns a free-text material description (Portuguese) into a feature vector
//! in the canonical feature order.
//!
//! This is a keyword and unit heuristic, not a language model. Every feature
//! has an ordered cascade of signals ([`rules::FIELD_RULES`]):
//!
//! - **Keywords**: `barato`, `leve`, `pesado`, `isolante`, `resistente`, ...
//! - **Units**: `7850 kg/m3`, `2,7 g/cm3`, `250 MPa`, `205 W/m·K`, `660 °C`
//! - **Mentions**: `reciclável`, `biodegradável`, ignored after `não`/`sem`
//!
//! and a fallback when nothing fires: a constant, or the median of a
//! reference catalog (the feature default when no catalog is given).
//!
//! ```rust
//! use materia_text::vectorize;
//!
//! let v = vectorize("leve, barato, resistência alta, não biodegradável", None);
//! assert_eq!(v.as_slice(), &[1.0, 900.0, 200.0, 1.0, 0.0, 0.0, 300.0]);
//! ```

pub mod patterns;
pub mod rules;
pub mod vectorizer;

pub use patterns::Unit;
pub use rules::{Fallback, FieldRules, Resolution, Signal, FIELD_RULES};
pub use vectorizer::{vectorize, ResolvedField, TextVectorizer};
