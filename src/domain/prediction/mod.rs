//! Prediction domain module.
//!
//! The VIP content itself: a list of match predictions shown to authorized
//! sessions. Persisted as `{"pronos": [{"match": ..., "prono": ...}]}`.

use serde::{Deserialize, Serialize};

/// One published prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// The fixture, e.g. `"PSG - OM"`.
    #[serde(rename = "match")]
    pub fixture: String,
    /// The predicted outcome.
    pub prono: String,
}

impl Prediction {
    pub fn new(fixture: impl Into<String>, prono: impl Into<String>) -> Self {
        Self {
            fixture: fixture.into(),
            prono: prono.into(),
        }
    }
}

/// The full published list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PredictionList {
    #[serde(default)]
    pub pronos: Vec<Prediction>,
}

impl PredictionList {
    pub fn new(pronos: Vec<Prediction>) -> Self {
        Self { pronos }
    }

    pub fn len(&self) -> usize {
        self.pronos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pronos.is_empty()
    }
}
