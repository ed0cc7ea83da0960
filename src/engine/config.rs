use serde::{Deserialize, Serialize};

use crate::analysis::german::DEFAULT_MIN_TOKEN_CHARS;
use crate::error::{Result, SearchError};
use crate::index::field::FieldWeights;
use crate::search::SearchMode;

/// Default page size when a query sets no limit.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Default number of suggestions and similar articles.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;
pub const DEFAULT_SIMILAR_LIMIT: usize = 5;

/// Configuration for indexing, ranking and result paging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Relevance weight per indexed field.
    pub field_weights: FieldWeights,
    /// Multiplier applied to the field weight for prefix matches.
    pub prefix_factor: f64,
    /// Multiplier applied to the field weight for substring matches.
    pub substring_factor: f64,
    /// Page size used when a query does not set a limit (or sets 0).
    pub default_limit: usize,
    /// Suggestion count when a caller passes a limit of 0.
    pub suggestion_limit: usize,
    /// Related-article count when a caller passes a limit of 0.
    pub similar_limit: usize,
    /// Strategy used by [`SearchEngine::search`](crate::SearchEngine::search).
    pub mode: SearchMode,
    /// Tokens shorter than this many characters are not indexed.
    pub min_token_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            field_weights: FieldWeights::default(),
            prefix_factor: 0.7,
            substring_factor: 0.5,
            default_limit: DEFAULT_SEARCH_LIMIT,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            similar_limit: DEFAULT_SIMILAR_LIMIT,
            mode: SearchMode::default(),
            min_token_chars: DEFAULT_MIN_TOKEN_CHARS,
        }
    }
}

impl SearchConfig {
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }

    /// Parse a JSON config. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is in range.
    pub fn validate(&self) -> Result<()> {
        for (field, weight) in self.field_weights.iter() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(SearchError::invalid_config(format!(
                    "weight for field '{field}' must be a finite, non-negative number, got {weight}"
                )));
            }
        }
        for (name, factor) in [
            ("prefix_factor", self.prefix_factor),
            ("substring_factor", self.substring_factor),
        ] {
            if !(factor > 0.0 && factor <= 1.0) {
                return Err(SearchError::invalid_config(format!(
                    "{name} must be in (0, 1], got {factor}"
                )));
            }
        }
        if self.substring_factor > self.prefix_factor {
            return Err(SearchError::invalid_config(format!(
                "substring_factor ({}) must not exceed prefix_factor ({})",
                self.substring_factor, self.prefix_factor
            )));
        }
        if self.default_limit == 0 {
            return Err(SearchError::invalid_config("default_limit must be at least 1"));
        }
        if self.min_token_chars == 0 {
            return Err(SearchError::invalid_config(
                "min_token_chars must be at least 1",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    pub fn field_weights(mut self, weights: FieldWeights) -> Self {
        self.config.field_weights = weights;
        self
    }

    pub fn prefix_factor(mut self, factor: f64) -> Self {
        self.config.prefix_factor = factor;
        self
    }

    pub fn substring_factor(mut self, factor: f64) -> Self {
        self.config.substring_factor = factor;
        self
    }

    pub fn default_limit(mut self, limit: usize) -> Self {
        self.config.default_limit = limit;
        self
    }

    pub fn suggestion_limit(mut self, limit: usize) -> Self {
        self.config.suggestion_limit = limit;
        self
    }

    pub fn similar_limit(mut self, limit: usize) -> Self {
        self.config.similar_limit = limit;
        self
    }

    pub fn mode(mut self, mode: SearchMode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn min_token_chars(mut self, min_token_chars: usize) -> Self {
        self.config.min_token_chars = min_token_chars;
        self
    }

    pub fn build(self) -> Result<SearchConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
