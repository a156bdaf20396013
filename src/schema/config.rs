//! Configuration types for single-lineage evolutionary search.

use serde::{Deserialize, Serialize};

/// Top-level search configuration.
///
/// The alphabet, scoring function, and target score are passed to
/// [`Search::new`](crate::engine::Search::new) directly since they are
/// generic over the caller's gene and fitness types; this struct holds the
/// scalar knobs that serialize cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of loci in every genome of the run.
    pub genome_length: usize,
    /// Mutation operator applied each generation.
    #[serde(default)]
    pub mutation: MutationKind,
    /// Generations a parent may survive without improvement before the
    /// stagnation policy kicks in. `None` retries regressions forever.
    #[serde(default)]
    pub max_age: Option<u32>,
    /// Seed for the search's random source.
    #[serde(default)]
    pub random_seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            genome_length: 16,
            mutation: MutationKind::default(),
            max_age: None,
            random_seed: 0,
        }
    }
}

/// Mutation operator selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type")]
pub enum MutationKind {
    /// Replace one locus with a different symbol from the alphabet.
    #[default]
    Substitution,
    /// Exchange the symbols at two distinct loci.
    Transposition,
}

/// Search configuration validation errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Alphabet must contain at least 2 distinct symbols (found {0})")]
    AlphabetTooSmall(usize),
    #[error("Genome length must be positive")]
    EmptyGenome,
    #[error("Transposition mutation requires a genome of at least 2 loci")]
    GenomeTooShortForTransposition,
}

impl SearchConfig {
    /// Validate the configuration against the alphabet's distinct symbol
    /// count. Must pass before a search starts; both mutation operators
    /// draw two distinct values from their sampling domain.
    pub fn validate(&self, distinct_symbols: usize) -> Result<(), ConfigError> {
        if distinct_symbols < 2 {
            return Err(ConfigError::AlphabetTooSmall(distinct_symbols));
        }
        if self.genome_length == 0 {
            return Err(ConfigError::EmptyGenome);
        }
        if self.mutation == MutationKind::Transposition && self.genome_length < 2 {
            return Err(ConfigError::GenomeTooShortForTransposition);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = SearchConfig::default();
        assert!(config.validate(4).is_ok());
    }

    #[test]
    fn test_rejects_small_alphabet() {
        let config = SearchConfig::default();
        assert_eq!(config.validate(1), Err(ConfigError::AlphabetTooSmall(1)));
        assert_eq!(config.validate(0), Err(ConfigError::AlphabetTooSmall(0)));
    }

    #[test]
    fn test_two_symbol_alphabet_is_enough() {
        let config = SearchConfig {
            genome_length: 8,
            mutation: MutationKind::Substitution,
            ..Default::default()
        };
        assert!(config.validate(2).is_ok());
    }

    #[test]
    fn test_rejects_empty_genome() {
        let config = SearchConfig {
            genome_length: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(4), Err(ConfigError::EmptyGenome));
    }

    #[test]
    fn test_rejects_short_genome_for_transposition() {
        let config = SearchConfig {
            genome_length: 1,
            mutation: MutationKind::Transposition,
            ..Default::default()
        };
        assert_eq!(
            config.validate(4),
            Err(ConfigError::GenomeTooShortForTransposition)
        );
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig {
            genome_length: 5,
            mutation: MutationKind::Transposition,
            max_age: Some(50),
            random_seed: 42,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.genome_length, config.genome_length);
        assert_eq!(parsed.mutation, config.mutation);
        assert_eq!(parsed.max_age, config.max_age);
    }

    #[test]
    fn test_defaults_fill_in() {
        let parsed: SearchConfig = serde_json::from_str(r#"{"genome_length": 8}"#).unwrap();
        assert_eq!(parsed.mutation, MutationKind::Substitution);
        assert_eq!(parsed.max_age, None);
        assert_eq!(parsed.random_seed, 0);
    }
}
