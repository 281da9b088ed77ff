use crate::config::types::{Config, CorpusConfig, CrawlerConfig, RankConfig};
use crate::ConfigError;

/// Upper bound on rank iterations accepted from a configuration file
const MAX_ITERATIONS: u32 = 10_000;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_rank_config(&config.rank)?;
    if let Some(corpus) = &config.corpus {
        validate_corpus_config(corpus)?;
    }
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    // URLs are opaque identifiers, so only emptiness is rejected
    if config.seed.is_empty() {
        return Err(ConfigError::Validation("seed cannot be empty".to_string()));
    }

    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    Ok(())
}

/// Validates rank parameters
fn validate_rank_config(config: &RankConfig) -> Result<(), ConfigError> {
    let d = config.damping_factor;
    if !d.is_finite() || !(0.0..=1.0).contains(&d) {
        return Err(ConfigError::Validation(format!(
            "damping_factor must be between 0 and 1, got {}",
            d
        )));
    }

    if config.iterations > MAX_ITERATIONS {
        return Err(ConfigError::Validation(format!(
            "iterations must be <= {}, got {}",
            MAX_ITERATIONS, config.iterations
        )));
    }

    Ok(())
}

/// Validates corpus configuration
fn validate_corpus_config(config: &CorpusConfig) -> Result<(), ConfigError> {
    if config.path.is_empty() {
        return Err(ConfigError::Validation(
            "corpus path cannot be empty".to_string(),
        ));
    }
    Ok(())
}
