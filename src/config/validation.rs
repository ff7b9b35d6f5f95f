//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, bind address parses)
//! - Check the static URL prefix is usable as a mount point
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::SiteConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("bind address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("static URL prefix {0:?} must start with '/' and not be the site root")]
    InvalidStaticPrefix(String),

    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,

    #[error("template directory must not be empty")]
    EmptyTemplateDir,

    #[error("static directory must not be empty")]
    EmptyStaticDir,
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let prefix = config.content.static_url_prefix.trim_end_matches('/');
    if !prefix.starts_with('/') || prefix == "/" || prefix.is_empty() {
        errors.push(ValidationError::InvalidStaticPrefix(
            config.content.static_url_prefix.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.content.template_dir.is_empty() {
        errors.push(ValidationError::EmptyTemplateDir);
    }

    if config.content.static_dir.is_empty() {
        errors.push(ValidationError::EmptyStaticDir);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&SiteConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_error() {
        let mut config = SiteConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.content.static_url_prefix = "static".to_string();
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::ZeroRequestTimeout));
    }

    #[test]
    fn root_static_prefix_is_rejected() {
        let mut config = SiteConfig::default();
        config.content.static_url_prefix = "/".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidStaticPrefix("/".to_string())]
        );
    }

    #[test]
    fn trailing_slash_on_prefix_is_accepted() {
        let mut config = SiteConfig::default();
        config.content.static_url_prefix = "/static/".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
