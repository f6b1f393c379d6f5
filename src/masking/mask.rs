/*!
 * The masking and restoration functions.
 */

use anyhow::Result;
use regex::Captures;

use crate::app_config::MaskingConfig;

use super::rules::MaskRule;
use super::token::SpanMap;

/// Masks protected spans behind placeholder tokens and restores them.
///
/// A masker is built once from configuration and reused across documents;
/// `mask` itself is pure, returning a fresh `SpanMap` per call and touching
/// no shared state.
pub struct SpanMasker {
    rules: Vec<MaskRule>,
}

impl SpanMasker {
    /// Build a masker from configuration: the built-in passes plus the
    /// frozen-term dictionary pass.
    pub fn new(config: &MaskingConfig) -> Result<Self> {
        let mut rules = MaskRule::builtin();
        if let Some(rule) = MaskRule::frozen_terms(&config.frozen_terms)? {
            rules.push(rule);
        }
        Ok(Self { rules })
    }

    /// Convenience constructor for a masker with an explicit term list
    pub fn with_terms(terms: &[&str]) -> Result<Self> {
        let config = MaskingConfig {
            frozen_terms: terms.iter().map(|t| t.to_string()).collect(),
            ..MaskingConfig::default()
        };
        Self::new(&config)
    }

    /// The compiled rules in pass order
    pub fn rules(&self) -> &[MaskRule] {
        &self.rules
    }

    /// Replace every protected span with a placeholder token.
    ///
    /// Passes run in rule order, each on the already-masked output of the
    /// previous pass. Every match gets its own distinct token; the returned
    /// map records them in insertion order.
    pub fn mask(&self, text: &str) -> (String, SpanMap) {
        let mut map = SpanMap::new();
        let mut masked = text.to_string();

        for rule in &self.rules {
            masked = rule
                .pattern
                .replace_all(&masked, |caps: &Captures| {
                    map.register(rule.kind, caps.get(0).map_or("", |m| m.as_str()))
                })
                .into_owned();
        }

        (masked, map)
    }

    /// Restore every placeholder in `text` to its original content
    pub fn unmask(text: &str, map: &SpanMap) -> String {
        map.restore_all(text)
    }
}
