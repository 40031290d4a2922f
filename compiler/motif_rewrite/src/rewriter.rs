//! The rewrite loop.

use motif_match::{MatchResult, Value};

use crate::{RewriteError, RewriteRule};

/// Limits for a rewrite run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewriteConfig {
    /// Steps allowed before the run is abandoned.
    pub max_steps: usize,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        RewriteConfig { max_steps: 10_000 }
    }
}

impl RewriteConfig {
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }
}

/// One applied rewrite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewriteStep {
    pub rule: String,
    /// Index of the first token of the replaced window.
    pub offset: usize,
    /// Number of tokens replaced.
    pub width: usize,
}

/// Applies rules in priority order until none match.
#[derive(Clone, Debug)]
pub struct Rewriter {
    rules: Vec<RewriteRule>,
    config: RewriteConfig,
}

impl Rewriter {
    pub fn new(rules: Vec<RewriteRule>, config: RewriteConfig) -> Self {
        Rewriter { rules, config }
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    pub fn config(&self) -> RewriteConfig {
        self.config
    }

    /// Apply the first rule (in rule order) at its leftmost matching window.
    ///
    /// Returns `Ok(None)` when no rule matches anywhere.
    pub fn step(&self, tokens: &mut Vec<Value>) -> Result<Option<RewriteStep>, RewriteError> {
        for rule in &self.rules {
            if rule.width == 0 || rule.width > tokens.len() {
                continue;
            }
            for offset in 0..=tokens.len() - rule.width {
                let window = Value::list(tokens[offset..offset + rule.width].to_vec());
                let MatchResult::Matched(bindings) = rule.matcher.matches(&window) else {
                    continue;
                };
                let Some(replacement) = (rule.reduce)(&bindings)? else {
                    tracing::trace!(rule = %rule.name, offset, "window declined");
                    continue;
                };
                tracing::debug!(rule = %rule.name, offset, %replacement, "window rewritten");
                tokens.splice(offset..offset + rule.width, [replacement]);
                return Ok(Some(RewriteStep {
                    rule: rule.name.clone(),
                    offset,
                    width: rule.width,
                }));
            }
        }
        Ok(None)
    }

    /// Rewrite until no rule applies.
    pub fn run(&self, tokens: Vec<Value>) -> Result<Vec<Value>, RewriteError> {
        self.run_with(tokens, |_, _| {})
    }

    /// Rewrite until no rule applies, calling `observer` after every step
    /// with the step and the tokens it produced.
    #[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
    pub fn run_with<F>(&self, mut tokens: Vec<Value>, mut observer: F) -> Result<Vec<Value>, RewriteError>
    where
        F: FnMut(&RewriteStep, &[Value]),
    {
        let mut steps = 0;
        while let Some(step) = self.step(&mut tokens)? {
            steps += 1;
            if steps > self.config.max_steps {
                return Err(RewriteError::StepLimit {
                    limit: self.config.max_steps,
                });
            }
            observer(&step, &tokens);
        }
        tracing::debug!(steps, remaining = tokens.len(), "rewriting settled");
        Ok(tokens)
    }
}
