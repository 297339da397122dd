use crate::error::Error;
use crate::parser::{ParsedExpression, Parser};
use crate::token::Tokenizer;
use log::debug;
use lru::LruCache;
use rayon::prelude::*;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

mod executor;

pub use executor::evaluate_postfix;

pub const DEFAULT_CACHE_SIZE: usize = 100;

/// Parses and evaluates expressions, remembering the postfix form of recently seen ones.
pub struct Evaluator {
    parser: Parser,
    cache: Option<LruCache<String, Arc<ParsedExpression>>>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_SIZE)
    }
}

impl Evaluator {
    /// Creates a new `Evaluator` keeping at most `max_cache_size` parsed expressions.
    /// A size of zero disables caching.
    pub fn new(max_cache_size: usize) -> Self {
        Self {
            parser: Parser::new(),
            cache: NonZeroUsize::new(max_cache_size).map(LruCache::new),
        }
    }

    /// Switches between lenient and strict lexing. Cached parses are dropped since they may
    /// have been produced under the other policy.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.parser = Parser::with_tokenizer(Tokenizer::with_strict(strict));
        self.clear_cache();
        self
    }

    pub fn parser(&self) -> Parser {
        self.parser
    }

    pub fn cached_len(&self) -> usize {
        self.cache.as_ref().map_or(0, LruCache::len)
    }

    pub fn clear_cache(&mut self) {
        if let Some(cache) = self.cache.as_mut() {
            cache.clear();
        }
    }

    /// Parses `expression`, reusing a cached result when there is one.
    pub fn parse_expression(&mut self, expression: &str) -> Result<Arc<ParsedExpression>, Error> {
        if let Some(parsed) = self.cache.as_mut().and_then(|cache| cache.get(expression)) {
            debug!("Cache hit for '{}'", expression);
            return Ok(Arc::clone(parsed));
        }

        let parsed = Arc::new(
            self.parser
                .parse(expression)
                .map_err(|e| Error::parse(expression, e))?,
        );

        if let Some(cache) = self.cache.as_mut() {
            cache.put(expression.to_string(), Arc::clone(&parsed));
        }
        Ok(parsed)
    }

    /// Evaluates `expression` with the given variable bindings.
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` if parsing and evaluation succeed; NaN and infinities included.
    /// * `Err(Error)` with the first failure and the expression it occurred in.
    pub fn evaluate_expression(
        &mut self,
        expression: &str,
        context: &HashMap<String, f64>,
    ) -> Result<f64, Error> {
        let parsed = self.parse_expression(expression)?;
        Self::evaluate_parsed(expression, &parsed, context)
    }

    /// Evaluates one expression against many contexts in parallel.
    ///
    /// The expression is parsed once; a parse failure fails the whole batch. Each context then
    /// gets its own result, in the same order as `contexts`.
    pub fn evaluate_batch(
        &mut self,
        expression: &str,
        contexts: &[HashMap<String, f64>],
    ) -> Result<Vec<Result<f64, Error>>, Error> {
        let parsed = self.parse_expression(expression)?;
        debug!(
            "Evaluating '{}' against {} contexts",
            expression,
            contexts.len()
        );

        Ok(contexts
            .par_iter()
            .map(|context| Self::evaluate_parsed(expression, &parsed, context))
            .collect())
    }

    pub(crate) fn evaluate_parsed(
        expression: &str,
        parsed: &ParsedExpression,
        context: &HashMap<String, f64>,
    ) -> Result<f64, Error> {
        evaluate_postfix(parsed.postfix(), context).map_err(|e| Error::evaluation(expression, e))
    }
}
