//! Numerical differentiation and integration of single-variable expressions.
//!
//! Both helpers parse the expression once and then evaluate its postfix form at each sample
//! point with `variable` bound to the sample. Other names the expression refers to are looked up
//! in `context`.

use crate::error::Error;
use crate::evaluator::Evaluator;
use crate::parser::ParsedExpression;
use rayon::prelude::*;
use std::collections::HashMap;

pub const DEFAULT_STEP: f64 = 1e-8;
pub const DEFAULT_INTERVALS: usize = 1000;

/// Central difference `(f(x + h) - f(x - h)) / 2h`.
pub fn derivative_at_point(
    evaluator: &mut Evaluator,
    expression: &str,
    variable: &str,
    point: f64,
    step: f64,
    context: &HashMap<String, f64>,
) -> Result<f64, Error> {
    let parsed = evaluator.parse_expression(expression)?;
    let sample = Sampler::new(expression, &parsed, variable, context);

    let forward = sample.at(point + step)?;
    let backward = sample.at(point - step)?;
    Ok((forward - backward) / (2.0 * step))
}

/// Composite Simpson's rule over `[a, b]`.
///
/// `intervals` is rounded up to the next even number (zero becomes two). `usize::MAX` has no
/// even successor and is rounded down instead. Samples are evaluated in parallel; if any sample
/// fails, one of the failures is returned.
pub fn integral_simpson(
    evaluator: &mut Evaluator,
    expression: &str,
    variable: &str,
    a: f64,
    b: f64,
    intervals: usize,
    context: &HashMap<String, f64>,
) -> Result<f64, Error> {
    let n = even_intervals(intervals);
    let h = (b - a) / n as f64;

    let parsed = evaluator.parse_expression(expression)?;
    let sample = Sampler::new(expression, &parsed, variable, context);

    let terms = (0..=n)
        .into_par_iter()
        .map(|i| -> Result<f64, Error> {
            let weight = if i == 0 || i == n {
                1.0
            } else if i % 2 == 1 {
                4.0
            } else {
                2.0
            };
            Ok(weight * sample.at(a + i as f64 * h)?)
        })
        .collect::<Result<Vec<f64>, Error>>()?;

    Ok(h / 3.0 * terms.iter().sum::<f64>())
}

fn even_intervals(intervals: usize) -> usize {
    match intervals {
        0 => 2,
        n if n % 2 == 1 => n.checked_add(1).unwrap_or(n - 1),
        n => n,
    }
}

struct Sampler<'a> {
    expression: &'a str,
    parsed: &'a ParsedExpression,
    variable: &'a str,
    context: &'a HashMap<String, f64>,
}

impl<'a> Sampler<'a> {
    fn new(
        expression: &'a str,
        parsed: &'a ParsedExpression,
        variable: &'a str,
        context: &'a HashMap<String, f64>,
    ) -> Self {
        Self {
            expression,
            parsed,
            variable,
            context,
        }
    }

    fn at(&self, x: f64) -> Result<f64, Error> {
        let mut bindings = self.context.clone();
        bindings.insert(self.variable.to_string(), x);
        Evaluator::evaluate_parsed(self.expression, self.parsed, &bindings)
    }
}
