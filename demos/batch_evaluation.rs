use mathexpr_rs::numeric::{derivative_at_point, integral_simpson, DEFAULT_INTERVALS, DEFAULT_STEP};
use mathexpr_rs::Evaluator;
use std::collections::HashMap;

fn main() {
    pretty_env_logger::init();

    let contexts: Vec<HashMap<String, f64>> = (0..8)
        .map(|i| HashMap::from([("x".to_string(), i as f64 * 0.5)]))
        .collect();

    let expression = "x^3 - 2*x + 1";

    let mut evaluator = Evaluator::default();
    let results = evaluator.evaluate_batch(expression, &contexts).unwrap();
    for (context, result) in contexts.iter().zip(results) {
        println!("x = {:>4}: {:?}", context["x"], result);
    }

    let empty = HashMap::new();
    let slope = derivative_at_point(&mut evaluator, expression, "x", 1.0, DEFAULT_STEP, &empty);
    println!("d/dx at 1: {:?}", slope);

    let area = integral_simpson(
        &mut evaluator,
        expression,
        "x",
        0.0,
        2.0,
        DEFAULT_INTERVALS,
        &empty,
    );
    println!("integral over [0, 2]: {:?}", area);
}
