use mathexpr_rs::format::format_result;
use mathexpr_rs::Evaluator;
use std::collections::HashMap;

fn main() {
    pretty_env_logger::init();

    let mut evaluator = Evaluator::new(100);

    let cases = [
        ("2 + 3 * 4", HashMap::new()),
        ("sin(pi/2) + cos(0)", HashMap::new()),
        ("sqrt(16) + 2^3", HashMap::new()),
        ("x^2 + 3*x + 1", HashMap::from([("x".to_string(), 2.0)])),
        ("ln(e) + log(100)", HashMap::new()),
        ("2 + + 3", HashMap::new()),
        ("sqrt(-1)", HashMap::new()),
    ];

    for (expression, variables) in cases.iter() {
        match evaluator.evaluate_expression(expression, variables) {
            Ok(result) => println!("{} = {}", expression, format_result(result, 6)),
            Err(err) => println!("Error: {}", err),
        }
    }
}
