use mathexpr_rs::{evaluate_postfix, parse};
use std::collections::HashMap;

fn main() {
    pretty_env_logger::init();

    let expression = "2 * sin(t) ^ 2 - 1";
    let parsed = parse(expression).expect("Failed to parse");
    println!(
        "{} tokens, postfix ({} entries): {}",
        parsed.token_count(),
        parsed.postfix_len(),
        parsed
    );

    for step in 0..4 {
        let t = step as f64 * std::f64::consts::FRAC_PI_4;
        let context = HashMap::from([("t".to_string(), t)]);

        match evaluate_postfix(parsed.postfix(), &context) {
            Ok(result) => println!("t = {:.4}: {}", t, result),
            Err(err) => println!("Error: {}", err),
        }
    }
}
