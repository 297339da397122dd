mod constants;

pub use constants::Constant;

/// Every function name the tokenizer recognises.
///
/// All functions take exactly one argument. The calculus markers (`derivative`, `integral`,
/// `diff`, `int`) are tokenized so that outer layers can detect them, but have no numeric
/// meaning here and are rejected by the evaluator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Ln,
    Log,
    Exp,
    Sqrt,
    Abs,
    Floor,
    Ceil,
    Round,
    Derivative,
    Integral,
    Diff,
    Int,
}

impl Function {
    pub fn from_name(name: &str) -> Option<Self> {
        let function = match name {
            "sin" => Function::Sin,
            "cos" => Function::Cos,
            "tan" => Function::Tan,
            "asin" => Function::Asin,
            "acos" => Function::Acos,
            "atan" => Function::Atan,
            "sinh" => Function::Sinh,
            "cosh" => Function::Cosh,
            "tanh" => Function::Tanh,
            "ln" => Function::Ln,
            "log" => Function::Log,
            "exp" => Function::Exp,
            "sqrt" => Function::Sqrt,
            "abs" => Function::Abs,
            "floor" => Function::Floor,
            "ceil" => Function::Ceil,
            "round" => Function::Round,
            "derivative" => Function::Derivative,
            "integral" => Function::Integral,
            "diff" => Function::Diff,
            "int" => Function::Int,
            _ => return None,
        };
        Some(function)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Asin => "asin",
            Function::Acos => "acos",
            Function::Atan => "atan",
            Function::Sinh => "sinh",
            Function::Cosh => "cosh",
            Function::Tanh => "tanh",
            Function::Ln => "ln",
            Function::Log => "log",
            Function::Exp => "exp",
            Function::Sqrt => "sqrt",
            Function::Abs => "abs",
            Function::Floor => "floor",
            Function::Ceil => "ceil",
            Function::Round => "round",
            Function::Derivative => "derivative",
            Function::Integral => "integral",
            Function::Diff => "diff",
            Function::Int => "int",
        }
    }

    /// Applies the function to `x`, or `None` for the calculus markers.
    ///
    /// Arguments outside the mathematical domain yield NaN or an infinity, exactly as the
    /// underlying `f64` methods do.
    pub fn apply(&self, x: f64) -> Option<f64> {
        let value = match self {
            Function::Sin => x.sin(),
            Function::Cos => x.cos(),
            Function::Tan => x.tan(),
            Function::Asin => x.asin(),
            Function::Acos => x.acos(),
            Function::Atan => x.atan(),
            Function::Sinh => x.sinh(),
            Function::Cosh => x.cosh(),
            Function::Tanh => x.tanh(),
            Function::Ln => x.ln(),
            Function::Log => x.log10(),
            Function::Exp => x.exp(),
            Function::Sqrt => x.sqrt(),
            Function::Abs => x.abs(),
            Function::Floor => x.floor(),
            Function::Ceil => x.ceil(),
            // Half-way cases go to the even neighbour: round(2.5) == 2.
            Function::Round => x.round_ties_even(),
            Function::Derivative | Function::Integral | Function::Diff | Function::Int => {
                return None
            }
        };
        Some(value)
    }

    pub fn is_evaluable(&self) -> bool {
        !matches!(
            self,
            Function::Derivative | Function::Integral | Function::Diff | Function::Int
        )
    }
}
