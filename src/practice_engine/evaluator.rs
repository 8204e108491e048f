use std::f64::consts::PI;

use crate::practice_engine::{
    angle::normalize_angle,
    models::Operation,
    tree::EquationNode,
};

/// Compute the numeric value of a tree, children first (left before right).
///
/// Never fails: domain errors surface as NaN or an infinity.
pub fn evaluate(node: &EquationNode) -> f64 {
    match node {
        EquationNode::Number { value } => *value,
        EquationNode::Unary { op, operand } => apply_unary(*op, evaluate(operand)),
        EquationNode::Binary { op, left, right } => {
            let a = evaluate(left);
            let b = evaluate(right);
            apply_binary(*op, a, b)
        }
    }
}

/// Degrees to radians, in the same operation order the answer key uses.
fn degrees_to_radians(angle: f64) -> f64 {
    angle * PI / 180.0
}

pub fn apply_unary(op: Operation, a: f64) -> f64 {
    match op {
        Operation::Square     => a.powf(2.0),
        Operation::Cube       => a.powf(3.0),
        Operation::SquareRoot => a.sqrt(),
        // Real-exponent power: negative operands give NaN, not a signed root.
        Operation::CubeRoot   => a.powf(1.0 / 3.0),
        Operation::Log10      => a.log10(),
        Operation::Ln         => a.ln(),
        Operation::Exp        => a.exp(),
        Operation::Sin        => degrees_to_radians(normalize_angle(a)).sin(),
        Operation::Cos        => degrees_to_radians(normalize_angle(a)).cos(),
        Operation::Tan        => degrees_to_radians(normalize_angle(a)).tan(),
        Operation::Multiplication | Operation::Division => {
            debug_assert!(false, "{op:?} applied to a single operand");
            f64::NAN
        }
    }
}

pub fn apply_binary(op: Operation, a: f64, b: f64) -> f64 {
    match op {
        Operation::Multiplication => a * b,
        Operation::Division       => a / b,
        _ => {
            debug_assert!(false, "{op:?} applied to two operands");
            f64::NAN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: f64) -> EquationNode {
        EquationNode::number(v)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn arithmetic_operations() {
        let product = EquationNode::binary(Operation::Multiplication, n(3.0), n(0.2));
        assert!(close(evaluate(&product), 0.6));

        let quotient = EquationNode::binary(Operation::Division, n(9.0), n(3.0));
        assert_eq!(evaluate(&quotient), 3.0);

        assert_eq!(evaluate(&EquationNode::unary(Operation::Square, n(-4.0))), 16.0);
        assert!(close(evaluate(&EquationNode::unary(Operation::Cube, n(2.0))), 8.0));
        assert_eq!(evaluate(&EquationNode::unary(Operation::SquareRoot, n(81.0))), 9.0);
        assert!(close(evaluate(&EquationNode::unary(Operation::CubeRoot, n(27.0))), 3.0));
    }

    #[test]
    fn logarithms_and_exponential() {
        assert!(close(evaluate(&EquationNode::unary(Operation::Log10, n(1000.0))), 3.0));
        assert!(close(evaluate(&EquationNode::unary(Operation::Ln, n(1.0))), 0.0));
        assert!(close(
            evaluate(&EquationNode::unary(Operation::Exp, n(1.0))),
            std::f64::consts::E
        ));
    }

    #[test]
    fn trig_uses_normalized_degrees() {
        // 200 folds to 20 degrees.
        let sin = EquationNode::unary(Operation::Sin, n(200.0));
        assert!(close(evaluate(&sin), (20.0f64).to_radians().sin()));

        // Small operands are degrees as-is: cos(0) = 1, tan(-5) < 0.
        assert!(close(evaluate(&EquationNode::unary(Operation::Cos, n(0.0))), 1.0));
        assert!(evaluate(&EquationNode::unary(Operation::Tan, n(-5.0))) < 0.0);

        // sin(300) folds to sin(60): sign is dropped.
        let folded = evaluate(&EquationNode::unary(Operation::Sin, n(300.0)));
        assert!(close(folded, (60.0f64).to_radians().sin()));
    }

    #[test]
    fn domain_errors_become_non_finite() {
        assert!(evaluate(&EquationNode::unary(Operation::SquareRoot, n(-4.0))).is_nan());
        assert!(evaluate(&EquationNode::unary(Operation::CubeRoot, n(-8.0))).is_nan());
        assert!(evaluate(&EquationNode::unary(Operation::Log10, n(-1.0))).is_nan());
        assert_eq!(
            evaluate(&EquationNode::unary(Operation::Ln, n(0.0))),
            f64::NEG_INFINITY
        );
        let by_zero = EquationNode::binary(Operation::Division, n(1.0), n(0.0));
        assert_eq!(evaluate(&by_zero), f64::INFINITY);
    }

    #[test]
    fn nested_tree_evaluates_bottom_up() {
        // sqrt((2 * 8)) / 4^2 = 4 / 16
        let tree = EquationNode::binary(
            Operation::Division,
            EquationNode::unary(
                Operation::SquareRoot,
                EquationNode::binary(Operation::Multiplication, n(2.0), n(8.0)),
            ),
            EquationNode::unary(Operation::Square, n(4.0)),
        );
        assert!(close(evaluate(&tree), 0.25));
    }
}
