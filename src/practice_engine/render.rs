//! LaTeX rendering of equation trees.
//!
//! Trig nodes do not show their operand expression. They show the folded
//! angle the answer was computed from, to one decimal place, so the student
//! reads exactly the angle the answer key used.

use tracing::warn;

use crate::practice_engine::{
    angle::normalize_angle,
    evaluator::evaluate,
    models::Operation,
    tree::EquationNode,
};

/// Render `node` as LaTeX (no display-math delimiters).
pub fn render_latex(node: &EquationNode) -> String {
    match node {
        EquationNode::Number { value } => value.to_string(),
        EquationNode::Unary { op, operand } => render_unary(*op, operand),
        EquationNode::Binary { op, left, right } => {
            render_binary(*op, &render_latex(left), &render_latex(right))
        }
    }
}

fn render_binary(op: Operation, l: &str, r: &str) -> String {
    match op {
        Operation::Multiplication => format!("({l} \\times {r})"),
        Operation::Division       => format!("\\frac{{{l}}}{{{r}}}"),
        Operation::Square
        | Operation::Cube
        | Operation::SquareRoot
        | Operation::CubeRoot
        | Operation::Log10
        | Operation::Ln
        | Operation::Exp
        | Operation::Sin
        | Operation::Cos
        | Operation::Tan => mismatched_arity(op),
    }
}

fn render_unary(op: Operation, operand: &EquationNode) -> String {
    match op {
        Operation::Sin => render_trig("sin", operand),
        Operation::Cos => render_trig("cos", operand),
        Operation::Tan => render_trig("tan", operand),
        Operation::Square     => format!("{{({})}}^2", render_latex(operand)),
        Operation::Cube       => format!("{{({})}}^3", render_latex(operand)),
        Operation::SquareRoot => format!("\\sqrt{{{}}}", render_latex(operand)),
        Operation::CubeRoot   => format!("\\sqrt[3]{{{}}}", render_latex(operand)),
        Operation::Log10      => format!("\\log_{{10}}{{{}}}", render_latex(operand)),
        Operation::Ln         => format!("\\ln{{{}}}", render_latex(operand)),
        Operation::Exp        => format!("e^{{{}}}", render_latex(operand)),
        Operation::Multiplication | Operation::Division => mismatched_arity(op),
    }
}

fn render_trig(name: &str, operand: &EquationNode) -> String {
    format!("\\{name}{{({}°)}}", format_degrees(trig_angle(operand)))
}

/// A node whose shape disagrees with its operation's arity renders as `?`.
fn mismatched_arity(op: Operation) -> String {
    warn!(%op, "operation stored with the wrong number of operands");
    "?".to_string()
}

/// The angle, in degrees, that a trig node applied to `operand` evaluates.
pub fn trig_angle(operand: &EquationNode) -> f64 {
    normalize_angle(evaluate(operand))
}

/// One-decimal degree label.
///
/// The only binary values that sit exactly halfway between two tenths are
/// odd multiples of 0.25. Those round away from zero (1.25 -> 1.3); every
/// other value takes the nearest tenth.
pub fn format_degrees(angle: f64) -> String {
    let tenths = angle.abs() * 10.0;
    let is_tie = angle.is_finite() && (angle * 4.0).fract() == 0.0 && tenths.fract() == 0.5;
    if !is_tie {
        return format!("{:.1}", angle);
    }
    let rounded = tenths.ceil() as u64;
    let sign = if angle < 0.0 { "-" } else { "" };
    format!("{sign}{}.{}", rounded / 10, rounded % 10)
}
