use serde::{Deserialize, Serialize};

use crate::practice_engine::tree::EquationNode;

/// One generated practice problem.
///
/// Built once per request by [`create_problem`](crate::practice_engine::generator::create_problem);
/// the equation, answer, and tree are fixed from then on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    equation: String,
    answer: f64,
    tree: EquationNode,
}

impl Problem {
    pub(crate) fn new(tree: EquationNode, answer: f64, equation: String) -> Self {
        Problem { equation, answer, tree }
    }

    /// LaTeX for the left-hand side, without delimiters.
    pub fn equation(&self) -> &str {
        &self.equation
    }

    /// The exact computed answer; may be NaN or infinite.
    pub fn answer(&self) -> f64 {
        self.answer
    }

    pub fn tree(&self) -> &EquationNode {
        &self.tree
    }

    pub fn node_count(&self) -> usize {
        self.tree.node_count()
    }

    /// Display-math form ready for the typesetter: `\[ <equation> = ? \]`.
    pub fn typeset(&self) -> String {
        format!("\\[ {} = ? \\]", self.equation)
    }

    /// The answer as shown to the student, three decimals.
    pub fn answer_text(&self) -> String {
        format_answer(self.answer)
    }
}

/// Three-decimal answer text. Non-finite values print as `NaN`,
/// `Infinity`, or `-Infinity`.
pub fn format_answer(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        format!("{:.3}", value)
    }
}
