//! # slide_rule_drill
//!
//! Randomised practice problems for slide-rule training.
//!
//! Each problem is a small equation tree of products, quotients, powers,
//! roots, logarithms, exponentials, and trig functions over randomly drawn
//! operands. The crate builds the tree, computes its answer, and renders the
//! equation as LaTeX ready for a typesetter such as MathJax.
//!
//! ## How it works
//!
//! 1. Describe the drill with [`Requirements`]: which operations are allowed,
//!    how deep the equation may nest (`steps`), the power-of-ten spread of the
//!    operands (`magnitude`), and how many significant figures they carry.
//! 2. Call [`generate_problem`] with a [`ProblemRequest`] (optionally seeded),
//!    or [`create_problem`] with your own `rand::Rng`.
//! 3. The returned [`Problem`] holds the LaTeX equation, the answer, and the
//!    tree itself. Nothing in it changes after construction.
//!
//! Invalid arithmetic is not filtered out: a square root of a negative
//! operand or a division by zero yields NaN or an infinity, and the answer
//! text shows it as such.
//!
//! ## Quick start
//!
//! ```rust
//! use slide_rule_drill::{generate_problem, Operation, ProblemRequest, Requirements};
//!
//! // Start-up defaults: multiplication and division, two steps.
//! let problem = generate_problem(ProblemRequest::new(Requirements::default()));
//! println!("{}", problem.typeset());
//!
//! // Full control, reproducible:
//! let requirements = Requirements::new(
//!     [Operation::Multiplication, Operation::Sin, Operation::Log10], 4, 3, 2,
//! ).unwrap();
//! let problem = generate_problem(ProblemRequest::seeded(requirements, 42));
//! println!("{} -> {}", problem.equation(), problem.answer_text());
//! ```

pub mod client_adapter;
pub mod practice_engine;

// Convenience re-exports so callers can use `slide_rule_drill::generate_problem`
// directly without reaching into `practice_engine::`.
pub use client_adapter::{operation_options, to_client_payload};
pub use practice_engine::{
    create_problem, generate_problem, Arity, EquationNode, Operation, Problem,
    ProblemRequest, Requirements, RequirementsError,
};
