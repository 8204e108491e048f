//! Core practice engine: number drawing, equation trees, evaluation, rendering.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Operations, requirements, and the facade request |
//! | `error`     | Boundary validation errors |
//! | `numbers`   | Random operands rounded to significant figures |
//! | `angle`     | Folding trig operands into `[0°, 90°]` |
//! | `tree`      | `EquationNode` and the recursive random builder |
//! | `evaluator` | Bottom-up numeric evaluation |
//! | `render`    | LaTeX rendering |
//! | `problem`   | The immutable `Problem` value and answer formatting |
//! | `generator` | `create_problem()` / `generate_problem()` entry points |

pub mod angle;
pub mod error;
pub mod evaluator;
pub mod generator;
pub mod models;
pub mod numbers;
pub mod problem;
pub mod render;
pub mod tree;

pub use error::RequirementsError;
pub use generator::{create_problem, generate_problem};
pub use models::{Arity, Operation, ProblemRequest, Requirements};
pub use problem::Problem;
pub use tree::EquationNode;
