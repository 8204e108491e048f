use std::fmt;
use serde::{Deserialize, Serialize};

use crate::practice_engine::error::RequirementsError;

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// How many operands an operation takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arity {
    Unary,
    Binary,
}

impl Arity {
    pub fn operand_count(self) -> usize {
        match self {
            Arity::Unary  => 1,
            Arity::Binary => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Multiplication,
    Division,
    Square,
    Cube,
    SquareRoot,
    CubeRoot,
    Log10,
    Ln,
    Exp,
    Sin,
    Cos,
    Tan,
}

impl Operation {
    /// All twelve operations in canonical (checkbox) order.
    pub const ALL: [Operation; 12] = [
        Operation::Multiplication,
        Operation::Division,
        Operation::Square,
        Operation::Cube,
        Operation::SquareRoot,
        Operation::CubeRoot,
        Operation::Log10,
        Operation::Ln,
        Operation::Exp,
        Operation::Sin,
        Operation::Cos,
        Operation::Tan,
    ];

    pub fn arity(self) -> Arity {
        match self {
            Operation::Multiplication | Operation::Division => Arity::Binary,
            Operation::Square
            | Operation::Cube
            | Operation::SquareRoot
            | Operation::CubeRoot
            | Operation::Log10
            | Operation::Ln
            | Operation::Exp
            | Operation::Sin
            | Operation::Cos
            | Operation::Tan => Arity::Unary,
        }
    }

    /// Trig operations take their operand as an angle in degrees.
    pub fn is_trig(self) -> bool {
        matches!(self, Operation::Sin | Operation::Cos | Operation::Tan)
    }

    /// Human-readable label for option lists.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Multiplication => "Multiplication",
            Operation::Division       => "Division",
            Operation::Square         => "Square",
            Operation::Cube           => "Cube",
            Operation::SquareRoot     => "Square Root",
            Operation::CubeRoot       => "Cube Root",
            Operation::Log10          => "Log (base 10)",
            Operation::Ln             => "Natural Log",
            Operation::Exp            => "Exponential",
            Operation::Sin            => "Sine",
            Operation::Cos            => "Cosine",
            Operation::Tan            => "Tangent",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::Multiplication => "multiplication",
            Operation::Division       => "division",
            Operation::Square         => "square",
            Operation::Cube           => "cube",
            Operation::SquareRoot     => "squareRoot",
            Operation::CubeRoot       => "cubeRoot",
            Operation::Log10          => "log10",
            Operation::Ln             => "ln",
            Operation::Exp            => "exp",
            Operation::Sin            => "sin",
            Operation::Cos            => "cos",
            Operation::Tan            => "tan",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Requirements (user-facing generation settings)
// ---------------------------------------------------------------------------

pub const STEPS_RANGE: std::ops::RangeInclusive<u32> = 2..=5;
pub const MAGNITUDE_RANGE: std::ops::RangeInclusive<u32> = 1..=5;
pub const SIGNIFICANT_FIGURES_RANGE: std::ops::RangeInclusive<u32> = 1..=3;

/// What kind of problem to generate.
///
/// The generator trusts these values as given; use [`Requirements::new`] or
/// [`Requirements::validate`] at the input boundary to enforce the control
/// ranges and a non-empty operation set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirements {
    pub operations: Vec<Operation>,
    /// Bound on the nesting depth of the equation tree.
    pub steps: u32,
    /// Generated numbers use exponents in `-magnitude..=magnitude`.
    pub magnitude: u32,
    pub significant_figures: u32,
}

impl Default for Requirements {
    fn default() -> Self {
        Requirements {
            operations: vec![Operation::Multiplication, Operation::Division],
            steps: 2,
            magnitude: 2,
            significant_figures: 1,
        }
    }
}

impl Requirements {
    /// Build validated requirements. Duplicate operations are collapsed,
    /// keeping first occurrence order.
    pub fn new(
        operations: impl IntoIterator<Item = Operation>,
        steps: u32, magnitude: u32, significant_figures: u32,
    ) -> Result<Self, RequirementsError> {
        let mut ops: Vec<Operation> = Vec::new();
        for op in operations {
            if !ops.contains(&op) {
                ops.push(op);
            }
        }
        let requirements = Requirements {
            operations: ops,
            steps,
            magnitude,
            significant_figures,
        };
        requirements.validate()?;
        Ok(requirements)
    }

    /// Parse requirements from their JSON form and validate them.
    pub fn from_json(text: &str) -> Result<Self, RequirementsError> {
        let parsed: Requirements = serde_json::from_str(text)?;
        Requirements::new(
            parsed.operations, parsed.steps, parsed.magnitude, parsed.significant_figures,
        )
    }

    pub fn validate(&self) -> Result<(), RequirementsError> {
        if self.operations.is_empty() {
            return Err(RequirementsError::NoOperations);
        }
        if !STEPS_RANGE.contains(&self.steps) {
            return Err(RequirementsError::StepsOutOfRange(self.steps));
        }
        if !MAGNITUDE_RANGE.contains(&self.magnitude) {
            return Err(RequirementsError::MagnitudeOutOfRange(self.magnitude));
        }
        if !SIGNIFICANT_FIGURES_RANGE.contains(&self.significant_figures) {
            return Err(RequirementsError::SignificantFiguresOutOfRange(
                self.significant_figures,
            ));
        }
        Ok(())
    }

    /// Flip one operation on or off, like ticking its checkbox.
    ///
    /// Returns `false` and leaves the set untouched when asked to remove the
    /// last remaining operation.
    pub fn toggle_operation(&mut self, op: Operation) -> bool {
        match self.operations.iter().position(|&o| o == op) {
            Some(_) if self.operations.len() == 1 => false,
            Some(idx) => {
                self.operations.remove(idx);
                true
            }
            None => {
                self.operations.push(op);
                true
            }
        }
    }
}

/// Facade input: requirements plus an optional seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemRequest {
    pub requirements: Requirements,
    pub rng_seed: Option<u64>,
}

impl ProblemRequest {
    /// Entropy-seeded request for the given requirements.
    pub fn new(requirements: Requirements) -> Self {
        ProblemRequest { requirements, rng_seed: None }
    }

    pub fn seeded(requirements: Requirements, seed: u64) -> Self {
        ProblemRequest { requirements, rng_seed: Some(seed) }
    }
}
