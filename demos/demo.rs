//! Demo of the practice problem generator.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **One operation at a time**: a seeded problem for each of the twelve
//!    operations, so every template shows up at least once.
//! 2. **Depth sweep**: the same mixed operation set at steps 2 through 5.
//! 3. **Client payload**: the JSON object a web front-end would receive.
//!
//! Set `RUST_LOG=slide_rule_drill=debug` to see one log line per problem.

use slide_rule_drill::{
    generate_problem, to_client_payload, Operation, Problem, ProblemRequest, Requirements,
    RequirementsError,
};
use tracing_subscriber::EnvFilter;

fn print_problem(label: &str, problem: &Problem) {
    println!("  [{label}]  nodes: {}", problem.node_count());
    println!("    {}", problem.typeset());
    println!("    Answer: {}", problem.answer_text());
    println!();
}

fn main() -> Result<(), RequirementsError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // ── One operation at a time ──────────────────────────────────────────────
    println!();
    println!("══ Each operation (steps 2, magnitude 2, 2 significant figures) ══");
    println!();
    for (i, op) in Operation::ALL.into_iter().enumerate() {
        let requirements = Requirements::new([op], 2, 2, 2)?;
        let problem = generate_problem(ProblemRequest::seeded(requirements, 1000 + i as u64));
        print_problem(op.label(), &problem);
    }

    // ── Depth sweep ──────────────────────────────────────────────────────────
    println!();
    println!("══ Depth sweep: ×, ÷, √, log, sin ══");
    println!();
    let mixed = [
        Operation::Multiplication,
        Operation::Division,
        Operation::SquareRoot,
        Operation::Log10,
        Operation::Sin,
    ];
    for steps in 2..=5 {
        let requirements = Requirements::new(mixed, steps, 3, 1)?;
        let problem = generate_problem(ProblemRequest::seeded(requirements, 7000 + steps as u64));
        print_problem(&format!("steps {steps}"), &problem);
    }

    // ── Client payload ───────────────────────────────────────────────────────
    println!();
    println!("══ Client payload (answer revealed) ══");
    println!();
    let problem = generate_problem(ProblemRequest::seeded(Requirements::default(), 42));
    let payload = to_client_payload(&problem, true);
    println!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());

    Ok(())
}
