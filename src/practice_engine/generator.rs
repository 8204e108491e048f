use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::practice_engine::{
    evaluator::evaluate,
    models::{ProblemRequest, Requirements},
    problem::Problem,
    render::render_latex,
    tree::build_tree,
};

/// Build, evaluate, and render one problem using the caller's random source.
///
/// `requirements` are trusted; validate them at the input boundary.
pub fn create_problem<R: Rng>(requirements: &Requirements, rng: &mut R) -> Problem {
    let tree = build_tree(rng, requirements);
    let answer = evaluate(&tree);
    let equation = render_latex(&tree);

    debug!(
        steps = requirements.steps,
        magnitude = requirements.magnitude,
        significant_figures = requirements.significant_figures,
        nodes = tree.node_count(),
        answer,
        "generated problem"
    );

    Problem::new(tree, answer, equation)
}

/// Entry point: seeds the RNG from the request and generates one problem.
pub fn generate_problem(request: ProblemRequest) -> Problem {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    create_problem(&request.requirements, &mut rng)
}
