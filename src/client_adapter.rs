use serde_json::{json, Value};
use crate::practice_engine::{problem::Problem, Operation};

/// One entry of the operation checkbox list.
fn operation_option(op: Operation, selected: bool) -> Value {
    json!({
        "id": op.to_string(),
        "label": op.label(),
        "selected": selected,
    })
}

/// Checkbox list for every operation, marking the ones in `selected`.
pub fn operation_options(selected: &[Operation]) -> Value {
    Value::Array(
        Operation::ALL
            .iter()
            .map(|&op| operation_option(op, selected.contains(&op)))
            .collect(),
    )
}

/// Map a `Problem` to the JSON object the web client renders.
///
/// The answer stays `null` until `show_answer` is set, mirroring the
/// "Show Answer" button.
pub fn to_client_payload(problem: &Problem, show_answer: bool) -> Value {
    let answer = if show_answer {
        Value::String(problem.answer_text())
    } else {
        Value::Null
    };

    json!({
        "equation":  problem.equation(),
        "typeset":   problem.typeset(),
        "answer":    answer,
        "nodeCount": problem.node_count(),
        "tree":      problem.tree(),
    })
}
