use serde::{Deserialize, Serialize};

use crate::state_graph::models::{StateCache, StateId};

#[derive(Serialize, Deserialize, Debug)]
struct JsonSolution {
    frames: Vec<JsonFrame>,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonFrame {
    step: usize,
    key: String,
    depth: usize,
}

pub fn get_json_data(cache: &StateCache, path: &[StateId]) -> String {
    let frames: Vec<JsonFrame> = path
        .iter()
        .enumerate()
        .filter_map(|(step, &id)| {
            let state = cache.get_state(id)?;
            Some(JsonFrame {
                step,
                key: state.grid.key().as_str().to_string(),
                depth: state.depth,
            })
        })
        .collect();

    let solution = JsonSolution { frames };
    serde_json::to_string_pretty(&solution).unwrap()
}
