//! Preset example graphs.
//!
//! Edge insertion order matches the interactive editor's examples, so the
//! traces produced on these graphs are reproducible across both.

use std::f64::consts::PI;

use crate::config::{CompletePreset, GridPreset, StarPreset, TreePreset};
use crate::error::GraphResult;

use super::model::Graph;
use super::types::{NodeId, Position};

/// Rectangular grid; each cell connects right, then down.
///
/// # Errors
/// * `GraphError::InvalidConfig` - preset failed validation
pub fn grid(preset: &GridPreset) -> GraphResult<Graph> {
    preset.validate()?;
    let mut graph = Graph::new();
    let mut ids: Vec<NodeId> = Vec::with_capacity(preset.rows * preset.cols);

    for row in 0..preset.rows {
        for col in 0..preset.cols {
            ids.push(graph.add_node(Position::new(
                preset.origin.x + col as f64 * preset.spacing,
                preset.origin.y + row as f64 * preset.spacing,
            )));
        }
    }

    for row in 0..preset.rows {
        for col in 0..preset.cols {
            let current = row * preset.cols + col;
            if col + 1 < preset.cols {
                graph.add_edge(ids[current], ids[current + 1], None)?;
            }
            if row + 1 < preset.rows {
                graph.add_edge(ids[current], ids[current + preset.cols], None)?;
            }
        }
    }

    Ok(graph)
}

/// Star around `center`; leaves are placed counter-clockwise from angle 0.
///
/// # Errors
/// * `GraphError::InvalidConfig` - preset failed validation
pub fn star(preset: &StarPreset, center: Position) -> GraphResult<Graph> {
    preset.validate()?;
    let mut graph = Graph::new();
    let hub = graph.add_node(center);

    for i in 0..preset.leaves {
        let leaf = graph.add_node(on_circle(center, preset.radius, i, preset.leaves));
        graph.add_edge(hub, leaf, None)?;
    }

    Ok(graph)
}

/// Complete binary tree; every child connects to its parent as it is added.
///
/// # Errors
/// * `GraphError::InvalidConfig` - no levels, more than
///   `TreePreset::MAX_LEVELS`, or bad spacing
pub fn binary_tree(preset: &TreePreset, center_x: f64) -> GraphResult<Graph> {
    preset.validate()?;
    let mut graph = Graph::new();

    let root = graph.add_node(Position::new(center_x, preset.root_y));
    let mut current_level = vec![root];

    for level in 1..preset.levels {
        let width = 1usize << level;
        let level_width = (width - 1) as f64 * preset.spacing;
        let start_x = center_x - level_width / 2.0;
        let mut next_level = Vec::with_capacity(width);

        for i in 0..width {
            let child = graph.add_node(Position::new(
                start_x + i as f64 * preset.spacing,
                preset.root_y + level as f64 * preset.spacing,
            ));
            next_level.push(child);
            if let Some(&parent) = current_level.get(i / 2) {
                graph.add_edge(parent, child, None)?;
            }
        }

        current_level = next_level;
    }

    Ok(graph)
}

/// Complete graph on a circle around `center`; edges added for all i < j.
///
/// # Errors
/// * `GraphError::InvalidConfig` - preset failed validation
pub fn complete(preset: &CompletePreset, center: Position) -> GraphResult<Graph> {
    preset.validate()?;
    let mut graph = Graph::new();
    let ids: Vec<NodeId> = (0..preset.nodes)
        .map(|i| graph.add_node(on_circle(center, preset.radius, i, preset.nodes)))
        .collect();

    for (i, &a) in ids.iter().enumerate() {
        for &b in &ids[i + 1..] {
            graph.add_edge(a, b, None)?;
        }
    }

    Ok(graph)
}

fn on_circle(center: Position, radius: f64, index: usize, count: usize) -> Position {
    let angle = index as f64 * 2.0 * PI / count as f64;
    Position::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}
