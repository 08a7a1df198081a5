#![warn(missing_docs)]

//! Wavefront OBJ import for the glint ray tracer.
//!
//! Reads the line-oriented OBJ subset a triangle renderer needs: `v`
//! vertex statements, `f` face statements (fan-triangulated from the
//! first vertex, so arbitrary convex polygons work), and `g` named
//! groups. Anything else (comments, normals, texture coordinates,
//! malformed statements, out-of-range face indices) is skipped and
//! counted, never fatal.
//!
//! Triangles are inserted straight into a caller-provided [`ShapeArena`];
//! [`ObjModel::into_group`] then wires the imported groups under a single
//! parent group ready to be added to a world.

mod error;

pub use error::ObjError;

use glint_math::{point, Tuple};
use glint_scene::{Shape, ShapeArena, ShapeId};
use std::path::Path;

/// The result of parsing an OBJ source: imported geometry plus parse
/// statistics.
#[derive(Debug)]
pub struct ObjModel {
    vertices: Vec<Tuple>,
    named_groups: Vec<(String, ShapeId)>,
    /// The group receiving faces that appear before any `g` statement.
    pub default_group: ShapeId,
    /// Number of lines that were skipped.
    pub ignored: usize,
}

impl ObjModel {
    /// A vertex by its 1-based OBJ index.
    pub fn vertex(&self, index: usize) -> Option<&Tuple> {
        if index == 0 {
            return None;
        }
        self.vertices.get(index - 1)
    }

    /// Number of vertices read.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// A named group's handle, if the file declared it.
    pub fn named_group(&self, name: &str) -> Option<ShapeId> {
        self.named_groups
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, id)| id)
    }

    /// The named groups in declaration order.
    pub fn named_groups(&self) -> impl Iterator<Item = (&str, ShapeId)> {
        self.named_groups.iter().map(|(n, id)| (n.as_str(), *id))
    }

    /// Gather the default group and every named group under one parent
    /// group, returning the parent's handle.
    pub fn into_group(self, arena: &mut ShapeArena) -> ShapeId {
        let parent = arena.insert(Shape::group());
        arena.add_child(parent, self.default_group);
        for (_, id) in self.named_groups {
            arena.add_child(parent, id);
        }
        parent
    }
}

/// Read and parse an OBJ file.
pub fn load_obj(path: impl AsRef<Path>, arena: &mut ShapeArena) -> Result<ObjModel, ObjError> {
    let source = std::fs::read_to_string(path)?;
    Ok(parse_obj(&source, arena))
}

/// Parse OBJ source text, inserting triangles into `arena`.
///
/// Parsing is total: every line either contributes geometry or bumps the
/// ignored counter.
pub fn parse_obj(source: &str, arena: &mut ShapeArena) -> ObjModel {
    let default_group = arena.insert(Shape::group());
    let mut model = ObjModel {
        vertices: Vec::new(),
        named_groups: Vec::new(),
        default_group,
        ignored: 0,
    };
    let mut current_group = default_group;

    for line in source.lines() {
        let mut tokens = line.split_whitespace();
        let consumed = match tokens.next() {
            Some("v") => parse_vertex(&mut model, tokens),
            Some("f") => parse_face(&mut model, arena, current_group, tokens),
            Some("g") => match tokens.next() {
                Some(name) => {
                    current_group = named_group_or_insert(&mut model, arena, name);
                    true
                }
                None => false,
            },
            _ => false,
        };
        if !consumed {
            model.ignored += 1;
        }
    }
    model
}

fn parse_vertex<'a>(model: &mut ObjModel, mut tokens: impl Iterator<Item = &'a str>) -> bool {
    let mut coord = || tokens.next().and_then(|t| t.parse::<f64>().ok());
    match (coord(), coord(), coord()) {
        (Some(x), Some(y), Some(z)) => {
            model.vertices.push(point(x, y, z));
            true
        }
        _ => false,
    }
}

/// Parse a face statement and fan-triangulate it from the first vertex.
/// Faces referencing unknown vertices are skipped whole.
fn parse_face<'a>(
    model: &mut ObjModel,
    arena: &mut ShapeArena,
    group: ShapeId,
    tokens: impl Iterator<Item = &'a str>,
) -> bool {
    let mut corners = Vec::new();
    for token in tokens {
        match token
            .parse::<usize>()
            .ok()
            .and_then(|i| model.vertex(i).copied())
        {
            Some(v) => corners.push(v),
            None => return false,
        }
    }
    if corners.len() < 3 {
        return false;
    }

    for i in 2..corners.len() {
        let tri = arena.insert(Shape::triangle(corners[0], corners[i - 1], corners[i]));
        arena.add_child(group, tri);
    }
    true
}

fn named_group_or_insert(model: &mut ObjModel, arena: &mut ShapeArena, name: &str) -> ShapeId {
    if let Some(id) = model.named_group(name) {
        return id;
    }
    let id = arena.insert(Shape::group());
    model.named_groups.push((name.to_string(), id));
    id
}
