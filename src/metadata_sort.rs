/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
//! A companion utility, unrelated to the clustering core: sorts a
//! collection of vertices by a named piece of per-vertex metadata.
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::{CommunityError, CommunityResult};
use crate::graph::Vertex;
use crate::id::VertexId;

/// A metadata value attached to a vertex under some string key.
#[derive(Clone, Debug, PartialEq)]
pub enum MetadataValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl MetadataValue {
    fn variant_name(&self) -> &'static str {
        match self {
            MetadataValue::Int(_) => "int",
            MetadataValue::Float(_) => "float",
            MetadataValue::Str(_) => "str",
        }
    }

    fn partial_cmp_same_variant(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (MetadataValue::Int(a), MetadataValue::Int(b)) => a.partial_cmp(b),
            (MetadataValue::Float(a), MetadataValue::Float(b)) => a.partial_cmp(b),
            (MetadataValue::Str(a), MetadataValue::Str(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

/// Sorts `vertices` by the metadata stored under `key`, ascending or
/// descending. Fails with `InvalidArgument` when `key` is empty, when any
/// vertex is missing `key` in its metadata map, or when the stored values
/// are not all of the same variant.
pub fn sort_by_metadata<V: Vertex>(
    vertices: &[V],
    metadata: &HashMap<VertexId, HashMap<String, MetadataValue>>,
    key: &str,
    ascending: bool,
) -> CommunityResult<Vec<VertexId>> {
    if key.is_empty() {
        return Err(CommunityError::invalid_argument("sort key must not be empty"));
    }

    let mut values: Vec<(VertexId, &MetadataValue)> = Vec::with_capacity(vertices.len());
    let mut expected_variant: Option<&'static str> = None;
    for v in vertices {
        let id = v.id();
        let value = metadata
            .get(&id)
            .and_then(|m| m.get(key))
            .ok_or_else(|| CommunityError::invalid_argument(format!("vertex {} is missing metadata key '{}'", id, key)))?;
        match expected_variant {
            None => expected_variant = Some(value.variant_name()),
            Some(expected) if expected != value.variant_name() => {
                return Err(CommunityError::invalid_argument(format!(
                    "metadata key '{}' has mixed value types ({} vs {})",
                    key, expected, value.variant_name()
                )));
            }
            _ => {}
        }
        values.push((id, value));
    }

    values.sort_by(|(_, a), (_, b)| {
        let ord = a.partial_cmp_same_variant(b).unwrap_or(Ordering::Equal);
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });

    Ok(values.into_iter().map(|(id, _)| id).collect())
}
