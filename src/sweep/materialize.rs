//! Build a concrete configuration from a sweep document and one combination.

use super::axes::AxisPath;
use super::expand::Combination;
use super::tree::{dotted, Entry, Node, SweepDocument};
use crate::error::StructureError;
use serde_yaml::{Mapping, Value};

/// Rebuild `document` bottom-up with every axis replaced by its chosen value.
///
/// Axis keys keep their position and lose the marker. The combination must
/// come from this document's axes: choices are consumed in document order.
pub fn materialize(
    document: &SweepDocument,
    combination: &Combination,
) -> Result<Value, StructureError> {
    let mut choices = combination.choices().iter();
    let mut path = Vec::new();
    let mapping = rebuild(document.entries(), &mut choices, &mut path)?;

    if let Some((extra, _)) = choices.next() {
        return Err(StructureError::UnknownAxis {
            path: extra.to_string(),
        });
    }
    Ok(Value::Mapping(mapping))
}

fn rebuild<'a>(
    entries: &[Entry],
    choices: &mut impl Iterator<Item = &'a (AxisPath, Value)>,
    path: &mut Vec<String>,
) -> Result<Mapping, StructureError> {
    let mut mapping = Mapping::with_capacity(entries.len());
    for entry in entries {
        path.push(entry.label.clone());
        let value = match &entry.node {
            Node::Leaf(value) => value.clone(),
            Node::Map(children) => Value::Mapping(rebuild(children, choices, path)?),
            Node::Axis(_) => match choices.next() {
                Some((axis, chosen)) if axis.segments() == path.as_slice() => chosen.clone(),
                _ => return Err(StructureError::MissingChoice { path: dotted(path) }),
            },
        };
        path.pop();
        mapping.insert(entry.key.clone(), value);
    }
    Ok(mapping)
}
