//! Property normalization: the single translation boundary between the open
//! caller-facing property map and the closed, schema-shaped representation.

use crate::error::{CompileError, CompileWarning};
use crate::schema::{Constraint, PropertySpec, PropertyValue, SchemaRegistry, ValueKind};
use indexmap::IndexMap;
use itertools::Itertools;

pub(crate) struct PropertyNormalizer<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> PropertyNormalizer<'a> {
    pub(crate) fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Produces a map containing exactly the schema's declared keys for
    /// `type_name`, each legally typed, in declared order.
    ///
    /// Caller keys are matched case-insensitively against the canonical name
    /// and declared aliases; unmatched caller keys are dropped. Range
    /// violations clamp, bad choices and uncoercible values fall back to the
    /// default. All of these degrade with a warning instead of failing the
    /// compile.
    pub(crate) fn normalize(
        &self,
        node_id: &str,
        node_label: &str,
        type_name: &str,
        raw: &IndexMap<String, serde_json::Value>,
        warnings: &mut Vec<CompileWarning>,
    ) -> Result<IndexMap<String, PropertyValue>, CompileError> {
        let schema = self.registry.require(type_name, node_id)?;

        let mut normalized = IndexMap::with_capacity(schema.properties.len());
        let mut consumed: Vec<&str> = Vec::new();

        for spec in &schema.properties {
            let (winner, losers) = resolve_key(spec, raw);

            for loser in &losers {
                consumed.push(loser.as_str());
            }
            if let Some(winner) = winner {
                consumed.push(winner.as_str());
                for loser in losers {
                    warnings.push(CompileWarning::AliasCollision {
                        node: node_label.to_string(),
                        property: spec.name.clone(),
                        winner: winner.clone(),
                        ignored: loser.clone(),
                    });
                }
                let value = self.coerce(node_label, spec, &raw[winner.as_str()], warnings);
                normalized.insert(spec.name.clone(), value);
            } else {
                normalized.insert(spec.name.clone(), spec.default.clone());
            }
        }

        for key in raw.keys() {
            if !consumed.contains(&key.as_str()) {
                warnings.push(CompileWarning::PropertyDropped {
                    node: node_label.to_string(),
                    property: key.clone(),
                });
            }
        }

        Ok(normalized)
    }

    /// Coerces one caller value to the declared kind, clamping ranges and
    /// falling back to the default when the value cannot be read at all.
    fn coerce(
        &self,
        node_label: &str,
        spec: &PropertySpec,
        raw: &serde_json::Value,
        warnings: &mut Vec<CompileWarning>,
    ) -> PropertyValue {
        match spec.kind {
            ValueKind::Float => match read_f64(raw) {
                Some(v) => {
                    let v = self.clamp(node_label, spec, v, warnings);
                    PropertyValue::Float(v)
                }
                None => self.fallback(node_label, spec, warnings),
            },
            ValueKind::Integer => match read_f64(raw) {
                Some(v) => {
                    let v = self.clamp(node_label, spec, v.round(), warnings);
                    PropertyValue::Integer(v as i64)
                }
                None => self.fallback(node_label, spec, warnings),
            },
            ValueKind::Bool => match read_bool(raw) {
                Some(b) => PropertyValue::Bool(b),
                None => self.fallback(node_label, spec, warnings),
            },
            ValueKind::Choice => {
                let supplied = match raw {
                    serde_json::Value::String(s) => Some(s.clone()),
                    serde_json::Value::Number(n) => Some(n.to_string()),
                    _ => None,
                };
                let Some(supplied) = supplied else {
                    return self.fallback(node_label, spec, warnings);
                };
                let Constraint::OneOf(choices) = &spec.constraint else {
                    return PropertyValue::Text(supplied);
                };
                match choices
                    .iter()
                    .find(|c| c.eq_ignore_ascii_case(supplied.trim()))
                {
                    // Canonical casing from the schema, not the caller's.
                    Some(canonical) => PropertyValue::Text(canonical.clone()),
                    None => {
                        warnings.push(CompileWarning::InvalidChoice {
                            node: node_label.to_string(),
                            property: spec.name.clone(),
                            supplied,
                        });
                        spec.default.clone()
                    }
                }
            }
            ValueKind::Text => match raw {
                serde_json::Value::String(s) => PropertyValue::Text(s.clone()),
                _ => self.fallback(node_label, spec, warnings),
            },
        }
    }

    fn clamp(
        &self,
        node_label: &str,
        spec: &PropertySpec,
        value: f64,
        warnings: &mut Vec<CompileWarning>,
    ) -> f64 {
        let Constraint::Range { min, max } = &spec.constraint else {
            return value;
        };
        let (min, max) = (*min, *max);
        let clamped = value.clamp(min, max);
        if clamped != value {
            warnings.push(CompileWarning::PropertyClamped {
                node: node_label.to_string(),
                property: spec.name.clone(),
                supplied: value,
                min,
                max,
                clamped,
            });
        }
        clamped
    }

    fn fallback(
        &self,
        node_label: &str,
        spec: &PropertySpec,
        warnings: &mut Vec<CompileWarning>,
    ) -> PropertyValue {
        warnings.push(CompileWarning::UncoercibleValue {
            node: node_label.to_string(),
            property: spec.name.clone(),
            expected: spec.kind.name(),
        });
        spec.default.clone()
    }
}

/// Picks the caller key that supplies `spec`, plus any further keys that
/// matched the same property and lose the tie.
///
/// Resolution order: exact canonical name, then case-insensitive canonical,
/// then each declared alias (exact, then case-insensitive) in declared
/// order; case-insensitive ties resolve to the lexicographically smallest
/// key. The order guarantees the canonical spelling always beats legacy
/// casings, and that exactly one key wins.
fn resolve_key<'r>(
    spec: &PropertySpec,
    raw: &'r IndexMap<String, serde_json::Value>,
) -> (Option<&'r String>, Vec<&'r String>) {
    let accepted: Vec<&str> = std::iter::once(spec.name.as_str())
        .chain(spec.aliases.iter().map(|a| a.as_str()))
        .collect();

    let matches: Vec<&String> = raw
        .keys()
        .filter(|k| accepted.iter().any(|a| a.eq_ignore_ascii_case(k)))
        .collect();
    if matches.is_empty() {
        return (None, Vec::new());
    }

    let mut winner: Option<&String> = None;
    for name in &accepted {
        if let Some(exact) = matches.iter().find(|k| k.as_str() == *name) {
            winner = Some(*exact);
            break;
        }
        if let Some(ci) = matches
            .iter()
            .filter(|k| k.eq_ignore_ascii_case(name))
            .sorted()
            .next()
        {
            winner = Some(*ci);
            break;
        }
    }

    let winner = winner.expect("non-empty match set always yields a winner");
    let losers = matches
        .into_iter()
        .filter(|k| k.as_str() != winner.as_str())
        .collect();
    (Some(winner), losers)
}

fn read_f64(raw: &serde_json::Value) -> Option<f64> {
    match raw {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn read_bool(raw: &serde_json::Value) -> Option<bool> {
    match raw {
        serde_json::Value::Bool(b) => Some(*b),
        serde_json::Value::String(s) => {
            let s = s.trim();
            if s.eq_ignore_ascii_case("true") {
                Some(true)
            } else if s.eq_ignore_ascii_case("false") {
                Some(false)
            } else {
                None
            }
        }
        // Historical producers conflated 0/1 with booleans; accept exactly
        // those two.
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(v) if v == 0.0 => Some(false),
            Some(v) if v == 1.0 => Some(true),
            _ => None,
        },
        _ => None,
    }
}
