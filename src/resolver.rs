//! Depth-first schema resolution against an injected environment.

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, trace};

use crate::env::{Environment, ProcessEnv};
use crate::error::ResolveError;
use crate::schema::{kind, Leaf, Schema};
use crate::value::Value;

/// Resolves `schema` against `env`, prepending `prefix` (no separator) to
/// every leaf's variable name.
///
/// Missing required variables are collected across the whole tree and
/// reported together in one [`ResolveError::MissingVariables`] after the
/// walk completes. An unrecognized leaf kind aborts immediately with
/// [`ResolveError::UnknownKind`].
pub fn resolve(
    env: &dyn Environment,
    prefix: &str,
    schema: &Schema,
) -> Result<Value, ResolveError> {
    debug!(prefix, "resolving configuration schema");
    let mut missing = IndexSet::new();
    let resolved = walk(env, prefix, "", schema, &mut missing)?;

    if missing.is_empty() {
        if let Some(value) = resolved {
            debug!(prefix, "configuration schema resolved");
            return Ok(value);
        }
    }
    Err(ResolveError::MissingVariables(
        missing.into_iter().collect(),
    ))
}

/// Resolves `schema` against the live process environment.
pub fn resolve_from_process_env(
    prefix: &str,
    schema: &Schema,
) -> Result<Value, ResolveError> {
    resolve(&ProcessEnv, prefix, schema)
}

fn walk(
    env: &dyn Environment,
    prefix: &str,
    key: &str,
    schema: &Schema,
    missing: &mut IndexSet<String>,
) -> Result<Option<Value>, ResolveError> {
    match schema {
        Schema::Group(children) => {
            let mut out = IndexMap::with_capacity(children.len());
            for (child_key, child) in children {
                // A missing required leaf yields no value; its key is left
                // out of the group and reported after the walk.
                if let Some(value) = walk(env, prefix, child_key, child, missing)? {
                    out.insert(child_key.clone(), value);
                }
            }
            Ok(Some(Value::Group(out)))
        }
        Schema::Leaf(leaf) => resolve_leaf(env, prefix, key, leaf, missing),
    }
}

fn resolve_leaf(
    env: &dyn Environment,
    prefix: &str,
    key: &str,
    leaf: &Leaf,
    missing: &mut IndexSet<String>,
) -> Result<Option<Value>, ResolveError> {
    let full_key = format!("{prefix}{}", leaf.var);
    let raw = env.get(&full_key);
    trace!(var = %full_key, found = raw.is_some(), "environment lookup");

    let Some(raw) = raw else {
        if let Some(default) = &leaf.default {
            // Defaults are trusted verbatim and bypass kind coercion.
            return Ok(Some(default.clone()));
        }
        missing.insert(full_key);
        return Ok(None);
    };

    match leaf.kind.as_str() {
        kind::STRING => Ok(Some(Value::String(raw))),
        kind::INTEGER => Ok(Some(parse_leading_integer(&raw))),
        other => Err(ResolveError::UnknownKind {
            // A bare top-level leaf has no enclosing key; its variable name
            // stands in.
            key: if key.is_empty() {
                leaf.var.clone()
            } else {
                key.to_string()
            },
            var: full_key,
            kind: other.to_string(),
        }),
    }
}

/// Parses the longest valid leading integer of `raw`: optional leading
/// whitespace, optional sign, then ASCII digits. Trailing non-numeric
/// characters are ignored. No leading digits yields the not-a-number
/// sentinel; the accumulator saturates at the `i64` bounds.
fn parse_leading_integer(raw: &str) -> Value {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        let digit = i64::from(byte - b'0');
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(digit)
        } else {
            value.saturating_add(digit)
        };
    }

    if seen_digit {
        Value::Integer(value)
    } else {
        Value::NotANumber
    }
}
