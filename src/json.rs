//! Pipelines over dynamically shaped [`serde_json::Value`]s.
//!
//! The statically typed drivers pick the input and target shape at compile
//! time. Here the shape is only known at run time, so the drivers check it
//! and report [`Error`]s instead:
//!
//! - arrays reduce element by element; objects reduce as `[key, value]`
//!   two-element arrays in key order; anything else is
//!   [`Error::UnsupportedInput`], raised before any element is consumed
//! - array targets append; object targets take `[string, value]` pairs and
//!   abort the run with [`Error::InvalidEntry`] on anything else; other
//!   targets are [`Error::UnsupportedTarget`]
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use transducers::{json, xform::map};
//!
//! let out = json::seq(json!({"x": 10, "y": 20}), map(|kv: serde_json::Value| {
//!     json!([kv[0], kv[1].as_i64().unwrap_or_default() + 1])
//! }));
//! assert_eq!(out, Ok(json!({"x": 11, "y": 21})));
//! ```

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::{
    compose::Transducer,
    error::{Error, Result},
    reduce::reduce_iter,
    step::Step,
    transformer::Transformer,
};

fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn check_target(target: &Value) -> Result<()> {
    match target {
        Value::Array(_) | Value::Object(_) => Ok(()),
        other => {
            let shape = shape_of(other);
            debug!(shape, "rejecting json target");
            Err(Error::UnsupportedTarget { shape })
        }
    }
}

fn entry(input: Value) -> Result<(String, Value)> {
    let found = match input {
        Value::Array(pair) if pair.len() == 2 => {
            let mut pair = pair.into_iter();
            match (pair.next(), pair.next()) {
                (Some(Value::String(key)), Some(value)) => return Ok((key, value)),
                _ => "pair with a non-string key",
            }
        }
        Value::Array(_) => "array that is not a pair",
        ref other => shape_of(other),
    };
    Err(Error::InvalidEntry { found })
}

/// Terminal transformer that accumulates into a JSON array or object.
///
/// The accumulator is a `Result`: the first invalid entry ends the run with
/// a reduced `Err`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueBuilder;

impl Transformer<Value> for ValueBuilder {
    type Acc = Result<Value>;

    fn step(&mut self, acc: Result<Value>, input: Value) -> Step<Result<Value>> {
        let appended = acc.and_then(|target| match target {
            Value::Array(mut items) => {
                items.push(input);
                Ok(Value::Array(items))
            }
            Value::Object(mut fields) => {
                let (key, value) = entry(input)?;
                fields.insert(key, value);
                Ok(Value::Object(fields))
            }
            other => Err(Error::UnsupportedTarget {
                shape: shape_of(&other),
            }),
        });
        match appended {
            Ok(target) => Step::Continue(Ok(target)),
            Err(err) => {
                debug!(%err, "json target rejected element");
                Step::Reduced(Err(err))
            }
        }
    }
}

/// Reduce a JSON array or object with `xf`, starting from `init`.
pub fn reduce<X>(input: Value, mut xf: X, init: X::Acc) -> Result<X::Acc>
where
    X: Transformer<Value>,
{
    let step = match input {
        Value::Array(items) => reduce_iter(items, &mut xf, init),
        Value::Object(fields) => {
            let pairs = fields
                .into_iter()
                .map(|(key, value)| Value::Array(vec![Value::String(key), value]));
            reduce_iter(pairs, &mut xf, init)
        }
        other => {
            let shape = shape_of(&other);
            debug!(shape, "rejecting json input");
            return Err(Error::UnsupportedInput { shape });
        }
    };
    trace!(early = step.is_reduced(), "json reduction finished");
    Ok(xf.result(step.into_inner()))
}

/// Accumulate `input`, transformed by `xform`, onto `target`.
pub fn into<X>(target: Value, xform: X, input: Value) -> Result<Value>
where
    X: Transducer<ValueBuilder>,
    X::Output: Transformer<Value, Acc = Result<Value>>,
{
    check_target(&target)?;
    reduce(input, xform.apply(ValueBuilder), Ok(target))?
}

/// Transform `input` into a fresh value of the same shape.
pub fn seq<X>(input: Value, xform: X) -> Result<Value>
where
    X: Transducer<ValueBuilder>,
    X::Output: Transformer<Value, Acc = Result<Value>>,
{
    let target = match &input {
        Value::Array(_) => Value::Array(Vec::new()),
        Value::Object(_) => Value::Object(Map::new()),
        other => {
            let shape = shape_of(other);
            debug!(shape, "rejecting json input");
            return Err(Error::UnsupportedInput { shape });
        }
    };
    into(target, xform, input)
}

pub fn to_array<X>(input: Value, xform: X) -> Result<Value>
where
    X: Transducer<ValueBuilder>,
    X::Output: Transformer<Value, Acc = Result<Value>>,
{
    into(Value::Array(Vec::new()), xform, input)
}

pub fn to_object<X>(input: Value, xform: X) -> Result<Value>
where
    X: Transducer<ValueBuilder>,
    X::Output: Transformer<Value, Acc = Result<Value>>,
{
    into(Value::Object(Map::new()), xform, input)
}
