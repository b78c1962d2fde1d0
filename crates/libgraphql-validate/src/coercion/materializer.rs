use crate::coercion::CoercionError;
use crate::coercion::EnumShape;
use crate::coercion::Materialized;
use crate::coercion::ObjectShape;
use crate::coercion::PrimitiveKind;
use crate::coercion::Shape;
use crate::coercion::ShapeRegistry;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, CoercionError>;

/// Converts already-coerced runtime (JSON) values into [`Materialized`]
/// values of a requested [`Shape`].
///
/// * Object members are matched to source keys ignoring ASCII case. Unknown
///   source keys are ignored and members missing from the source take their
///   default value (or `null`).
/// * A `null` list materializes to an empty list, nullable or not.
/// * A `null` enum materializes to the enum's first member, nullable or not. Other enum values
///   match a member by name (ignoring ASCII case) or by discriminant.
/// * Primitives convert strings with locale-independent parsing and numbers
///   structurally. Floats convert to integers by rounding half to even.
#[derive(Clone, Copy, Debug)]
pub struct Materializer<'registry> {
    registry: &'registry ShapeRegistry,
}
impl<'registry> Materializer<'registry> {
    pub fn new(registry: &'registry ShapeRegistry) -> Self {
        Self { registry }
    }

    pub fn materialize(
        &self,
        shape: &Shape,
        value: &serde_json::Value,
    ) -> Result<Materialized> {
        match shape {
            Shape::Any => Ok(match value {
                serde_json::Value::Null => Materialized::Null,
                _ => Materialized::Json(value.clone()),
            }),

            Shape::Enum(shape_name) => {
                let enum_shape = self.registry.enum_shape(shape_name).ok_or_else(|| {
                    CoercionError::UnknownShape { shape_name: shape_name.to_owned() }
                })?;
                materialize_enum(enum_shape, value)
            },

            Shape::List(item_shape) => match value {
                serde_json::Value::Null => Ok(Materialized::List(vec![])),
                serde_json::Value::Array(items) =>
                    items.iter()
                        .enumerate()
                        .map(|(index, item)| {
                            self.materialize(item_shape, item).map_err(|err| {
                                CoercionError::InElement {
                                    index,
                                    source: Box::new(err),
                                }
                            })
                        })
                        .collect::<Result<Vec<_>>>()
                        .map(Materialized::List),
                _ => Err(CoercionError::ExpectedList { value: value.clone() }),
            },

            // Lists and enums have their own meaning for `null`.
            Shape::Nullable(inner) => match (inner.as_ref(), value) {
                (Shape::Enum(_) | Shape::List(_), _) => self.materialize(inner, value),
                (_, serde_json::Value::Null) => Ok(Materialized::Null),
                _ => self.materialize(inner, value),
            },

            Shape::Object(shape_name) => {
                let object_shape = self.registry.object_shape(shape_name).ok_or_else(|| {
                    CoercionError::UnknownShape { shape_name: shape_name.to_owned() }
                })?;
                self.materialize_object(object_shape, value)
            },

            Shape::Primitive(kind) => match value {
                serde_json::Value::Null => Ok(Materialized::Null),
                _ => convert_primitive(*kind, value),
            },
        }
    }

    fn materialize_object(
        &self,
        object_shape: &ObjectShape,
        value: &serde_json::Value,
    ) -> Result<Materialized> {
        let source = match value {
            serde_json::Value::Null => return Ok(Materialized::Null),
            serde_json::Value::Object(source) => source,
            _ => return Err(CoercionError::ExpectedObject {
                shape_name: object_shape.name().to_string(),
                value: value.clone(),
            }),
        };

        let mut members = IndexMap::new();
        for member in object_shape.members() {
            let source_value = source
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(member.name()))
                .map(|(_, source_value)| source_value)
                .or(member.default_value());

            let materialized = match source_value {
                Some(source_value) =>
                    self.materialize(member.shape(), source_value).map_err(|err| {
                        CoercionError::InMember {
                            member_name: member.name().to_string(),
                            source: Box::new(err),
                        }
                    })?,
                None => Materialized::Null,
            };
            members.insert(member.name().to_string(), materialized);
        }

        Ok(Materialized::Object(members))
    }
}

fn materialize_enum(
    enum_shape: &EnumShape,
    value: &serde_json::Value,
) -> Result<Materialized> {
    let member = match value {
        serde_json::Value::Null => enum_shape.first_member(),
        serde_json::Value::String(s) => enum_shape.find_by_name(s).or_else(|| {
            s.trim().parse::<i64>().ok().and_then(|n| enum_shape.find_by_value(n))
        }),
        serde_json::Value::Number(_) =>
            to_i64(value).and_then(|n| enum_shape.find_by_value(n)),
        _ => None,
    };

    match member {
        Some((name, value)) => Ok(Materialized::Enum {
            name: name.to_string(),
            value,
        }),
        None => Err(CoercionError::UnknownEnumValue {
            value: match value {
                serde_json::Value::String(s) => s.to_owned(),
                _ => value.to_string(),
            },
            enum_name: enum_shape.name().to_string(),
        }),
    }
}

fn convert_primitive(
    kind: PrimitiveKind,
    value: &serde_json::Value,
) -> Result<Materialized> {
    let converted = match kind {
        PrimitiveKind::Boolean => to_bool(value).map(Materialized::Boolean),
        PrimitiveKind::Float => to_f64(value).map(Materialized::Float),
        PrimitiveKind::Int => to_i64(value)
            .and_then(|i| i32::try_from(i).ok())
            .map(Materialized::Int),
        PrimitiveKind::Long => to_i64(value).map(Materialized::Long),
        PrimitiveKind::String => match value {
            serde_json::Value::String(s) => Some(Materialized::String(s.to_owned())),
            serde_json::Value::Number(n) => Some(Materialized::String(n.to_string())),
            serde_json::Value::Bool(b) => Some(Materialized::String(b.to_string())),
            _ => None,
        },
    };

    converted.ok_or_else(|| CoercionError::PrimitiveConversion {
        value: value.clone(),
        target: kind,
    })
}

fn to_bool(value: &serde_json::Value) -> Option<bool> {
    match value {
        serde_json::Value::Bool(b) => Some(*b),
        serde_json::Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        serde_json::Value::String(s) => {
            let s = s.trim();
            if s.eq_ignore_ascii_case("true") {
                Some(true)
            } else if s.eq_ignore_ascii_case("false") {
                Some(false)
            } else {
                None
            }
        },
        _ => None,
    }
}

fn to_f64(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn to_i64(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Bool(b) => Some(i64::from(*b)),
        serde_json::Value::Number(n) => n.as_i64().or_else(|| {
            let rounded = n.as_f64()?.round_ties_even();
            (rounded >= i64::MIN as f64 && rounded < i64::MAX as f64)
                .then_some(rounded as i64)
        }),
        serde_json::Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
