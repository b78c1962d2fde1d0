use crate::ast;
use crate::types::ScalarCoercion;
use inherent::inherent;

/// `Int`: a signed 32-bit integer.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntScalar;

#[inherent]
impl ScalarCoercion for IntScalar {
    pub fn serialize(&self, value: &serde_json::Value) -> Option<serde_json::Value> {
        self.parse_value(value)
    }

    pub fn parse_value(&self, value: &serde_json::Value) -> Option<serde_json::Value> {
        if let Some(i) = value.as_i64() {
            return i32::try_from(i).ok().map(serde_json::Value::from);
        }
        let f = value.as_f64()?;
        if f.fract() == 0.0 && f >= i32::MIN as f64 && f <= i32::MAX as f64 {
            Some(serde_json::Value::from(f as i32))
        } else {
            None
        }
    }

    pub fn parse_literal(&self, value: &ast::Value) -> Option<serde_json::Value> {
        match value {
            ast::Value::Int(i) => i32::try_from(*i).ok().map(serde_json::Value::from),
            _ => None,
        }
    }
}

/// `Float`: a double-precision floating point number. Int literals are
/// accepted as well.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloatScalar;

#[inherent]
impl ScalarCoercion for FloatScalar {
    pub fn serialize(&self, value: &serde_json::Value) -> Option<serde_json::Value> {
        self.parse_value(value)
    }

    pub fn parse_value(&self, value: &serde_json::Value) -> Option<serde_json::Value> {
        value.as_f64().map(serde_json::Value::from)
    }

    pub fn parse_literal(&self, value: &ast::Value) -> Option<serde_json::Value> {
        match value {
            ast::Value::Float(f) => Some(serde_json::Value::from(*f)),
            ast::Value::Int(i) => Some(serde_json::Value::from(*i as f64)),
            _ => None,
        }
    }
}

/// `String`: UTF-8 text.
#[derive(Clone, Copy, Debug, Default)]
pub struct StringScalar;

#[inherent]
impl ScalarCoercion for StringScalar {
    pub fn serialize(&self, value: &serde_json::Value) -> Option<serde_json::Value> {
        match value {
            serde_json::Value::String(_) => Some(value.clone()),
            serde_json::Value::Bool(b) => Some(serde_json::Value::String(b.to_string())),
            serde_json::Value::Number(n) => Some(serde_json::Value::String(n.to_string())),
            _ => None,
        }
    }

    pub fn parse_value(&self, value: &serde_json::Value) -> Option<serde_json::Value> {
        value.is_string().then(|| value.clone())
    }

    pub fn parse_literal(&self, value: &ast::Value) -> Option<serde_json::Value> {
        value.as_str().map(serde_json::Value::from)
    }
}

/// `Boolean`: `true` or `false`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BooleanScalar;

#[inherent]
impl ScalarCoercion for BooleanScalar {
    pub fn serialize(&self, value: &serde_json::Value) -> Option<serde_json::Value> {
        self.parse_value(value)
    }

    pub fn parse_value(&self, value: &serde_json::Value) -> Option<serde_json::Value> {
        value.is_boolean().then(|| value.clone())
    }

    pub fn parse_literal(&self, value: &ast::Value) -> Option<serde_json::Value> {
        match value {
            ast::Value::Boolean(b) => Some(serde_json::Value::Bool(*b)),
            _ => None,
        }
    }
}

/// `ID`: an opaque identifier written as a String or Int.
///
/// String input that is itself wrapped in a pair of double quotes (e.g. a
/// JSON-encoded id such as `"\"12345\""`) has that one pair stripped.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdScalar;

impl IdScalar {
    fn coerce_str(s: &str) -> serde_json::Value {
        let unquoted = s.strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or(s);
        serde_json::Value::String(unquoted.to_string())
    }
}

#[inherent]
impl ScalarCoercion for IdScalar {
    pub fn serialize(&self, value: &serde_json::Value) -> Option<serde_json::Value> {
        match value {
            serde_json::Value::String(s) => Some(serde_json::Value::String(s.to_owned())),
            serde_json::Value::Number(n) => Some(serde_json::Value::String(n.to_string())),
            _ => None,
        }
    }

    pub fn parse_value(&self, value: &serde_json::Value) -> Option<serde_json::Value> {
        match value {
            serde_json::Value::String(s) => Some(Self::coerce_str(s)),
            serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => Some(value.clone()),
            _ => None,
        }
    }

    pub fn parse_literal(&self, value: &ast::Value) -> Option<serde_json::Value> {
        match value {
            ast::Value::String(s) => Some(Self::coerce_str(s)),
            ast::Value::Int(i) => Some(serde_json::Value::from(*i)),
            _ => None,
        }
    }
}

/// The coercion used for a schema-declared scalar that was not given an
/// implementation of its own: every non-null literal and runtime value is
/// accepted unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnyScalar;

#[inherent]
impl ScalarCoercion for AnyScalar {
    pub fn serialize(&self, value: &serde_json::Value) -> Option<serde_json::Value> {
        Some(value.clone())
    }

    pub fn parse_value(&self, value: &serde_json::Value) -> Option<serde_json::Value> {
        Some(value.clone())
    }

    pub fn parse_literal(&self, value: &ast::Value) -> Option<serde_json::Value> {
        value.to_json()
    }
}
