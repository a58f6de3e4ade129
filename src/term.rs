//! The item value boundary.
//!
//! [`SortedSet`](crate::SortedSet) is generic over any `T: Ord`. Hosts that
//! deal in dynamically-typed values go through this module instead: [`Value`]
//! models the full candidate domain a host can hand over, and [`Item`] is the
//! admitted, totally ordered subset. Conversion is the only gate; once an
//! `Item` exists it is safe to store.

use crate::error::Error;

/// A candidate value as received from a host.
///
/// Carries both the admitted kinds and the kinds the set rejects at the
/// boundary (floating-point numbers, references, pids, ports, and function
/// values). Rejected kinds exist here so rejection is expressible; they can
/// never reach a set.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Integer(i64),
    Bool(bool),
    Atom(String),
    Str(String),
    Nil,
    Tuple(Vec<Value>),
    List(Vec<Value>),
    /// Rejected: equality under IEEE 754 is not consistent with a total
    /// order (NaN), so floats never enter the set.
    Float(f64),
    /// Rejected: opaque handle with no portable order.
    Reference(u64),
    /// Rejected: process identifier.
    Pid(u32),
    /// Rejected: port identifier.
    Port(u32),
    /// Rejected: function value.
    Fun { arity: u8 },
}

impl Value {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Bool(_) => "bool",
            Value::Atom(_) => "atom",
            Value::Str(_) => "string",
            Value::Nil => "nil",
            Value::Tuple(_) => "tuple",
            Value::List(_) => "list",
            Value::Float(_) => "float",
            Value::Reference(_) => "reference",
            Value::Pid(_) => "pid",
            Value::Port(_) => "port",
            Value::Fun { .. } => "fun",
        }
    }
}

/// A value admitted into a set.
///
/// Items are totally ordered across kinds:
///
/// > integer < bool < atom < string < nil < tuple < list
///
/// and element-wise (lexicographically) within tuples and lists. Equality
/// coincides with `Ordering::Equal`, which is what lets the set treat an
/// equal insert as a duplicate rather than a neighbor.
///
/// # Examples
///
/// ```
/// use bucket_set::{Item, Value};
///
/// let item = Item::try_from(Value::Tuple(vec![
///     Value::Atom("score".into()),
///     Value::Integer(981),
/// ]))?;
/// assert_eq!(
///     item,
///     Item::Tuple(vec![Item::Atom("score".into()), Item::Integer(981)])
/// );
/// # Ok::<(), bucket_set::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Item {
    Integer(i64),
    Bool(bool),
    Atom(String),
    Str(String),
    Nil,
    Tuple(Vec<Item>),
    List(Vec<Item>),
}

impl Item {
    /// Builds an atom item.
    pub fn atom(name: impl Into<String>) -> Self {
        Item::Atom(name.into())
    }

    /// Builds a string item.
    pub fn str(text: impl Into<String>) -> Self {
        Item::Str(text.into())
    }
}

impl From<i64> for Item {
    fn from(n: i64) -> Self {
        Item::Integer(n)
    }
}

impl From<bool> for Item {
    fn from(b: bool) -> Self {
        Item::Bool(b)
    }
}

/// Converts an admitted item back into the host domain. Infallible; the
/// admitted kinds are a subset of the candidate kinds.
impl From<Item> for Value {
    fn from(item: Item) -> Self {
        match item {
            Item::Integer(n) => Value::Integer(n),
            Item::Bool(b) => Value::Bool(b),
            Item::Atom(a) => Value::Atom(a),
            Item::Str(s) => Value::Str(s),
            Item::Nil => Value::Nil,
            Item::Tuple(items) => Value::Tuple(items.into_iter().map(Value::from).collect()),
            Item::List(items) => Value::List(items.into_iter().map(Value::from).collect()),
        }
    }
}

/// The admission gate.
///
/// A composite containing a rejected kind anywhere inside it is itself
/// rejected; the error names the innermost offending kind. Conversion
/// happens before any lock or set mutation, so a rejected value leaves
/// every set untouched.
///
/// # Errors
///
/// [`Error::UnsupportedType`] for floats, references, pids, ports, fun
/// values, and any tuple or list containing one.
impl TryFrom<Value> for Item {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Error> {
        match value {
            Value::Integer(n) => Ok(Item::Integer(n)),
            Value::Bool(b) => Ok(Item::Bool(b)),
            Value::Atom(a) => Ok(Item::Atom(a)),
            Value::Str(s) => Ok(Item::Str(s)),
            Value::Nil => Ok(Item::Nil),
            Value::Tuple(values) => values
                .into_iter()
                .map(Item::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Item::Tuple),
            Value::List(values) => values
                .into_iter()
                .map(Item::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Item::List),
            rejected => Err(Error::UnsupportedType {
                kind: rejected.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admitted_kinds_convert() {
        for value in [
            Value::Integer(-3),
            Value::Bool(true),
            Value::Atom("ok".into()),
            Value::Str("text".into()),
            Value::Nil,
            Value::Tuple(vec![Value::Integer(1), Value::Nil]),
            Value::List(vec![Value::Str("a".into())]),
        ] {
            assert!(Item::try_from(value).is_ok());
        }
    }

    #[test]
    fn rejected_kinds_report_their_kind() {
        let cases = [
            (Value::Float(1.5), "float"),
            (Value::Reference(7), "reference"),
            (Value::Pid(1), "pid"),
            (Value::Port(2), "port"),
            (Value::Fun { arity: 2 }, "fun"),
        ];
        for (value, kind) in cases {
            assert_eq!(
                Item::try_from(value),
                Err(Error::UnsupportedType { kind })
            );
        }
    }

    #[test]
    fn composite_containing_rejected_kind_is_rejected() {
        let value = Value::Tuple(vec![
            Value::Integer(1),
            Value::List(vec![Value::Fun { arity: 0 }]),
        ]);
        assert_eq!(
            Item::try_from(value),
            Err(Error::UnsupportedType { kind: "fun" })
        );
    }

    #[test]
    fn cross_kind_order_is_documented_order() {
        let ladder = [
            Item::Integer(i64::MAX),
            Item::Bool(false),
            Item::atom("zzz"),
            Item::str("aaa"),
            Item::Nil,
            Item::Tuple(vec![]),
            Item::List(vec![]),
        ];
        for pair in ladder.windows(2) {
            assert!(pair[0] < pair[1], "{:?} should sort before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn scalar_conversions_build_the_matching_kind() {
        assert_eq!(Item::from(5), Item::Integer(5));
        assert_eq!(Item::from(true), Item::Bool(true));
        assert_eq!(Item::atom("ok"), Item::Atom("ok".into()));
        assert_eq!(Item::str("hi"), Item::Str("hi".into()));
    }

    #[test]
    fn composites_compare_lexicographically() {
        let a = Item::Tuple(vec![Item::Integer(1), Item::Integer(2)]);
        let b = Item::Tuple(vec![Item::Integer(1), Item::Integer(3)]);
        let c = Item::Tuple(vec![Item::Integer(1)]);
        assert!(a < b);
        assert!(c < a);
    }

    #[test]
    fn item_round_trips_through_value() {
        let item = Item::Tuple(vec![Item::atom("rank"), Item::Integer(4)]);
        assert_eq!(Item::try_from(Value::from(item.clone())), Ok(item));
    }
}
