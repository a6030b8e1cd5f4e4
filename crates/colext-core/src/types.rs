//! Runtime sort-key values.
//!
//! Field accessors produce a `Value` per element; the dynamic order compares
//! these with the total order defined here instead of a compile-time `Ord`.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::schema::DataType;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    I32(i32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    Char(char),
    Str(String),
    Bin(Vec<u8>),
}

impl Value {
    /// `None` for `Null`, which carries no type of its own.
    pub fn data_type(&self) -> Option<DataType> {
        Some(match self {
            Value::Null => return None,
            Value::Bool(_) => DataType::Boolean,
            Value::I32(_) => DataType::Int32,
            Value::I64(_) => DataType::Int64,
            Value::U64(_) => DataType::UInt64,
            Value::F32(_) => DataType::Float32,
            Value::F64(_) => DataType::Float64,
            Value::Char(_) => DataType::Char,
            Value::Str(_) => DataType::Utf8,
            Value::Bin(_) => DataType::Binary,
        })
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        value_cmp(self, other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        value_cmp(self, other)
    }
}

/// Compare two values for sorting.
///
/// Nulls are sorted first, NaN sorts after every other float, and values of
/// different variants are ordered by variant rank.
fn value_cmp(a: &Value, b: &Value) -> Ordering {
    use Value::*;

    match (a, b) {
        (Null, Null) => Ordering::Equal,
        (Null, _) => Ordering::Less,
        (_, Null) => Ordering::Greater,
        (Bool(x), Bool(y)) => x.cmp(y),
        (I32(x), I32(y)) => x.cmp(y),
        (I64(x), I64(y)) => x.cmp(y),
        (U64(x), U64(y)) => x.cmp(y),
        (F32(x), F32(y)) => float_cmp(*x as f64, *y as f64, x.is_nan(), y.is_nan()),
        (F64(x), F64(y)) => float_cmp(*x, *y, x.is_nan(), y.is_nan()),
        (Char(x), Char(y)) => x.cmp(y),
        (Str(x), Str(y)) => x.cmp(y),
        (Bin(x), Bin(y)) => x.cmp(y),
        _ => variant_rank(a).cmp(&variant_rank(b)),
    }
}

fn float_cmp(x: f64, y: f64, x_nan: bool, y_nan: bool) -> Ordering {
    match (x_nan, y_nan) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    }
}

/// Assign a numeric order to variants for mixed-type comparisons.
fn variant_rank(v: &Value) -> u8 {
    use Value::*;
    match v {
        Null => 0,
        Bool(_) => 1,
        I32(_) => 2,
        I64(_) => 3,
        U64(_) => 4,
        F32(_) => 5,
        F64(_) => 6,
        Char(_) => 7,
        Str(_) => 8,
        Bin(_) => 9,
    }
}

/// Conversion from a plain Rust field type into a sort-key `Value`.
///
/// The associated constants describe the field statically, so a
/// `FieldTable` can build its descriptor without calling the getter.
pub trait IntoValue {
    const DATA_TYPE: DataType;
    const NULLABLE: bool = false;

    fn into_value(self) -> Value;
}

macro_rules! into_value {
    ($($ty:ty => $data_type:ident, $variant:ident as $cast:ty;)*) => {
        $(
            impl IntoValue for $ty {
                const DATA_TYPE: DataType = DataType::$data_type;

                fn into_value(self) -> Value {
                    Value::$variant(self as $cast)
                }
            }
        )*
    };
}

into_value! {
    i8 => Int32, I32 as i32;
    i16 => Int32, I32 as i32;
    i32 => Int32, I32 as i32;
    i64 => Int64, I64 as i64;
    u8 => UInt64, U64 as u64;
    u16 => UInt64, U64 as u64;
    u32 => UInt64, U64 as u64;
    u64 => UInt64, U64 as u64;
    usize => UInt64, U64 as u64;
    f32 => Float32, F32 as f32;
    f64 => Float64, F64 as f64;
}

impl IntoValue for bool {
    const DATA_TYPE: DataType = DataType::Boolean;

    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl IntoValue for char {
    const DATA_TYPE: DataType = DataType::Char;

    fn into_value(self) -> Value {
        Value::Char(self)
    }
}

impl IntoValue for String {
    const DATA_TYPE: DataType = DataType::Utf8;

    fn into_value(self) -> Value {
        Value::Str(self)
    }
}

impl IntoValue for &str {
    const DATA_TYPE: DataType = DataType::Utf8;

    fn into_value(self) -> Value {
        Value::Str(self.to_string())
    }
}

impl IntoValue for Vec<u8> {
    const DATA_TYPE: DataType = DataType::Binary;

    fn into_value(self) -> Value {
        Value::Bin(self)
    }
}

impl<V: IntoValue> IntoValue for Option<V> {
    const DATA_TYPE: DataType = V::DATA_TYPE;
    const NULLABLE: bool = true;

    fn into_value(self) -> Value {
        self.map(IntoValue::into_value).unwrap_or(Value::Null)
    }
}
