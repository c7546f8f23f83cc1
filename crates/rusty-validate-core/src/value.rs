//! Value adapters the rule functions are generic over
//!
//! `None` from an adapter means "no value": every rule except `required`
//! passes on it, so `Option<T>` fields are only checked when present.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::Hash;

use crate::rules::collection::all_unique;

/// Whether a value counts as present for `required`
pub trait HasValue {
    fn has_value(&self) -> bool;
}

pub trait StrValue {
    fn str_value(&self) -> Option<&str>;
}

/// A number as the numeric rules compare it.
///
/// Integers stay integers so bounds near the edges of `i64`/`u64` compare
/// exactly; only a float on either side makes the comparison a float one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Int(i128),
    Float(f64),
}

impl Numeric {
    fn as_f64(self) -> f64 {
        match self {
            Numeric::Int(n) => n as f64,
            Numeric::Float(n) => n,
        }
    }

    /// `None` when a NaN is involved
    pub fn compare(self, other: Numeric) -> Option<Ordering> {
        match (self, other) {
            (Numeric::Int(a), Numeric::Int(b)) => Some(a.cmp(&b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

pub trait NumericValue {
    fn numeric_value(&self) -> Option<Numeric>;
}

/// Character count for strings, item count for collections
pub trait LenValue {
    fn len_value(&self) -> Option<usize>;
}

/// Whether every item of a collection is distinct
pub trait UniqueValue {
    fn unique_items(&self) -> Option<bool>;
}

impl HasValue for str {
    fn has_value(&self) -> bool {
        !self.is_empty()
    }
}

impl HasValue for String {
    fn has_value(&self) -> bool {
        !self.is_empty()
    }
}

impl HasValue for bool {
    fn has_value(&self) -> bool {
        *self
    }
}

impl<T> HasValue for Option<T> {
    fn has_value(&self) -> bool {
        self.is_some()
    }
}

impl<T> HasValue for Vec<T> {
    fn has_value(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> HasValue for [T] {
    fn has_value(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V, S> HasValue for HashMap<K, V, S> {
    fn has_value(&self) -> bool {
        !self.is_empty()
    }
}

impl<T, S> HasValue for HashSet<T, S> {
    fn has_value(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V> HasValue for BTreeMap<K, V> {
    fn has_value(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> HasValue for BTreeSet<T> {
    fn has_value(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: HasValue + ?Sized> HasValue for &T {
    fn has_value(&self) -> bool {
        (**self).has_value()
    }
}

impl<T: HasValue + ?Sized> HasValue for Box<T> {
    fn has_value(&self) -> bool {
        (**self).has_value()
    }
}

impl HasValue for Cow<'_, str> {
    fn has_value(&self) -> bool {
        !self.is_empty()
    }
}

impl StrValue for str {
    fn str_value(&self) -> Option<&str> {
        Some(self)
    }
}

impl StrValue for String {
    fn str_value(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl StrValue for Cow<'_, str> {
    fn str_value(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: StrValue> StrValue for Option<T> {
    fn str_value(&self) -> Option<&str> {
        self.as_ref().and_then(|value| value.str_value())
    }
}

impl<T: StrValue + ?Sized> StrValue for &T {
    fn str_value(&self) -> Option<&str> {
        (**self).str_value()
    }
}

impl<T: StrValue + ?Sized> StrValue for Box<T> {
    fn str_value(&self) -> Option<&str> {
        (**self).str_value()
    }
}

macro_rules! numeric_value {
    ($variant:ident: $($ty:ty),* $(,)?) => {
        $(
            impl HasValue for $ty {
                #[allow(clippy::float_cmp)]
                fn has_value(&self) -> bool {
                    *self != (0 as $ty)
                }
            }

            impl NumericValue for $ty {
                fn numeric_value(&self) -> Option<Numeric> {
                    Some(Numeric::$variant((*self).into()))
                }
            }
        )*
    };
}

numeric_value!(Int: i8, i16, i32, i64, i128, u8, u16, u32, u64);
numeric_value!(Float: f32, f64);

impl HasValue for isize {
    fn has_value(&self) -> bool {
        *self != 0
    }
}

impl HasValue for usize {
    fn has_value(&self) -> bool {
        *self != 0
    }
}

impl HasValue for u128 {
    fn has_value(&self) -> bool {
        *self != 0
    }
}

impl NumericValue for isize {
    fn numeric_value(&self) -> Option<Numeric> {
        Some(Numeric::Int(*self as i128))
    }
}

impl NumericValue for usize {
    fn numeric_value(&self) -> Option<Numeric> {
        Some(Numeric::Int(*self as i128))
    }
}

impl NumericValue for u128 {
    fn numeric_value(&self) -> Option<Numeric> {
        match i128::try_from(*self) {
            Ok(n) => Some(Numeric::Int(n)),
            Err(_) => Some(Numeric::Float(*self as f64)),
        }
    }
}

impl<T: NumericValue> NumericValue for Option<T> {
    fn numeric_value(&self) -> Option<Numeric> {
        self.as_ref().and_then(|value| value.numeric_value())
    }
}

impl<T: NumericValue + ?Sized> NumericValue for &T {
    fn numeric_value(&self) -> Option<Numeric> {
        (**self).numeric_value()
    }
}

impl LenValue for str {
    fn len_value(&self) -> Option<usize> {
        Some(self.chars().count())
    }
}

impl LenValue for String {
    fn len_value(&self) -> Option<usize> {
        Some(self.chars().count())
    }
}

impl LenValue for Cow<'_, str> {
    fn len_value(&self) -> Option<usize> {
        Some(self.chars().count())
    }
}

impl<T> LenValue for Vec<T> {
    fn len_value(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> LenValue for [T] {
    fn len_value(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> LenValue for VecDeque<T> {
    fn len_value(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<K, V, S> LenValue for HashMap<K, V, S> {
    fn len_value(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T, S> LenValue for HashSet<T, S> {
    fn len_value(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<K, V> LenValue for BTreeMap<K, V> {
    fn len_value(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> LenValue for BTreeSet<T> {
    fn len_value(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T: LenValue> LenValue for Option<T> {
    fn len_value(&self) -> Option<usize> {
        self.as_ref().and_then(|value| value.len_value())
    }
}

impl<T: LenValue + ?Sized> LenValue for &T {
    fn len_value(&self) -> Option<usize> {
        (**self).len_value()
    }
}

impl<T: Hash + Eq> UniqueValue for Vec<T> {
    fn unique_items(&self) -> Option<bool> {
        Some(all_unique(self))
    }
}

impl<T: Hash + Eq> UniqueValue for [T] {
    fn unique_items(&self) -> Option<bool> {
        Some(all_unique(self))
    }
}

impl<T: Hash + Eq> UniqueValue for VecDeque<T> {
    fn unique_items(&self) -> Option<bool> {
        Some(all_unique(self))
    }
}

impl<T, S> UniqueValue for HashSet<T, S> {
    fn unique_items(&self) -> Option<bool> {
        Some(true)
    }
}

impl<T> UniqueValue for BTreeSet<T> {
    fn unique_items(&self) -> Option<bool> {
        Some(true)
    }
}

impl<T: UniqueValue> UniqueValue for Option<T> {
    fn unique_items(&self) -> Option<bool> {
        self.as_ref().and_then(|value| value.unique_items())
    }
}

impl<T: UniqueValue + ?Sized> UniqueValue for &T {
    fn unique_items(&self) -> Option<bool> {
        (**self).unique_items()
    }
}
