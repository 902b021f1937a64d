// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Context values that fill the placeholders of a message template.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fmt;

use value_bag::ValueBag;

/// A context value.
///
/// The textual form of a value (its `Display` output) is what replaces a placeholder:
///
/// * scalars render canonically (`42`, `1.5`, `true`, the string itself);
/// * null renders as `NULL`;
/// * a stringable object, captured with [`Value::from_display`], renders through `Display`;
/// * a non-stringable object, captured with [`Value::from_object`], renders as its type name;
/// * sequences and mappings render as `array`.
///
/// Rendering never fails.
#[derive(Debug, Clone)]
pub struct Value<'v>(Repr<'v>);

#[derive(Debug, Clone)]
enum Repr<'v> {
    Null,
    Bag(ValueBag<'v>),
    Owned(String),
    Object(&'static str),
    Array,
}

impl<'v> Value<'v> {
    /// The null value.
    pub const fn null() -> Self {
        Value(Repr::Null)
    }

    /// A sequence or mapping; it renders as `array`.
    pub const fn array() -> Self {
        Value(Repr::Array)
    }

    /// Capture a stringable object.
    pub fn from_display<T: fmt::Display>(value: &'v T) -> Self {
        Value(Repr::Bag(ValueBag::from_display(value)))
    }

    /// Capture a stringable trait object.
    pub fn from_dyn_display(value: &'v dyn fmt::Display) -> Self {
        Value(Repr::Bag(ValueBag::from_dyn_display(value)))
    }

    /// Capture an object that has no textual form; it renders as its type name.
    pub fn from_object<T: ?Sized>(value: &T) -> Self {
        let _ = value;
        Value(Repr::Object(std::any::type_name::<T>()))
    }

    /// Whether this is the null value.
    pub fn is_null(&self) -> bool {
        match &self.0 {
            Repr::Null => true,
            Repr::Bag(bag) => bag.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Null => f.write_str("NULL"),
            Repr::Bag(bag) if bag.is_empty() => f.write_str("NULL"),
            Repr::Bag(bag) => fmt::Display::fmt(bag, f),
            Repr::Owned(s) => f.write_str(s),
            Repr::Object(name) => f.write_str(name),
            Repr::Array => f.write_str("array"),
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl<'v> From<$ty> for Value<'v> {
                fn from(value: $ty) -> Self {
                    Value(Repr::Bag(ValueBag::from(value)))
                }
            }
        )*
    };
}

impl_from_scalar![bool, char, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f64];

// `ValueBag` only borrows 128-bit integers and widens `f32`, so render these up front.
impl From<f32> for Value<'_> {
    fn from(value: f32) -> Self {
        Value(Repr::Owned(value.to_string()))
    }
}

impl From<u128> for Value<'_> {
    fn from(value: u128) -> Self {
        Value(Repr::Owned(value.to_string()))
    }
}

impl From<i128> for Value<'_> {
    fn from(value: i128) -> Self {
        Value(Repr::Owned(value.to_string()))
    }
}

impl<'v> From<&'v str> for Value<'v> {
    fn from(value: &'v str) -> Self {
        Value(Repr::Bag(ValueBag::from(value)))
    }
}

impl<'v> From<&'v String> for Value<'v> {
    fn from(value: &'v String) -> Self {
        Value::from(value.as_str())
    }
}

impl From<String> for Value<'_> {
    fn from(value: String) -> Self {
        Value(Repr::Owned(value))
    }
}

impl<'v> From<Cow<'v, str>> for Value<'v> {
    fn from(value: Cow<'v, str>) -> Self {
        match value {
            Cow::Borrowed(s) => Value::from(s),
            Cow::Owned(s) => Value::from(s),
        }
    }
}

impl From<()> for Value<'_> {
    fn from(_: ()) -> Self {
        Value::null()
    }
}

impl<'v, T: Into<Value<'v>>> From<Option<T>> for Value<'v> {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Value::null, Into::into)
    }
}

impl<'v> From<ValueBag<'v>> for Value<'v> {
    fn from(value: ValueBag<'v>) -> Self {
        Value(Repr::Bag(value))
    }
}

impl<T> From<&[T]> for Value<'_> {
    fn from(_: &[T]) -> Self {
        Value::array()
    }
}

impl<T> From<Vec<T>> for Value<'_> {
    fn from(_: Vec<T>) -> Self {
        Value::array()
    }
}

impl<T, const N: usize> From<[T; N]> for Value<'_> {
    fn from(_: [T; N]) -> Self {
        Value::array()
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for Value<'_> {
    fn from(_: HashMap<K, V, S>) -> Self {
        Value::array()
    }
}

impl<K, V> From<BTreeMap<K, V>> for Value<'_> {
    fn from(_: BTreeMap<K, V>) -> Self {
        Value::array()
    }
}

/// The values available to a message template, keyed by placeholder name.
///
/// Keys are unique: inserting an existing key replaces its value and keeps its position.
///
/// # Examples
///
/// ```
/// use logshim::Context;
///
/// let ctx = Context::new().with("id", 42).with("action", "login");
/// assert_eq!(ctx.len(), 2);
/// assert_eq!(ctx.get("id").unwrap().to_string(), "42");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context<'a> {
    entries: Vec<(Cow<'a, str>, Value<'a>)>,
}

impl<'a> Context<'a> {
    /// Create an empty context.
    pub fn new() -> Self {
        Context { entries: vec![] }
    }

    /// Add an entry and return the context.
    pub fn with(mut self, key: impl Into<Cow<'a, str>>, value: impl Into<Value<'a>>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add an entry, returning the value it replaced, if any.
    pub fn insert(
        &mut self,
        key: impl Into<Cow<'a, str>>,
        value: impl Into<Value<'a>>,
    ) -> Option<Value<'a>> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Look up the value of `key`.
    pub fn get(&self, key: &str) -> Option<&Value<'a>> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Value<'a>)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v))
    }
}

impl<'a, K, V> Extend<(K, V)> for Context<'a>
where
    K: Into<Cow<'a, str>>,
    V: Into<Value<'a>>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V> FromIterator<(K, V)> for Context<'a>
where
    K: Into<Cow<'a, str>>,
    V: Into<Value<'a>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut ctx = Context::new();
        ctx.extend(iter);
        ctx
    }
}

/// Build a [`Context`] from `key => value` pairs.
///
/// # Examples
///
/// ```
/// let ctx = logshim::context! {
///     "id" => 42,
///     "action" => "login",
/// };
/// assert_eq!(ctx.len(), 2);
///
/// let empty = logshim::context! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! context {
    () => {
        $crate::Context::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Context::new()$(.with($key, $value))+
    };
}
