//! Call-time argument values for the callable facet.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

// -----------------------------------------------------------------------------
// Arg

/// A single call-time argument.
///
/// The path formatter distinguishes three argument categories:
///
/// - **scalars** pass through as one token, rendered with their natural
///   `Display` form;
/// - **sequences** ([`Arg::Seq`]) are spliced into the token stream in
///   place, one level deep;
/// - **mappings** ([`Arg::Map`]) expand to one `key-value` token per entry,
///   in insertion order.
///
/// Conversions from common primitives are provided, so call sites usually
/// write `Arg::from(..)`, [`Arg::list`] or [`Arg::pairs`] instead of naming
/// variants.
///
/// The `Display` form of a value is its standalone token rendering; it is
/// what a sequence element keeps when the formatter splices only the outer
/// level (see [`format_path`]).
///
/// # Examples
///
/// ```
/// use dotpath_tree::Arg;
///
/// let name = Arg::from("Alice");
/// let place = Arg::pairs([("In", "Wonderland")]);
///
/// assert_eq!(name.to_string(), "Alice");
/// assert_eq!(place.to_string(), "In-Wonderland");
/// ```
///
/// [`format_path`]: crate::format_path
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// UTF-8 text.
    Str(Cow<'static, str>),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    UInt(u64),
    /// A floating point number.
    Float(f64),
    /// A boolean.
    Bool(bool),
    /// An ordered sequence, spliced one level by the formatter.
    Seq(Vec<Arg>),
    /// An order-preserving key-value mapping.
    Map(Vec<(Box<str>, Arg)>),
}

impl Arg {
    /// Borrows a static string without copying.
    #[inline]
    pub const fn literal(value: &'static str) -> Self {
        Self::Str(Cow::Borrowed(value))
    }

    /// Builds a sequence argument from anything convertible to [`Arg`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dotpath_tree::Arg;
    ///
    /// let seq = Arg::list(["In", "Wonderland"]);
    /// assert_eq!(seq, Arg::Seq(vec![Arg::from("In"), Arg::from("Wonderland")]));
    /// ```
    pub fn list<T: Into<Arg>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Builds a mapping argument from key-value pairs, keeping their order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotpath_tree::Arg;
    ///
    /// let map = Arg::pairs([("In", "Wonderland"), ("Down", "Under")]);
    /// assert_eq!(map.to_string(), "In-Wonderland,Down-Under");
    /// ```
    pub fn pairs<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Box<str>>,
        V: Into<Arg>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

// -----------------------------------------------------------------------------
// Token rendering

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
            Self::UInt(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Seq(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                Ok(())
            }
            Self::Map(entries) => {
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{key}-{value}")?;
                }
                Ok(())
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

impl From<&str> for Arg {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Str(Cow::Owned(String::from(value)))
    }
}

impl From<String> for Arg {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for Arg {
    #[inline]
    fn from(value: Cow<'static, str>) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for Arg {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<Arg>> for Arg {
    #[inline]
    fn from(value: Vec<Arg>) -> Self {
        Self::Seq(value)
    }
}

impl From<i64> for Arg {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for Arg {
    #[inline]
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<f64> for Arg {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

macro_rules! impl_from_number {
    ($($num:ty => $variant:ident as $repr:ty),* $(,)?) => {
        $(
            impl From<$num> for Arg {
                #[inline]
                fn from(value: $num) -> Self {
                    Self::$variant(value as $repr)
                }
            }
        )*
    };
}

impl_from_number! {
    i8 => Int as i64,
    i16 => Int as i64,
    i32 => Int as i64,
    isize => Int as i64,
    u8 => UInt as u64,
    u16 => UInt as u64,
    u32 => UInt as u64,
    usize => UInt as u64,
    f32 => Float as f64,
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::Arg;

    #[test]
    fn scalar_rendering() {
        assert_eq!(Arg::from(9_u32).to_string(), "9");
        assert_eq!(Arg::from(-3_i64).to_string(), "-3");
        assert_eq!(Arg::from(1.5).to_string(), "1.5");
        assert_eq!(Arg::from(true).to_string(), "true");
        assert_eq!(Arg::literal("Alice").to_string(), "Alice");
    }

    #[test]
    fn nested_values_keep_their_joined_form() {
        let outer = Arg::Seq(vec![Arg::list(["a", "b"]), Arg::from(1_u32)]);
        assert_eq!(outer.to_string(), "a,b,1");

        let map = Arg::Map(vec![("k".into(), Arg::list(["x", "y"]))]);
        assert_eq!(map.to_string(), "k-x,y");
    }

    #[test]
    fn pairs_keep_insertion_order() {
        let map = Arg::pairs([("z", 1_u32), ("a", 2_u32)]);
        assert_eq!(map.to_string(), "z-1,a-2");
    }
}
