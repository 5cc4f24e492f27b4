//! Pure formatting of call-time arguments onto a base path.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::{String, ToString};

use dotpath_utils::vec::FastVec;

use crate::args::Arg;

// -----------------------------------------------------------------------------
// format_path

/// Appends call-time arguments to a base path.
///
/// With no arguments the path is returned unchanged (borrowed). Otherwise
/// every argument is flattened into printable tokens, left to right,
/// preserving order:
///
/// - an [`Arg::Seq`] splices its elements in place, one level deep — an
///   element that is itself a sequence or mapping keeps its own joined
///   rendering (see [`Arg`]);
/// - an [`Arg::Map`] expands to one `key-value` token per entry, in
///   insertion order;
/// - any other argument is one token.
///
/// The path and all tokens are then joined with single spaces.
///
/// The function is pure: no side effects, no shared state, identical inputs
/// produce identical results.
///
/// # Examples
///
/// ```
/// use dotpath_tree::{Arg, format_path};
///
/// let path = "Down.The.Rabbit.Hole";
///
/// assert_eq!(format_path(path, &[]), path);
///
/// let args = [Arg::list(["In", "Wonderland"])];
/// assert_eq!(format_path(path, &args), "Down.The.Rabbit.Hole In Wonderland");
///
/// let args = [Arg::from("Alice"), Arg::pairs([("In", "Wonderland")])];
/// assert_eq!(
///     format_path(path, &args),
///     "Down.The.Rabbit.Hole Alice In-Wonderland",
/// );
/// ```
pub fn format_path<'a>(path: &'a str, args: &[Arg]) -> Cow<'a, str> {
    if args.is_empty() {
        return Cow::Borrowed(path);
    }

    let mut tokens: FastVec<String, 8> = FastVec::new();
    let data = tokens.data();

    for arg in args {
        match arg {
            Arg::Seq(items) => data.extend(items.iter().map(ToString::to_string)),
            Arg::Map(entries) => data.extend(
                entries
                    .iter()
                    .map(|(key, value)| format!("{key}-{value}")),
            ),
            scalar => data.push(scalar.to_string()),
        }
    }

    let mut out = String::from(path);
    for token in tokens.into_boxed_slice() {
        out.push(' ');
        out.push_str(&token);
    }
    Cow::Owned(out)
}

// -----------------------------------------------------------------------------
// Tests
