/// An ergonomic abbreviation for [`Default::default()`].
///
/// Reads better than `Default::default()` at construction sites that fill
/// most fields explicitly, and than `HashMap::default()` where the container
/// type is already spelled out by the field.
///
/// # Example
///
/// ```
/// use dotpath_utils::default;
/// use dotpath_utils::hash::HashMap;
///
/// struct Cache {
///     hits: u64,
///     entries: HashMap<Box<str>, u64>,
/// }
///
/// let cache = Cache {
///     hits: 0,
///     entries: default(),
/// };
/// assert_eq!(cache.hits, 0);
/// assert!(cache.entries.is_empty());
/// ```
#[inline(always)]
pub fn default<T: Default>() -> T {
    T::default()
}
