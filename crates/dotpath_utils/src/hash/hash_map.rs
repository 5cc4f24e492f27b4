//! Provide [`HashMap`] backed by a fixed-seed hasher.

use crate::hash::FixedHashState;

/// [`hashbrown::HashMap`] with [`FixedHashState`] as the default hash state.
///
/// Lookup results depend only on the keys, never on per-process hasher
/// randomization.
///
/// # Examples
///
/// ```
/// use dotpath_utils::hash::HashMap;
///
/// let mut children: HashMap<Box<str>, u32> = HashMap::default();
/// children.insert("Rabbit".into(), 1);
///
/// assert_eq!(children.get("Rabbit"), Some(&1));
/// ```
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;
