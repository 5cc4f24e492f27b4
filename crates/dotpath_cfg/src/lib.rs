#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Gate macros

/// Expands to the wrapped tokens unchanged.
///
/// The enabled half of an alias pair, see [`define_alias!`].
#[doc(hidden)]
#[macro_export]
macro_rules! __enabled {
    ($($tt:tt)*) => { $($tt)* };
}

/// Swallows the wrapped tokens.
///
/// The disabled half of an alias pair, see [`define_alias!`].
#[doc(hidden)]
#[macro_export]
macro_rules! __disabled {
    ($($tt:tt)*) => {};
}

// -----------------------------------------------------------------------------
// define_alias

/// Defines a named token-gating macro for each `#[cfg(...)]` predicate.
///
/// Each alias expands its input unchanged when the predicate holds and to
/// nothing otherwise. Aliases work in item and statement position alike, so
/// conditional `use` declarations, modules, and bookkeeping statements can
/// all share one label.
///
/// The predicate is evaluated in the **invoking** crate; an alias defined
/// over `#[cfg(feature = "std")]` therefore tracks the feature set of the
/// crate that called `define_alias!`, not of `dotpath_cfg`.
///
/// # Examples
///
/// ```
/// mod cfg {
///     dotpath_cfg::define_alias! {
///         #[cfg(all())] => always,
///         #[cfg(any())] => never,
///     }
/// }
///
/// cfg::always! {
///     const ENABLED: bool = true;
/// }
///
/// cfg::never! {
///     compile_error!("this block is discarded");
/// }
///
/// assert!(ENABLED);
/// ```
#[macro_export]
macro_rules! define_alias {
    ($( #[cfg($meta:meta)] => $alias:ident ),* $(,)?) => {
        $(
            #[cfg($meta)]
            pub use $crate::__enabled as $alias;

            #[cfg(not($meta))]
            pub use $crate::__disabled as $alias;
        )*
    };
}
