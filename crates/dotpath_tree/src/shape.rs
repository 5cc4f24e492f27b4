//! Typed projection of declared shapes over the dynamic tree.
//!
//! The [`shape!`] macro is the code-generation step that recovers fluent
//! member access for statically declared shapes; the dynamic [`Node`] API
//! stays available underneath (and *is* the projection for undeclared,
//! "typeless" trees).
//!
//! [`shape!`]: crate::shape
//! [`Node`]: crate::Node

/// Generates typed accessors for a declared nested shape.
///
/// Each `struct` in the input becomes a thin wrapper over [`Node`] with one
/// method per declared member:
///
/// - `Name: _` — a plain leaf; the method takes no arguments and resolves
///   the child node;
/// - `Name: fn(arg: Ty, ..)` — a function leaf; the method keeps the
///   declared argument list, converts every argument into an [`Arg`] and
///   resolves the child node with them;
/// - `Name: Shape` — a nested record; the method returns the named wrapper
///   over the cached child node.
///
/// Method names follow the declared member names verbatim, and all declared
/// members are generated unconditionally — the projection treats every
/// declared path as reachable.
///
/// Every wrapper exposes `from_node`/`node` so shapes can be rooted
/// anywhere in a tree, plus `root` (default string tree) and
/// `with_resolver` construction shorthands. Members named after one of
/// these four helpers collide with them; reach such children through the
/// dynamic [`Node`] API instead. Wrappers are handles: cloning or
/// recreating one is cheap, and the referential stability of children
/// lives in the underlying node cache.
///
/// # Examples
///
/// ```
/// use dotpath_tree::shape;
///
/// shape! {
///     pub struct Wonderland {
///         Rabbit: Rabbit,
///     }
///
///     pub struct Rabbit {
///         Hole: _,
///         Greet: fn(name: &str),
///     }
/// }
///
/// let land = Wonderland::root("Wonderland");
/// assert_eq!(land.Rabbit().Hole(), "Wonderland.Rabbit.Hole");
/// assert_eq!(land.Rabbit().Greet("Alice"), "Wonderland.Rabbit.Greet Alice");
/// ```
///
/// With a resolver, leaves resolve to the resolver's output type:
///
/// ```
/// use dotpath_tree::shape;
///
/// shape! {
///     struct Flags {
///         Enabled: _,
///     }
/// }
///
/// let flags = Flags::with_resolver("flags", |path, _args| path.ends_with("Enabled"));
/// assert!(flags.Enabled());
/// ```
///
/// [`Node`]: crate::Node
/// [`Arg`]: crate::Arg
#[macro_export]
macro_rules! shape {
    () => {};

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($members:tt)*
        }
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        $vis struct $name<R = $crate::__macro_exports::String> {
            node: $crate::Node<R>,
        }

        impl<R> ::core::clone::Clone for $name<R> {
            #[inline]
            fn clone(&self) -> Self {
                Self { node: self.node.clone() }
            }
        }

        impl<R> ::core::fmt::Debug for $name<R> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("node", &self.node)
                    .finish()
            }
        }

        impl $name<$crate::__macro_exports::String> {
            /// Roots this shape at a fresh tree with the default string
            /// behavior.
            #[allow(dead_code)]
            $vis fn root(root: &str) -> Self {
                Self::from_node($crate::Node::new(root))
            }
        }

        impl<R> $name<R> {
            /// Roots this shape at a fresh resolver-backed tree.
            #[allow(dead_code)]
            $vis fn with_resolver(
                root: &str,
                resolver: impl Fn(&str, &[$crate::Arg]) -> R + 'static,
            ) -> Self {
                Self::from_node($crate::Node::with_resolver(root, resolver))
            }

            /// Wraps an existing node.
            #[allow(dead_code)]
            $vis fn from_node(node: $crate::Node<R>) -> Self {
                Self { node }
            }

            /// The underlying dynamic node.
            #[allow(dead_code)]
            $vis fn node(&self) -> &$crate::Node<R> {
                &self.node
            }

            $crate::shape!(@members $vis R { $($members)* });
        }

        $crate::shape! { $($rest)* }
    };

    // ---- member munchers ----------------------------------------------

    (@members $vis:vis $R:ident {}) => {};

    (@members $vis:vis $R:ident {
        $member:ident : _ $(, $($rest:tt)*)?
    }) => {
        #[allow(dead_code, non_snake_case)]
        $vis fn $member(&self) -> $R {
            self.node.get(stringify!($member)).call()
        }

        $crate::shape!(@members $vis $R { $($($rest)*)? });
    };

    (@members $vis:vis $R:ident {
        $member:ident : fn($($arg:ident : $ty:ty),* $(,)?) $(, $($rest:tt)*)?
    }) => {
        #[allow(dead_code, non_snake_case)]
        $vis fn $member(&self, $($arg: $ty),*) -> $R {
            self.node
                .get(stringify!($member))
                .call_with(&[$($crate::Arg::from($arg)),*])
        }

        $crate::shape!(@members $vis $R { $($($rest)*)? });
    };

    (@members $vis:vis $R:ident {
        $member:ident : $shape:ident $(, $($rest:tt)*)?
    }) => {
        #[allow(dead_code, non_snake_case)]
        $vis fn $member(&self) -> $shape<$R> {
            $shape::from_node(self.node.get(stringify!($member)))
        }

        $crate::shape!(@members $vis $R { $($($rest)*)? });
    };
}
