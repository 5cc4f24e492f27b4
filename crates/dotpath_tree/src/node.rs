//! The lazy path tree node.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use core::cell::{Cell, RefCell};
use core::fmt;

use dotpath_utils::default;
use dotpath_utils::hash::HashMap;

use crate::args::Arg;
use crate::format::format_path;

// -----------------------------------------------------------------------------
// Shared tree state

/// Per-tree state, shared by reference across every node of one tree.
///
/// Installed once at root construction, never reassigned.
struct Shared<R> {
    /// Resolves `(path, args)` into the call result.
    resolver: Box<dyn Fn(&str, &[Arg]) -> R>,
    /// Tree-wide count of node constructions.
    created: Cell<u64>,
}

// -----------------------------------------------------------------------------
// Node

/// A node of a lazy path tree.
///
/// A node is two things at once:
///
/// - **callable** — [`call`] and [`call_with`] resolve the node into a
///   value `R`: by default the dot-joined path string combined with the
///   call-time arguments, otherwise whatever the tree's resolver returns;
/// - **navigable** — [`get`] and [`at`] produce child nodes keyed by
///   arbitrary names or indices, built on first access and cached per node.
///
/// The two facets are independent: calling never touches the child cache,
/// navigating never consumes the call, and both can be repeated freely.
///
/// Navigating the same key on the same node twice returns the same child —
/// the same allocation, observable through [`is_same`] — and re-navigation
/// never constructs nodes again. [`constructions`] exposes the tree-wide
/// construction count.
///
/// Handles are cheap reference-counted clones. Any node keeps its own
/// subtree and the shared tree state alive on its own; dropping the root
/// does not invalidate handles to its descendants.
///
/// # Examples
///
/// Default trees resolve to path strings:
///
/// ```
/// use dotpath_tree::Node;
///
/// let simple = Node::new("Simple");
/// assert_eq!(simple.get("First").get("Second").call(), "Simple.First.Second");
/// ```
///
/// A resolver replaces the default behavior for the whole tree:
///
/// ```
/// use dotpath_tree::{Arg, Node};
///
/// let tree = Node::with_resolver("Root", |path, args| (String::from(path), args.len()));
///
/// let (path, argc) = tree.get("leaf").call_with(&[Arg::from(1), Arg::from(2)]);
/// assert_eq!(path, "Root.leaf");
/// assert_eq!(argc, 2);
/// ```
///
/// [`call`]: Node::call
/// [`call_with`]: Node::call_with
/// [`get`]: Node::get
/// [`at`]: Node::at
/// [`is_same`]: Node::is_same
/// [`constructions`]: Node::constructions
pub struct Node<R = String> {
    inner: Rc<Inner<R>>,
}

struct Inner<R> {
    /// Full dot-joined chain of keys from the root to this node.
    path: Box<str>,
    shared: Rc<Shared<R>>,
    /// Lazily populated, never evicted, owned by this node alone.
    children: RefCell<HashMap<Box<str>, Node<R>>>,
}

impl Node<String> {
    /// Creates the root of a tree with the default string behavior:
    /// calling any node returns its path combined with the call-time
    /// arguments (see [`format_path`]).
    ///
    /// An empty `root` creates an anonymous root: its own path is empty and
    /// first-level children start the path without a leading separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotpath_tree::Node;
    ///
    /// let named = Node::new("Simple");
    /// assert_eq!(named.get("Value").call(), "Simple.Value");
    ///
    /// let anonymous = Node::new("");
    /// assert_eq!(anonymous.get("x").get("y").call(), "x.y");
    /// ```
    pub fn new(root: &str) -> Self {
        Self::with_resolver(root, |path, args| format_path(path, args).into_owned())
    }
}

impl Default for Node<String> {
    /// An anonymous root, see [`Node::new`].
    #[inline]
    fn default() -> Self {
        Self::new("")
    }
}

impl<R> Node<R> {
    /// Creates the root of a tree whose calls delegate to `resolver`.
    ///
    /// The resolver receives the node's full path and the call-time
    /// arguments; its result is returned verbatim. It is installed once and
    /// shared by reference with every node of the tree.
    ///
    /// The tree performs no error handling of its own: a panicking resolver
    /// unwinds through the call and the tree stays valid and reusable.
    /// Recoverable failure is expressed by choosing `R = Result<..>` or
    /// `R = Option<..>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotpath_tree::Node;
    ///
    /// let lengths = Node::with_resolver("Root", |path, _args| path.len());
    /// assert_eq!(lengths.get("leaf").call(), "Root.leaf".len());
    /// ```
    pub fn with_resolver(root: &str, resolver: impl Fn(&str, &[Arg]) -> R + 'static) -> Self {
        let shared = Rc::new(Shared {
            resolver: Box::new(resolver),
            created: Cell::new(0),
        });
        Self::construct(Box::from(root), shared)
    }

    /// The full dot-joined path from the root to this node.
    #[inline]
    pub fn path(&self) -> &str {
        &self.inner.path
    }

    /// Returns the child node under `name`, creating it on first access.
    ///
    /// The child's path is this node's path and `name` joined with `.`;
    /// empty fragments contribute no segment. The child is cached in this
    /// node: later accesses return the same instance without constructing
    /// anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotpath_tree::Node;
    ///
    /// let root = Node::new("Root");
    /// let first = root.get("child");
    /// let again = root.get("child");
    ///
    /// assert!(first.is_same(&again));
    /// assert_eq!(first.path(), "Root.child");
    /// ```
    pub fn get(&self, name: &str) -> Node<R> {
        self.child(name)
    }

    /// Returns the child node under a numeric index, creating it on first
    /// access.
    ///
    /// The index is rendered in decimal and behaves exactly like [`get`]
    /// with that rendering, including the per-node cache.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotpath_tree::Node;
    ///
    /// let root = Node::new("");
    /// assert_eq!(root.get("names").at(0).get("name").call(), "names.0.name");
    /// ```
    ///
    /// [`get`]: Node::get
    pub fn at(&self, index: usize) -> Node<R> {
        self.child(&index.to_string())
    }

    /// Resolves the node with no arguments.
    ///
    /// Shorthand for [`call_with`] and an empty argument list.
    ///
    /// [`call_with`]: Node::call_with
    #[inline]
    pub fn call(&self) -> R {
        self.call_with(&[])
    }

    /// Resolves the node with call-time arguments.
    ///
    /// Default trees append the formatted arguments to the path (see
    /// [`format_path`]); resolver-backed trees pass path and arguments
    /// through to the resolver.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotpath_tree::{Arg, Node};
    ///
    /// let hole = Node::new("Down").get("The").get("Rabbit").get("Hole");
    /// assert_eq!(
    ///     hole.call_with(&[Arg::list(["In", "Wonderland"])]),
    ///     "Down.The.Rabbit.Hole In Wonderland",
    /// );
    /// ```
    pub fn call_with(&self, args: &[Arg]) -> R {
        (self.inner.shared.resolver)(&self.inner.path, args)
    }

    /// Returns how many nodes this tree has constructed so far, the root
    /// included.
    ///
    /// The count grows by one for every never-before-visited `(node, key)`
    /// pair and by nothing else; re-navigating cached paths leaves it
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotpath_tree::Node;
    ///
    /// let root = Node::new("Root");
    /// assert_eq!(root.constructions(), 1);
    ///
    /// root.get("a").get("b").call();
    /// assert_eq!(root.constructions(), 3);
    ///
    /// root.get("a").get("b").call();
    /// assert_eq!(root.constructions(), 3);
    /// ```
    pub fn constructions(&self) -> u64 {
        self.inner.shared.created.get()
    }

    /// Returns `true` when both handles refer to the same node.
    #[inline]
    pub fn is_same(&self, other: &Node<R>) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn construct(path: Box<str>, shared: Rc<Shared<R>>) -> Self {
        shared.created.set(shared.created.get() + 1);
        Self {
            inner: Rc::new(Inner {
                path,
                shared,
                children: RefCell::new(default()),
            }),
        }
    }

    /// Create-or-fetch: at most one construction per `(node, key)` pair.
    fn child(&self, key: &str) -> Node<R> {
        if let Some(hit) = self.inner.children.borrow().get(key) {
            return hit.clone();
        }

        let path = join_path(&self.inner.path, key);
        let child = Self::construct(path, Rc::clone(&self.inner.shared));
        self.inner
            .children
            .borrow_mut()
            .insert(Box::from(key), child.clone());
        child
    }
}

impl<R> Clone for Node<R> {
    /// Another handle to the **same** node, not a copy of the subtree.
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<R> fmt::Display for Node<R> {
    /// The node's full path.
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.path)
    }
}

impl<R> fmt::Debug for Node<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("path", &self.inner.path)
            .field("cached", &self.inner.children.borrow().len())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Path join

/// Joins two path fragments with `.`, skipping empty fragments.
fn join_path(base: &str, key: &str) -> Box<str> {
    if base.is_empty() {
        return Box::from(key);
    }
    if key.is_empty() {
        return Box::from(base);
    }

    let mut path = String::with_capacity(base.len() + 1 + key.len());
    path.push_str(base);
    path.push('.');
    path.push_str(key);
    path.into_boxed_str()
}

// -----------------------------------------------------------------------------
// Tests
