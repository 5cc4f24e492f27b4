#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    dotpath_cfg::define_alias! {
        #[cfg(feature = "std")] => std,
        #[cfg(feature = "serde")] => serde,
    }
}

// -----------------------------------------------------------------------------
// no_std support

crate::cfg::std! {
    extern crate std;
}

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod args;
mod format;
mod node;
mod shape;

crate::cfg::serde! {
    mod ser;
}

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use args::Arg;
pub use format::format_path;
pub use node::Node;
