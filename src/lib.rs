#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use dotpath_cfg as cfg;
pub use dotpath_tree as tree;
pub use dotpath_utils as utils;
