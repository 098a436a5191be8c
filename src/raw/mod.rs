mod arena;
mod handle;
mod node;
mod raw_bst;
mod traverse;

pub(crate) use raw_bst::RawBst;
pub(crate) use traverse::{InOrder, IntoInOrder, PostOrder, PreOrder};
