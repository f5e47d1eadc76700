#![forbid(unsafe_code)]

//! Attributed text model for as-you-type formatting.
//!
//! # Role in diffable
//! `diffable-text` is the structural layer. It knows nothing about numbers or
//! locales; it only knows that displayed text is a sequence of [`Symbol`]s,
//! each tagged with an [`Attribute`] set, and that a caret must rest on a
//! boundary that makes sense for those attributes.
//!
//! # Primary responsibilities
//! - **Snapshot**: immutable-by-convention attributed character sequence.
//! - **Field**: a snapshot plus a selection, with caret autocorrection.
//! - **Similarities**: prefix/suffix alignment used to carry a selection
//!   across a reformat.
//! - **Positions**: translation between snapshot indices and platform text
//!   offsets (UTF-16, UTF-8, or characters).

pub mod attribute;
pub mod carets;
pub mod field;
pub mod position;
pub mod similarities;
pub mod snapshot;
pub mod symbol;

pub use attribute::Attribute;
pub use carets::{Bound, Direction, Intent, Peek};
pub use field::Field;
pub use position::{Encoding, Positions};
pub use similarities::{Alignment, Comparator, Instruction, Reformatting};
pub use snapshot::Snapshot;
pub use symbol::Symbol;
