//! Validation checks for time-entry collections.
//!
//! Three independent, pure checks gate every edit or insert: structural
//! validity of the record itself, pairwise non-overlap against the rest of
//! the collection, and the single-open-entry rule. Each returns a boolean
//! verdict so callers can report distinct, specific messages; callers
//! typically reject a change unless all three pass.

mod structural;
mod temporal;

pub use structural::is_structurally_valid;
pub use temporal::{has_no_overlap, is_single_open_consistent};
