// Matching engine: job description in, ordered consultant shortlist out.
// Pure and synchronous; handlers own the roster snapshot and call in.

pub mod filters;
pub mod handlers;
pub mod keywords;
pub mod predicate;
pub mod shortlist;
