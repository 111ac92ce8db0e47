//! Free-text field parsers.
//!
//! Both parsers here are best-effort by contract: ingredient lines and
//! duration strings come from hand-typed recipe data, so anything that
//! cannot be understood degrades to a default instead of failing.

pub mod duration;
pub mod ingredient;
