//! Static rule tables consumed by the matching algorithms.
//!
//! Everything in here is read-only configuration data: skill categories and
//! aliases, soft-skill and tool keyword lists, domain keyword groups, and the
//! branch alias/relatedness tables. The tables are built once and shared
//! freely across concurrent evaluations.

pub mod branches;
pub mod skills;
