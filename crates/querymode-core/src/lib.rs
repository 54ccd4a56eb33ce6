//! Mode classification for user-built questions: given a normalized query
//! description, decide which interactive mode applies and which contextual
//! actions it exposes.

pub mod mode;
pub mod query;
