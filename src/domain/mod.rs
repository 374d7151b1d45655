//! Domain layer modules
//!
//! This module contains business domain logic:
//! - `document`: NDA generation
//! - `store`: Data-access operations and backends
//! - `template`: `{{variable}}` substitution

pub mod document;
pub mod store;
pub mod template;
