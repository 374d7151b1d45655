//! Generated legal documents.

mod nda;

pub use nda::{format_long_date, generate, generate_on, NdaInput, NDA_TEMPLATE};
