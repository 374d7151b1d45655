//! Text templates with `{{variable}}` placeholders.
//!
//! # Example
//!
//! ```
//! use creator_collab_api::template::{substitute, Variables};
//!
//! let mut variables = Variables::new();
//! variables.insert("name".to_string(), "Ana".to_string());
//!
//! assert_eq!(substitute("Hello {{name}}", &variables), "Hello Ana");
//! assert_eq!(substitute("Hello {{name}}", &Variables::new()), "Hello {{name}}");
//! ```

mod substitution;

pub use substitution::{placeholders, substitute, Variables};
