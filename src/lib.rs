#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod api_error;
pub mod error;
pub mod flatten;
pub mod tree;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use api_error::{API_ERROR_NAME, ApiError};
pub use error::Error;
pub use flatten::{flatten, flatten_value, flatten_with_prefix};
pub use tree::path::{PathSegment, is_index_key, join_key_path, parse_key_path};
pub use tree::{ERRORS_KEY, ErrorNode, ErrorTree, NodeShape};
pub use types::{ErrorResponse, FieldError};
