//! Structured-data pretty printing: outlines, one-line forms and list helpers.

mod convert;
mod render;
mod value;

pub use convert::{format_json, print_struct, to_mapping};
pub use render::{
    INDENT_STEP, print_indexed, print_tree, render_flat, render_indexed_list, render_list,
    render_tree, value_as_string, write_indexed, write_tree,
};
pub use value::{Mapping, Scalar, Value};
