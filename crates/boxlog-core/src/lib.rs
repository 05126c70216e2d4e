//! Boxed, colorized console messages and readable dumps of structured data.
//!
//! ```no_run
//! use boxlog_core::{Logger, Mapping, Value, print_tree};
//!
//! boxlog_core::error("Something went wrong!", Some("ERROR"));
//!
//! let quiet = Logger::new(false, 2);
//! quiet.success("Deployed", Some("CI"));
//!
//! let data = Mapping::from([
//!     ("user", Value::from("john_doe")),
//!     ("settings", Value::from(Mapping::from([("theme", "dark")]))),
//! ]);
//! print_tree(&data, "");
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod layout;
pub mod logger;
pub mod readable;
pub mod style;

pub use config::Settings;
pub use data::{
    Mapping, Scalar, Value, format_json, print_indexed, print_struct, print_tree, render_flat,
    render_indexed_list, render_list, render_tree, to_mapping, value_as_string, write_indexed,
    write_tree,
};
pub use error::{Error, Result};
pub use layout::{BoxLayout, MAX_PADDING, render_box};
pub use logger::{
    Logger, LoggerConfig, default_logger, error, info, message, ongoing, success, warning,
};
pub use style::{ColorChoice, Level, Role, Styler, Theme};
