//! Line rendering: the positional formatter for messages, and prefix/color construction.

mod color;
mod prefix;
pub mod printf;

pub use color::{AnsiColor, colorize};
pub use prefix::{build_prefix, display_name};
pub use printf::{Arg, sprintf};
