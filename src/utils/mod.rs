pub mod constants;
pub mod string_utils;

pub use constants::*;
pub use string_utils::{insert_before_anchors, parse_flag};
