//! Utility functions

pub mod time;

pub use time::{
    display_outcome, display_result_value, format_millis, format_outcome, format_result_value,
};
