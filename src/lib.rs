//! Approximate RGB colors for black-body color temperatures.
//!
//! The conversion is a piecewise curve fit, good enough for photo
//! manipulation and display tinting but not for colorimetric work.
//!
//! ```
//! let candle = kelvin_rgb::convert(1900.0)?;
//! assert_eq!(candle.blue, 0);
//! assert!(kelvin_rgb::convert(100.0).is_err());
//! # Ok::<(), kelvin_rgb::OutOfRangeError>(())
//! ```

#![deny(
	absolute_paths_not_starting_with_crate,
	keyword_idents,
	macro_use_extern_crate,
	meta_variable_misuse,
	missing_abi,
	missing_copy_implementations,
	non_ascii_idents,
	nonstandard_style,
	noop_method_call,
	rust_2018_idioms,
	unused_qualifications
)]
#![warn(clippy::pedantic)]
// Channel values are bounded before they are narrowed.
#![allow(
	clippy::cast_precision_loss,
	clippy::cast_sign_loss,
	clippy::cast_possible_truncation
)]
#![forbid(unsafe_code)]

mod color;
mod error;

pub use crate::color::{as_bytes, clamp, convert, Rgb, Temperature};
pub use crate::error::OutOfRangeError;
