//! The Satcast crate provides saturating and fallible conversions between
//! fixed-width integer types of any width and signedness.
//!
//! Converting with `as` silently truncates and reinterprets the sign, so that
//! `1_234_567_890_i32 as u16` is `722` and `-1_i32 as u32` is `4_294_967_295`.
//! The [`cast()`] function instead clamps to the nearest representable value:
//!
//! ```
//! use satcast::cast;
//!
//! assert_eq!(cast::<u16, i32>(1_234_567_890), 65_535);
//! assert_eq!(cast::<u32, i32>(-1),            0);
//! ```
//!
//! Whether a range check is needed is decided per type pair at compile time,
//! so conversions that can never lose information cost nothing extra. Where
//! clamping is not wanted, [`try_cast()`] reports a [`ConversionError`]
//! instead, and the [`SaturatingFrom`] and [`SaturatingInto`] traits offer the
//! same operation in method form.
//!
//! The crate also provides [`u63`], an unsigned integer that fits in both
//! [`u64`] and [`i64`], which takes part in all of the above.
//!



//		Global configuration																							

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cast_possible_wrap,
	clippy::cast_sign_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules																											

mod cast;
mod errors;
mod int;

#[path = "u63.rs"]
mod u63_mod;



//		Packages																										

pub use cast::{SaturatingFrom, SaturatingInto, cast, is_lossless, try_cast};
pub use errors::ConversionError;
pub use int::{FixedInt, WIDE_BITS};
pub use u63_mod::u63;
