use thiserror::Error;

use crate::color::Temperature;

/// The input temperature cannot be converted with the curve fit.
///
/// Raised for non-finite values and for anything outside
/// [`Temperature::MIN`]..=[`Temperature::MAX`], where the logarithm terms
/// would be undefined or the fit meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error(
	"color temperature {kelvin}K is outside the supported range {min}K..={max}K",
	min = Temperature::MIN.kelvin(),
	max = Temperature::MAX.kelvin(),
)]
pub struct OutOfRangeError {
	pub kelvin: f64,
}
