use std::fmt;

use bytemuck::{Pod, Zeroable};

use crate::error::OutOfRangeError;

/// A color temperature in Kelvin.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Temperature(
	/// Kelvins. Finite and in the range `MIN..=MAX` (invariant).
	f64,
);

impl Temperature {
	/// Lower bound of the range in which the curve fit is accurate.
	pub const MIN: Self = Self(1000.0);
	/// Upper bound of the range in which the curve fit is accurate.
	pub const MAX: Self = Self(40_000.0);
	/// Daylight white, roughly D65.
	pub const NEUTRAL: Self = Self(6500.0);

	pub fn new(kelvin: f64) -> Result<Self, OutOfRangeError> {
		if (Self::MIN.0..=Self::MAX.0).contains(&kelvin) {
			Ok(Self(kelvin))
		} else {
			tracing::debug!(kelvin, "rejecting color temperature outside the fitted range");
			Err(OutOfRangeError { kelvin })
		}
	}

	/// Bounds `kelvin` to the supported range instead of rejecting it.
	/// NaN has no meaningful nearest bound and becomes [`Self::NEUTRAL`].
	#[must_use]
	pub fn saturating(kelvin: f64) -> Self {
		if kelvin.is_nan() {
			Self::NEUTRAL
		} else {
			Self(kelvin.clamp(Self::MIN.0, Self::MAX.0))
		}
	}

	#[must_use]
	pub const fn kelvin(self) -> f64 {
		self.0
	}

	#[must_use]
	pub fn to_rgb(self) -> Rgb {
		let t = self.0 / 100.0;
		let rgb = Rgb {
			red: clamp(red(t)),
			green: clamp(green(t)),
			blue: clamp(blue(t)),
		};
		tracing::trace!(kelvin = self.0, %rgb, "converted color temperature");
		rgb
	}
}

impl Default for Temperature {
	fn default() -> Self {
		Self::NEUTRAL
	}
}

impl TryFrom<f64> for Temperature {
	type Error = OutOfRangeError;

	fn try_from(kelvin: f64) -> Result<Self, Self::Error> {
		Self::new(kelvin)
	}
}

/// An 8-bit-per-channel color, laid out as packed RGB8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Rgb {
	pub red: u8,
	pub green: u8,
	pub blue: u8,
}

impl Rgb {
	/// Channel intensities in the range `0.0..=1.0`, suitable as a white point.
	#[must_use]
	pub fn normalized(self) -> [f32; 3] {
		[self.red, self.green, self.blue].map(|channel| f32::from(channel) / f32::from(u8::MAX))
	}
}

impl From<Rgb> for (u8, u8, u8) {
	fn from(rgb: Rgb) -> Self {
		(rgb.red, rgb.green, rgb.blue)
	}
}

impl From<Rgb> for [u8; 3] {
	fn from(rgb: Rgb) -> Self {
		[rgb.red, rgb.green, rgb.blue]
	}
}

impl fmt::Display for Rgb {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
	}
}

/// Views a run of colors as packed RGB8 bytes.
#[must_use]
pub fn as_bytes(colors: &[Rgb]) -> &[u8] {
	bytemuck::cast_slice(colors)
}

/// Converts a color temperature in Kelvin to an approximate sRGB color.
///
/// Accuracy is best between 1000K and 40000K, and inputs outside that range
/// (or non-finite ones) are rejected rather than fed to the logarithms.
/// Use [`Temperature::saturating`] to pin such inputs to the nearest bound instead.
pub fn convert(kelvin: f64) -> Result<Rgb, OutOfRangeError> {
	Temperature::new(kelvin).map(Temperature::to_rgb)
}

/// Rounds to the nearest integer and bounds the result to `0..=255`.
/// NaN becomes 0.
#[must_use]
pub fn clamp(value: f64) -> u8 {
	// This cast is saturating, and maps NaN to zero.
	value.round().clamp(0.0, 255.0) as u8
}

// Curve fits of the form `a + b*x + c*ln(x)` over the Tanner Helland data set.
// Each takes `t = kelvin / 100`. For `t` in `10.0..=400.0` every log argument is at least 8.

#[allow(clippy::unreadable_literal)]
fn red(t: f64) -> f64 {
	if t < 66.0 {
		255.0
	} else {
		let x = t - 55.0;
		351.97690566805693 + 0.114206453784165 * x - 40.25366309332127 * x.ln()
	}
}

#[allow(clippy::unreadable_literal)]
fn green(t: f64) -> f64 {
	if t < 66.0 {
		let x = t - 2.0;
		-155.25485562709179 - 0.44596950469579133 * x + 104.49216199393888 * x.ln()
	} else {
		let x = t - 50.0;
		325.4494125711974 + 0.07943456536662342 * x - 28.0852963507957 * x.ln()
	}
}

#[allow(clippy::unreadable_literal)]
fn blue(t: f64) -> f64 {
	if t >= 66.0 {
		255.0
	} else if t <= 20.0 {
		0.0
	} else {
		let x = t - 10.0;
		-254.76935184120902 + 0.8274096064007395 * x + 115.67994401066147 * x.ln()
	}
}
