//! Physical pixel values used by layout reports and touch input.
//!
//! # Key Types
//!
//! - [`Px`] - A single physical pixel value, negative values allowed
//! - [`PxPosition`] - A touch or cursor position (x, y)
//! - [`PxSize`] - A measured size (width, height)
//!
//! Layout and touch input arrive in whole pixels. Scroll offsets and page
//! widths are fractional and are kept as `f32` by the consumers; use
//! [`Px::to_f32`] and [`Px::saturating_from_f32`] at the boundary.
//!
//! # Example
//!
//! ```
//! use carousel_ui::px::{Px, PxPosition, PxSize};
//!
//! let container = PxSize::new(Px::new(300), Px::new(300));
//! assert_eq!(container.width.to_f32() * 0.5, 150.0);
//!
//! let start = PxPosition::new(Px::new(200), Px::new(40));
//! let now = start.offset(Px::new(-200), Px::ZERO);
//! assert_eq!(now.x - start.x, Px::new(-200));
//! ```

/// A physical pixel value.
///
/// Supports negative values, which is what a leftward drag or an off-screen
/// page produces.
///
/// # Examples
///
/// ```
/// use carousel_ui::px::Px;
///
/// let a = Px::new(100);
/// let b = Px::new(-50);
/// assert_eq!(a - b, Px::new(150));
///
/// let max_px = Px::new(i32::MAX);
/// assert_eq!(max_px.saturating_add(Px::new(1)), max_px);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Px` from an i32 value.
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// Returns the raw i32 value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Returns `true` when the value is strictly greater than zero.
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Converts to f32.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Creates a `Px` from an f32 value, saturating at the numeric bounds
    /// instead of overflowing. The fractional part is truncated.
    ///
    /// ```
    /// use carousel_ui::px::Px;
    ///
    /// assert_eq!(Px::saturating_from_f32(42.7).raw(), 42);
    /// assert_eq!(Px::saturating_from_f32(f32::MAX).raw(), i32::MAX);
    /// assert_eq!(Px::saturating_from_f32(f32::MIN).raw(), i32::MIN);
    /// ```
    pub fn saturating_from_f32(value: f32) -> Self {
        let clamped_value = value.clamp(i32::MIN as f32, i32::MAX as f32);
        Px(clamped_value as i32)
    }

    /// Saturating addition.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Px(self.0.saturating_add(rhs.0))
    }

    /// Multiplies by an f32 factor and rounds to the nearest pixel.
    ///
    /// ```
    /// use carousel_ui::px::Px;
    ///
    /// assert_eq!(Px::new(-200).mul_f32(0.75), Px::new(-150));
    /// assert_eq!(Px::new(3).mul_f32(0.5), Px::new(2));
    /// ```
    pub fn mul_f32(self, rhs: f32) -> Self {
        Px::saturating_from_f32((self.0 as f32 * rhs).round())
    }
}

/// A 2D position in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxPosition {
    /// The x-coordinate in physical pixels
    pub x: Px,
    /// The y-coordinate in physical pixels
    pub y: Px,
}

impl PxPosition {
    /// Creates a new position from x and y coordinates.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }

    /// Offsets the position by the given deltas, saturating on overflow.
    pub fn offset(self, dx: Px, dy: Px) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// A 2D size in physical pixel space, as reported by a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PxSize {
    /// The width in physical pixels
    pub width: Px,
    /// The height in physical pixels
    pub height: Px,
}

impl PxSize {
    /// Creates a new size from width and height.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }

    /// Creates a size from raw pixel values.
    pub const fn from_raw(width: i32, height: i32) -> Self {
        Self {
            width: Px(width),
            height: Px(height),
        }
    }
}

impl std::ops::Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl std::ops::Div<i32> for Px {
    type Output = Self;

    fn div(self, rhs: i32) -> Self::Output {
        Px(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_arithmetic() {
        let a = Px(10);
        let b = Px(5);

        assert_eq!(a - b, Px(5));
        assert_eq!(a / 2, Px(5));
        assert_eq!(Px(-7) / 2, Px(-3));
    }

    #[test]
    fn test_px_saturating_add() {
        let max = Px(i32::MAX);
        assert_eq!(max.saturating_add(Px(1)), max);
        assert_eq!(Px(i32::MIN).saturating_add(Px(-1)), Px(i32::MIN));
    }

    #[test]
    fn test_saturating_from_f32() {
        assert_eq!(Px::saturating_from_f32(f32::MAX), Px(i32::MAX));
        assert_eq!(Px::saturating_from_f32(f32::MIN), Px(i32::MIN));
        assert_eq!(Px::saturating_from_f32(100.5), Px(100));
        assert_eq!(Px::saturating_from_f32(-100.5), Px(-100));
    }

    #[test]
    fn test_mul_f32_rounds_to_nearest() {
        assert_eq!(Px(-200).mul_f32(0.75), Px(-150));
        assert_eq!(Px(-201).mul_f32(0.75), Px(-151));
        assert_eq!(Px(10).mul_f32(0.75), Px(8));
    }

    #[test]
    fn test_offset_saturates() {
        let start = PxPosition::new(Px(10), Px(20));
        let now = start.offset(Px(-30), Px(5));
        assert_eq!(now, PxPosition::new(Px(-20), Px(25)));
        let edge = PxPosition::new(Px(i32::MAX), Px::ZERO).offset(Px(1), Px::ZERO);
        assert_eq!(edge.x, Px(i32::MAX));
    }

    #[test]
    fn test_px_size() {
        let size = PxSize::from_raw(300, 200);
        assert_eq!(size, PxSize::new(Px(300), Px(200)));
        assert!(size.width.is_positive());
        assert!(!PxSize::default().width.is_positive());
    }
}
