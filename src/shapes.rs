//! Rectangle/square hierarchy with a deliberate substitution defect.
//!
//! [`Square`] keeps both sides equal inside the mutators of
//! [`Rectangular`], which quietly breaks callers that resize through the
//! trait. [`set_height_and_check`] makes the breakage observable. The
//! defect is the exhibit; the cure is [`Rectangle::square`] plus
//! [`Rectangle::is_square`], which make the subtype unnecessary.

use std::fmt;

/// Width/height accessors and mutators with a derived area.
///
/// Implied contract: `set_width` changes only the width, `set_height`
/// changes only the height.
pub trait Rectangular {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_width(&mut self, width: u32);
    fn set_height(&mut self, height: u32);

    /// Area derived from the current sides.
    fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}

/// An honest rectangle: the sides vary independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A square-shaped rectangle. Together with [`Rectangle::is_square`],
    /// this replaces the broken subtype below.
    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    /// Whether the sides currently happen to be equal.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

impl Rectangular for Rectangle {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    fn set_height(&mut self, height: u32) {
        self.height = height;
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "width: {}, height: {}", self.width, self.height)
    }
}

/// A "rectangle" whose mutators keep both sides equal.
///
/// This is the substitution defect on display: the type satisfies
/// [`Rectangular`] syntactically while violating its contract. Do not
/// repair it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    size: u32,
}

impl Square {
    pub fn new(size: u32) -> Self {
        Self { size }
    }
}

impl Rectangular for Square {
    fn width(&self) -> u32 {
        self.size
    }

    fn height(&self) -> u32 {
        self.size
    }

    // Both mutators resize the whole square. Callers that read one side
    // before setting the other are silently invalidated.
    fn set_width(&mut self, width: u32) {
        self.size = width;
    }

    fn set_height(&mut self, height: u32) {
        self.size = height;
    }
}

/// The prediction a contract-trusting caller makes, next to what actually
/// happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaCheck {
    pub expected: u64,
    pub actual: u64,
}

impl AreaCheck {
    /// Whether the prediction held.
    pub fn holds(&self) -> bool {
        self.expected == self.actual
    }
}

/// Set the height and predict the resulting area from the width read
/// beforehand.
///
/// Correct for every type that honors the [`Rectangular`] contract. For
/// [`Square`] the prediction fails, because `set_height` also changed the
/// width it read.
pub fn set_height_and_check(shape: &mut dyn Rectangular, height: u32) -> AreaCheck {
    let width = shape.width();
    shape.set_height(height);
    AreaCheck {
        expected: u64::from(width) * u64::from(height),
        actual: shape.area(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_sides_vary_independently() {
        let mut rectangle = Rectangle::new(2, 3);
        rectangle.set_height(10);

        assert_eq!(rectangle.width(), 2);
        assert_eq!(rectangle.height(), 10);
        assert_eq!(rectangle.area(), 20);
    }

    #[test]
    fn test_rectangle_passes_the_resize_check() {
        let mut rectangle = Rectangle::new(2, 3);
        let check = set_height_and_check(&mut rectangle, 10);

        assert_eq!(check.expected, 20);
        assert_eq!(check.actual, 20);
        assert!(check.holds());
    }

    #[test]
    fn test_square_keeps_both_sides_equal() {
        let mut square = Square::new(5);
        square.set_width(7);

        assert_eq!(square.width(), 7);
        assert_eq!(square.height(), 7);
    }

    #[test]
    fn test_square_fails_the_resize_check() {
        let mut square = Square::new(5);
        let check = set_height_and_check(&mut square, 10);

        // The mismatch is the point of this type. A passing check here
        // would mean the example has been broken.
        assert_eq!(check.expected, 50);
        assert_eq!(check.actual, 100);
        assert!(!check.holds());
    }

    #[test]
    fn test_square_factory_replaces_the_subtype() {
        let mut shape = Rectangle::square(5);
        assert!(shape.is_square());
        assert_eq!(shape.area(), 25);

        let check = set_height_and_check(&mut shape, 10);
        assert!(check.holds(), "a square-shaped rectangle still honors the contract");
        assert!(!shape.is_square());
    }

    #[test]
    fn test_display_shows_both_sides() {
        let rectangle = Rectangle::new(2, 3);
        assert_eq!(rectangle.to_string(), "width: 2, height: 3");
    }
}
