//! Product catalog and the rigid filter it outgrows.
//!
//! `ProductFilter` hard-codes one method per filtering criterion, so every
//! new criterion means editing the type again. It is kept as the
//! counterexample; the extensible version lives in [`crate::specification`].

use serde::Serialize;

/// Product color, a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
}

/// Product size, a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

/// An immutable name/color/size triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub name: String,
    pub color: Color,
    pub size: Size,
}

impl Product {
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }
}

/// Filtering with one method per criterion.
///
/// Supporting a new criterion, or a new combination of criteria, requires
/// another method here. The type is never closed to modification.
#[derive(Debug)]
pub struct ProductFilter;

impl ProductFilter {
    /// Yield the products with the given color.
    pub fn by_color<'a>(
        &self,
        products: &'a [Product],
        color: Color,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        products.iter().filter(move |product| product.color == color)
    }

    /// Yield the products with the given size.
    pub fn by_size<'a>(
        &self,
        products: &'a [Product],
        size: Size,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        products.iter().filter(move |product| product.size == size)
    }

    /// Yield the products with the given size and color. The combination
    /// explosion starts here.
    pub fn by_size_and_color<'a>(
        &self,
        products: &'a [Product],
        size: Size,
        color: Color,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        products
            .iter()
            .filter(move |product| product.size == size && product.color == color)
    }
}
