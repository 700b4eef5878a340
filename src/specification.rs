//! Composable predicates, the extensible answer to [`crate::catalog::ProductFilter`].
//!
//! A [`Specification`] answers one yes/no question about one item.
//! Specifications combine with [`Specification::and`], and [`filter`]
//! applies one to a slice lazily. A new criterion is a new type; nothing
//! existing has to change.

use crate::catalog::{Color, Product, Size};

/// A single yes/no criterion over items of type `T`.
pub trait Specification<T> {
    /// Whether `item` meets this criterion.
    fn is_satisfied(&self, item: &T) -> bool;

    /// Combine with `other` into a criterion both must meet.
    ///
    /// Combination is binary, so a combined specification always has at
    /// least two parts. There is no way to build an empty one.
    fn and<S>(self, other: S) -> And<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        And {
            first: self,
            second: other,
        }
    }
}

/// Conjunction of two specifications, built by [`Specification::and`].
#[derive(Debug, Clone, Copy)]
pub struct And<A, B> {
    first: A,
    second: B,
}

impl<T, A, B> Specification<T> for And<A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }
}

/// Matches products of one color.
#[derive(Debug, Clone, Copy)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, product: &Product) -> bool {
        product.color == self.color
    }
}

/// Matches products of one size.
#[derive(Debug, Clone, Copy)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, product: &Product) -> bool {
        product.size == self.size
    }
}

/// Lazily yield the items that satisfy `spec`, in their original order.
///
/// Each call returns a fresh iterator, so the same specification can be
/// applied any number of times. An empty slice yields an empty iterator.
/// The specification is consulted only as the iterator advances.
pub fn filter<'a, T, S>(items: &'a [T], spec: &'a S) -> impl Iterator<Item = &'a T> + 'a
where
    S: Specification<T> + ?Sized,
{
    items.iter().filter(move |item| spec.is_satisfied(item))
}
