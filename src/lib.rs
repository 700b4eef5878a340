//! # solid-kata - Runnable SOLID Examples
//!
//! Four small, self-contained examples of object-oriented design
//! principles, each showing a naive version next to a better version.
//! The `solid` binary walks through them on the terminal.
//!
//! ## The Examples
//!
//! - **Single Responsibility**: [`journal`] keeps entries in order;
//!   [`persistence`] saves anything renderable to disk. Two jobs, two
//!   modules.
//! - **Open/Closed**: [`catalog`] holds the rigid filter that grows a
//!   method per criterion; [`specification`] replaces it with composable
//!   predicate types.
//! - **Liskov Substitution**: [`shapes`] ships a `Square` that breaks the
//!   rectangle contract on purpose, plus the factory that makes the
//!   subtype unnecessary.
//! - **Interface Segregation**: [`devices`] contrasts one fat machine
//!   trait with narrow print/scan capabilities.
//!
//! ## Example
//!
//! ```
//! use solid_kata::catalog::{Color, Product, Size};
//! use solid_kata::specification::{filter, ColorSpecification, Specification, SizeSpecification};
//!
//! let products = vec![
//!     Product::new("Apple", Color::Green, Size::Small),
//!     Product::new("Tree", Color::Green, Size::Large),
//!     Product::new("House", Color::Blue, Size::Large),
//! ];
//!
//! let green_and_large =
//!     ColorSpecification::new(Color::Green).and(SizeSpecification::new(Size::Large));
//!
//! let names: Vec<&str> = filter(&products, &green_and_large)
//!     .map(|product| product.name.as_str())
//!     .collect();
//! assert_eq!(names, ["Tree"]);
//! ```

// Re-export all public modules
pub mod catalog;
pub mod devices;
pub mod journal;
pub mod persistence;
pub mod shapes;
pub mod specification;
pub mod ui;

/// Generate a UTC timestamp in ISO 8601 format: `YYYY-MM-DDTHH:MM:SSZ`
///
/// This function uses `chrono::Utc::now()` to ensure the timestamp is truly in UTC,
/// not local time with a misleading `Z` suffix.
pub fn utc_now_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
