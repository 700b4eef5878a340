//! `solid catalog`: the open/closed demo.

use anyhow::Result;
use colored::Colorize;

use solid_kata::catalog::{Color, Product, ProductFilter, Size};
use solid_kata::specification::{filter, ColorSpecification, Specification, SizeSpecification};
use solid_kata::ui;

fn sample_products() -> Vec<Product> {
    vec![
        Product::new("Apple", Color::Green, Size::Small),
        Product::new("Tree", Color::Green, Size::Large),
        Product::new("House", Color::Blue, Size::Large),
    ]
}

pub fn cmd_catalog(json: bool) -> Result<()> {
    println!("{}", ui::section("Open/Closed: product filtering"));

    let products = sample_products();

    println!(
        "{}",
        ui::note("rigid filter: every new criterion is another method")
    );
    let rigid = ProductFilter;
    for product in rigid.by_color(&products, Color::Green) {
        println!("  {} is green", product.name.cyan());
    }

    println!(
        "{}",
        ui::note("specification filter: every new criterion is a new type")
    );
    let green = ColorSpecification::new(Color::Green);
    for product in filter(&products, &green) {
        println!("  {} is green", product.name.cyan());
    }

    println!("{}", ui::note("criteria combine without touching the filter"));
    let green_and_large = green.and(SizeSpecification::new(Size::Large));
    for product in filter(&products, &green_and_large) {
        println!("  {} is green and large", product.name.cyan());
    }

    if json {
        let matches: Vec<&Product> = filter(&products, &green_and_large).collect();
        println!("{}", serde_json::to_string_pretty(&matches)?);
    }

    Ok(())
}
