//! `solid shapes`: the substitution demo.

use anyhow::Result;

use solid_kata::shapes::{set_height_and_check, AreaCheck, Rectangle, Square};
use solid_kata::ui;

fn report(label: &str, check: AreaCheck) {
    let line = format!(
        "{}: expected area {}, got {}",
        label, check.expected, check.actual
    );
    if check.holds() {
        println!("{}", ui::pass(&line));
    } else {
        println!("{}", ui::fail(&line));
    }
}

pub fn cmd_shapes() -> Result<()> {
    println!("{}", ui::section("Liskov Substitution: rectangle vs square"));

    println!(
        "{}",
        ui::note("resize through the trait, predicting area from the old width")
    );

    let mut rectangle = Rectangle::new(2, 3);
    report("Rectangle(2, 3)", set_height_and_check(&mut rectangle, 10));

    let mut square = Square::new(5);
    report("Square(5)", set_height_and_check(&mut square, 10));
    println!(
        "{}",
        ui::note("set_height on the square changed the width it was predicted with")
    );

    let better = Rectangle::square(5);
    println!(
        "{}",
        ui::note(&format!(
            "better: Rectangle::square(5) gives {}, is_square() = {}",
            better,
            better.is_square()
        ))
    );

    Ok(())
}
