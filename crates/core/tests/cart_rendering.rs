//! Integration tests for rendering fixture carts.

use std::path::Path;

use rusty_money::{Money, iso::EUR};
use testresult::TestResult;

use till::{
    display::{CartLine, render_cart, render_items, table::write_cart},
    fixtures::Fixture,
    ids::ItemId,
    items::CartItemError,
};

fn fixture(cart: &str) -> TestResult<Fixture> {
    let mut fixture = Fixture::with_base_path(Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures"));

    fixture.load_cart(cart)?.load_classes("studio")?;

    Ok(fixture)
}

#[test]
fn mixed_cart_renders_every_variant() -> TestResult {
    let fixture = fixture("mixed")?;
    let cart = fixture.cart()?;

    let lines = render_items(cart.items(), fixture.classes(), fixture.selected());

    let labels: Vec<_> = lines.iter().map(|line| line.label.as_str()).collect();

    assert_eq!(
        labels,
        [
            "Drop-in class - Vinyasa Flow",
            "Trial class - Yin Yoga",
            "Drop-in class - Hatha in Studio A @18:00",
            "500ml - Sparkling water",
            "Classcard - 10 classes",
            "Membership - Yearly membership",
            "Subscription - Unlimited monthly",
            "Towel - Rental",
        ]
    );

    let details: Vec<_> = lines.iter().map(|line| line.detail.as_deref()).collect();

    assert_eq!(
        details,
        [
            None,
            None,
            None,
            None,
            Some("Checkin to Vinyasa Flow"),
            None,
            Some("Checkin to Yin Yoga"),
            None,
        ]
    );

    let highlighted: Vec<_> = lines
        .iter()
        .zip(cart.iter())
        .filter(|(line, _)| line.highlighted)
        .map(|(_, item)| item.id().clone())
        .collect();

    assert_eq!(highlighted, [ItemId::new("5")]);

    Ok(())
}

#[test]
fn mixed_cart_subtotal() -> TestResult {
    let cart = fixture("mixed")?.cart()?;

    // 15 + 5 + 15 + 3 × 2.50 + 120 + 30 + 80 + 2 × 1
    assert_eq!(cart.subtotal()?, Money::from_minor(27_450, EUR));

    Ok(())
}

#[test]
fn broken_items_degrade_to_placeholders() -> TestResult {
    let fixture = fixture("broken")?;

    let lines = render_cart(fixture.raw_items(), fixture.classes(), None, fixture.currency()?);

    let labels: Vec<_> = lines.iter().map(CartLine::label).collect();

    assert_eq!(
        labels,
        [
            "Membership - Yearly membership",
            "Unavailable item (2)",
            "Unavailable item (3)",
        ]
    );

    let errors: Vec<_> = lines
        .iter()
        .filter_map(|line| match line {
            CartLine::Unrenderable(line) => Some(line.error.clone()),
            CartLine::Rendered(_) => None,
        })
        .collect();

    assert!(matches!(
        errors.as_slice(),
        [
            CartItemError::UnknownItemType(tag),
            CartItemError::MissingField { field: "price", .. },
        ] if tag == "workshop"
    ));

    Ok(())
}

#[test]
fn table_output_contains_every_line() -> TestResult {
    let fixture = fixture("mixed")?;
    let cart = fixture.cart()?;
    let lines = render_cart(fixture.raw_items(), fixture.classes(), fixture.selected(), fixture.currency()?);

    let mut out = Vec::new();
    write_cart(&mut out, &lines, Some(cart.subtotal()?))?;
    let output = String::from_utf8(out)?;

    for line in &lines {
        assert!(output.contains(&line.label()), "{} missing from\n{output}", line.label());
    }

    Ok(())
}
