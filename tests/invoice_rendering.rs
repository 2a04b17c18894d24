//! Integration tests for the fixed-width invoice text.
//!
//! Every line is 61 characters wide: a 48 character name/description column and a
//! 10 character price column, with discounts shown as negative amounts.

use testresult::TestResult;

use checkout::prelude::*;

#[test]
fn single_product_invoice() -> TestResult {
    let mut inventory = Inventory::new();
    inventory.register("Green Tea", "0.79", None)?;

    let mut cart = inventory.new_cart();
    cart.add("Green Tea", 3)?;

    let expected = "\
+------------------------------------------------+----------+
| Name                                       qty |    price |
+------------------------------------------------+----------+
| Green Tea                                    3 |     2.37 |
+------------------------------------------------+----------+
| TOTAL                                          |     2.37 |
+------------------------------------------------+----------+
";

    assert_eq!(cart.invoice(), expected);

    Ok(())
}

#[test]
fn empty_cart_invoice_has_only_header_and_footer() -> TestResult {
    let inventory = Inventory::new();
    let cart = inventory.new_cart();

    let expected = "\
+------------------------------------------------+----------+
| Name                                       qty |    price |
+------------------------------------------------+----------+
+------------------------------------------------+----------+
| TOTAL                                          |     0.00 |
+------------------------------------------------+----------+
";

    assert_eq!(cart.invoice(), expected);

    Ok(())
}

#[test]
fn sample_fixture_invoice() -> TestResult {
    let fixture = Fixture::from_set("sample")?;
    let cart = fixture.cart()?;

    let expected = "\
+------------------------------------------------+----------+
| Name                                       qty |    price |
+------------------------------------------------+----------+
| Green Tea                                    7 |     5.53 |
|   (buy 2, get 1 free)                          |    -1.58 |
| Black Coffee                                 5 |    14.95 |
|   (get 20% off for every 4)                    |    -2.39 |
| Milk                                         7 |    12.53 |
|   (30% off of every after the 5th)             |    -1.07 |
| Cheese                                       1 |     4.05 |
| Coupon TEATIME - 20% off                       |    -6.40 |
+------------------------------------------------+----------+
| TOTAL                                          |    25.61 |
+------------------------------------------------+----------+
";

    assert_eq!(cart.invoice(), expected);

    Ok(())
}

#[test]
fn flat_coupon_line_is_capped_at_total() -> TestResult {
    let mut inventory = Inventory::new();
    inventory.register("Cheese", "4.05", None)?;
    inventory.register_coupon("FIVER", CouponSpec::Amount("5.00".to_string()))?;

    let mut cart = inventory.new_cart();
    cart.add_one("Cheese")?;
    cart.use_coupon("FIVER")?;

    let expected = "\
+------------------------------------------------+----------+
| Name                                       qty |    price |
+------------------------------------------------+----------+
| Cheese                                       1 |     4.05 |
| Coupon FIVER - 5.00 off                        |    -4.05 |
+------------------------------------------------+----------+
| TOTAL                                          |     0.00 |
+------------------------------------------------+----------+
";

    assert_eq!(cart.invoice(), expected);

    Ok(())
}

#[test]
fn coupon_on_empty_cart_shows_negative_zero() -> TestResult {
    let mut inventory = Inventory::new();
    inventory.register_coupon("FIVER", CouponSpec::Amount("5.00".to_string()))?;

    let mut cart = inventory.new_cart();
    cart.use_coupon("FIVER")?;

    let expected = "\
+------------------------------------------------+----------+
| Name                                       qty |    price |
+------------------------------------------------+----------+
| Coupon FIVER - 5.00 off                        |    -0.00 |
+------------------------------------------------+----------+
| TOTAL                                          |     0.00 |
+------------------------------------------------+----------+
";

    assert_eq!(cart.invoice(), expected);

    Ok(())
}

#[test]
fn promotion_line_is_omitted_until_it_applies() -> TestResult {
    let mut inventory = Inventory::new();
    inventory.register("Green Tea", "0.79", Some(PromotionSpec::GetOneFree(3)))?;

    let mut cart = inventory.new_cart();
    cart.add("Green Tea", 2)?;

    assert!(!cart.invoice().contains("get 1 free"));

    cart.add_one("Green Tea")?;

    assert!(
        cart.invoice()
            .contains("|   (buy 2, get 1 free)                          |    -0.79 |")
    );

    Ok(())
}

/// The ordinal suffix only looks at the last digit, so a threshold of 11 reads "11st".
#[test]
fn threshold_ordinal_keeps_last_digit_quirk() -> TestResult {
    let mut inventory = Inventory::new();
    inventory.register(
        "Milk",
        "1.79",
        Some(PromotionSpec::Threshold {
            after: 11,
            percent: 10,
        }),
    )?;

    let mut cart = inventory.new_cart();
    cart.add("Milk", 13)?;

    let invoice = cart.invoice();

    assert!(invoice.contains("| Milk                                        13 |    23.27 |"));
    assert!(invoice.contains("|   (10% off of every after the 11st)            |    -0.36 |"));
    assert!(invoice.contains("| TOTAL                                          |    22.91 |"));

    Ok(())
}

#[test]
fn rendering_is_idempotent() -> TestResult {
    let fixture = Fixture::from_set("sample")?;
    let cart = fixture.cart()?;

    let first = cart.invoice();
    let second = cart.invoice();

    assert_eq!(first, second);
    assert_eq!(cart.total(), Invoice::from_cart(&cart).total());

    Ok(())
}

#[test]
fn lines_follow_first_added_order() -> TestResult {
    let mut inventory = Inventory::new();
    inventory.register("Green Tea", "0.79", None)?;
    inventory.register("Cheese", "4.05", None)?;

    let mut cart = inventory.new_cart();
    cart.add_one("Cheese")?;
    cart.add_one("Green Tea")?;
    cart.add_one("Cheese")?;

    let invoice = Invoice::from_cart(&cart);
    let names: Vec<&str> = invoice
        .lines()
        .iter()
        .filter_map(|line| match line {
            InvoiceLine::Product { name, .. } => Some(*name),
            _ => None,
        })
        .collect();

    assert_eq!(names, ["Cheese", "Green Tea"]);

    Ok(())
}
