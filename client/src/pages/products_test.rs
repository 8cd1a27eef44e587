use super::*;

#[test]
fn product_form_requires_code_and_name() {
    assert_eq!(parse_product_form("  ", "Editor", ""), Err("Product code and name are required."));
    assert_eq!(parse_product_form("EDITOR", "", ""), Err("Product code and name are required."));
}

#[test]
fn product_form_trims_and_defaults_to_enabled() {
    let product = parse_product_form(" EDITOR ", " Editor Pro ", "").unwrap();
    assert_eq!(product.product_code, "EDITOR");
    assert_eq!(product.name, "Editor Pro");
    assert_eq!(product.heartbeat_interval, None);
    assert_eq!(product.status, Some(ProductStatus::Enabled));
}

#[test]
fn product_form_parses_heartbeat() {
    assert_eq!(parse_product_form("A", "B", "300").unwrap().heartbeat_interval, Some(300));
    assert!(parse_product_form("A", "B", "0").is_err());
    assert!(parse_product_form("A", "B", "five").is_err());
}

#[test]
fn toggle_flips_status_and_treats_unknown_as_enabled() {
    assert_eq!(toggled_status(Some(ProductStatus::Enabled)), ProductStatus::Disabled);
    assert_eq!(toggled_status(Some(ProductStatus::Disabled)), ProductStatus::Enabled);
    assert_eq!(toggled_status(None), ProductStatus::Disabled);
}
