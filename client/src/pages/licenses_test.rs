use super::*;

fn valid_form() -> LicenseForm {
    LicenseForm {
        license_key: "ABCD-EFGH-IJKL".to_owned(),
        product_code: "EDITOR".to_owned(),
        max_devices: "2".to_owned(),
        expire_at: "2027-01-31".to_owned(),
        remark: String::new(),
    }
}

// =============================================================================
// FORM
// =============================================================================

#[test]
fn valid_form_parses_and_drops_blank_remark() {
    let license = valid_form().parse().unwrap();
    assert_eq!(license.license_key, "ABCD-EFGH-IJKL");
    assert_eq!(license.max_devices, 2);
    assert_eq!(license.remark, None);
}

#[test]
fn remark_is_trimmed_and_kept() {
    let form = LicenseForm { remark: "  trial  ".to_owned(), ..valid_form() };
    assert_eq!(form.parse().unwrap().remark.as_deref(), Some("trial"));
}

#[test]
fn short_key_is_rejected() {
    let form = LicenseForm { license_key: "SHORT".to_owned(), ..valid_form() };
    assert_eq!(form.parse(), Err("License key must be 10 to 50 characters."));
}

#[test]
fn device_bounds_are_enforced() {
    for bad in ["0", "101", "", "two"] {
        let form = LicenseForm { max_devices: bad.to_owned(), ..valid_form() };
        assert_eq!(form.parse(), Err("Max devices must be between 1 and 100."), "{bad}");
    }
    let form = LicenseForm { max_devices: "100".to_owned(), ..valid_form() };
    assert!(form.parse().is_ok());
}

#[test]
fn missing_product_is_rejected() {
    let form = LicenseForm { product_code: " ".to_owned(), ..valid_form() };
    assert_eq!(form.parse(), Err("Product code is required."));
}

// =============================================================================
// DATES
// =============================================================================

#[test]
fn iso_date_shape() {
    assert!(is_iso_date("2027-01-31"));
    assert!(!is_iso_date("2027-1-31"));
    assert!(!is_iso_date("2027/01/31"));
    assert!(!is_iso_date("20270131"));
    assert!(!is_iso_date(""));
}
