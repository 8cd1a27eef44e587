use super::*;
use gate::MemoryStore;

fn decide(path: &str, store: &MemoryStore) -> GuardDecision {
    gate_path(&RouteTable::admin_console(), &NavigationGuard::new(), store, path)
}

// =============================================================================
// WITHOUT A SESSION
// =============================================================================

#[test]
fn login_location_is_open() {
    let store = MemoryStore::new();
    assert_eq!(decide("/login", &store), GuardDecision::Permit);
    assert_eq!(decide("/login/", &store), GuardDecision::Permit);
    assert_eq!(decide("/login?next=%2Fproducts", &store), GuardDecision::Permit);
}

#[test]
fn protected_locations_redirect_to_login() {
    let store = MemoryStore::new();
    for path in ["/", "/dashboard", "/products", "/licenses", "/clients", "/audit-logs"] {
        assert_eq!(decide(path, &store), GuardDecision::Redirect("/login".to_owned()), "{path}");
    }
}

#[test]
fn unknown_location_is_gated_too() {
    assert_eq!(decide("/nowhere", &MemoryStore::new()), GuardDecision::Redirect("/login".to_owned()));
}

#[test]
fn blank_token_counts_as_no_session() {
    let store = MemoryStore::with_token("   ");
    assert_eq!(decide("/products", &store), GuardDecision::Redirect("/login".to_owned()));
}

// =============================================================================
// WITH A SESSION
// =============================================================================

#[test]
fn session_opens_every_location() {
    let store = MemoryStore::with_token("abc123");
    for path in ["/", "/dashboard", "/products", "/audit-logs", "/login", "/nowhere"] {
        assert!(decide(path, &store).is_permitted(), "{path}");
    }
}

#[test]
fn decision_follows_the_store_between_navigations() {
    let store = MemoryStore::with_token("abc123");
    assert!(decide("/clients", &store).is_permitted());
    store.clear();
    assert_eq!(decide("/clients", &store), GuardDecision::Redirect("/login".to_owned()));
}
