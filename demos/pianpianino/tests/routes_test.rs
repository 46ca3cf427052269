#![allow(missing_docs)]

use pianino::prelude::*;
use pianpianino::pages::{DASHBOARD_PAGE, HOME_PAGE, LOGIN_PAGE, NOT_FOUND_PAGE, REGISTER_PAGE};
use pianpianino::routes::{routes, routes_v1, routes_v2};

#[test]
fn test_v1_table() {
    let table = routes_v1();

    assert_eq!(table.len(), 2);
    assert_eq!(table.resolve("/"), Some(&HOME_PAGE));
    assert_eq!(table.resolve("/register"), Some(&REGISTER_PAGE));
    assert_eq!(table.resolve("/login"), None);
}

#[test]
fn test_v2_table() {
    let table = routes_v2();

    assert_eq!(table.len(), 4);
    assert_eq!(table.resolve("/"), Some(&HOME_PAGE));
    assert_eq!(table.resolve("/register"), Some(&REGISTER_PAGE));
    assert_eq!(table.resolve("/login"), Some(&LOGIN_PAGE));
    assert_eq!(table.resolve("/dashboard"), Some(&DASHBOARD_PAGE));
}

#[test]
fn test_tables_are_valid() {
    assert_eq!(routes_v1().validate(), Ok(()));
    assert_eq!(routes_v2().validate(), Ok(()));
}

#[test]
fn test_resolve_is_idempotent() {
    let table = routes_v2();

    for path in ["/", "/register", "/login", "/dashboard", "/missing"] {
        let first = table.resolve(path).copied();
        for _ in 0..3 {
            assert_eq!(table.resolve(path).copied(), first);
        }
    }
}

// every ordering of the v2 entries
fn permutations(entries: &[RouteEntry<Page>]) -> Vec<Vec<RouteEntry<Page>>> {
    if entries.len() <= 1 {
        return vec![entries.to_vec()];
    }

    let mut result = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        let mut rest = entries.to_vec();
        rest.remove(i);

        for mut tail in permutations(&rest) {
            tail.insert(0, entry.clone());
            result.push(tail);
        }
    }
    result
}

#[test]
fn test_order_independence() {
    let reference = routes_v2();
    let orderings = permutations(reference.entries());
    assert_eq!(orderings.len(), 24);

    for entries in orderings {
        let table = RouteTable::new(entries);
        for pattern in reference.patterns() {
            assert_eq!(table.resolve(pattern), reference.resolve(pattern));
        }
    }
}

#[test]
fn test_v2_extends_v1() {
    let v1 = routes_v1();
    let v2 = routes_v2();

    for pattern in v1.patterns() {
        assert_eq!(v2.resolve(pattern), v1.resolve(pattern));
    }

    let v1_paths: Vec<&str> = v1.patterns().collect();
    let added: Vec<&str> = v2.patterns().filter(|p| !v1_paths.contains(p)).collect();

    assert_eq!(added, ["/login", "/dashboard"]);
    for path in added {
        assert_eq!(v1.resolve(path), None);
        assert!(v2.resolve(path).is_some());
    }
}

#[test]
fn test_application_table_has_not_found_page() {
    let table = routes();

    assert_eq!(table.resolve("/dashboard"), Some(&DASHBOARD_PAGE));
    assert_eq!(table.resolve("/tasks/1"), Some(&NOT_FOUND_PAGE));
    assert_eq!(table.fallback(), Some(&NOT_FOUND_PAGE));
}
