use super::*;

#[test]
fn nav_starts_with_dashboard() {
    assert_eq!(NAV_ITEMS[0], NavItem { href: "/", label: "Dashboard" });
}

#[test]
fn nav_has_one_link_per_table_plus_dashboard() {
    assert_eq!(NAV_ITEMS.len(), crate::net::types::RESOURCES.len() + 1);
}

#[test]
fn nav_hrefs_are_unique_absolute_paths() {
    let mut hrefs: Vec<&str> = NAV_ITEMS.iter().map(|item| item.href).collect();
    assert!(hrefs.iter().all(|href| href.starts_with('/')));
    hrefs.sort_unstable();
    hrefs.dedup();
    assert_eq!(hrefs.len(), NAV_ITEMS.len());
}
