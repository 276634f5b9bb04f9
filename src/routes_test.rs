use super::*;

// =============================================================
// Path helpers
// =============================================================

#[test]
fn path_of_strips_query_and_fragment() {
    assert_eq!(path_of("/profile"), "/profile");
    assert_eq!(path_of("/profile?tab=security"), "/profile");
    assert_eq!(path_of("/profile#top"), "/profile");
    assert_eq!(path_of("/profile#top?x=1"), "/profile");
    assert_eq!(path_of(""), "");
}

#[test]
fn full_path_accepts_search_with_or_without_question_mark() {
    assert_eq!(full_path("/profile", ""), "/profile");
    assert_eq!(full_path("/profile", "?tab=1"), "/profile?tab=1");
    assert_eq!(full_path("/profile", "tab=1"), "/profile?tab=1");
    assert_eq!(full_path("/profile", "?"), "/profile");
}

// =============================================================
// Route table
// =============================================================

#[test]
fn protected_views_require_auth() {
    for path in [
        "/data-management",
        "/data-analysis",
        "/model-training",
        "/student-feedback",
        "/teacher-dashboard",
        "/visualization",
        "/profile",
    ] {
        assert!(requires_auth(path), "{path} should be protected");
    }
}

#[test]
fn auth_pages_are_public() {
    assert!(!requires_auth("/login"));
    assert!(!requires_auth("/register"));
}

#[test]
fn undeclared_destination_defaults_to_public() {
    assert!(route_for("/nowhere").is_none());
    assert!(!requires_auth("/nowhere"));
    assert!(!requires_auth(ROOT_PATH));
}

#[test]
fn lookup_ignores_query() {
    let entry = route_for("/visualization?chart=radar").unwrap();
    assert_eq!(entry.title, "Visualization");
    assert!(requires_auth("/profile?tab=1"));
}

#[test]
fn root_alias_points_at_login() {
    assert_eq!(ROOT_REDIRECT, GateConfig::default().login_path);
}

// =============================================================
// post_login_target
// =============================================================

#[test]
fn post_login_target_uses_preserved_destination() {
    let config = GateConfig::default();
    assert_eq!(post_login_target(Some("/profile"), &config), "/profile");
    assert_eq!(post_login_target(Some("/visualization?chart=bar"), &config), "/visualization?chart=bar");
}

#[test]
fn post_login_target_falls_back_to_home() {
    let config = GateConfig::default();
    assert_eq!(post_login_target(None, &config), "/data-management");
    assert_eq!(post_login_target(Some(""), &config), "/data-management");
    assert_eq!(post_login_target(Some("profile"), &config), "/data-management");
}

#[test]
fn post_login_target_rejects_off_site_and_auth_pages() {
    let config = GateConfig::default();
    assert_eq!(post_login_target(Some("//evil.example/x"), &config), "/data-management");
    assert_eq!(post_login_target(Some("https://evil.example"), &config), "/data-management");
    assert_eq!(post_login_target(Some("/login?redirect=%2Fprofile"), &config), "/data-management");
    assert_eq!(post_login_target(Some("/register"), &config), "/data-management");
}
