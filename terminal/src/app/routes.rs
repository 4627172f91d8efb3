//! # Routes
//!
//! Path-based navigation between the five pages. `/` redirects to `/dashboard` and any
//! unknown path resolves to [`Route::NotFound`].

use std::fmt;

/// A page of the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Markets,
    Trading,
    Wallet,
    Earn,
    /// Unknown path, kept for the 404 view
    NotFound(String),
}

/// Entry of the top navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavItem {
    /// Active when the current path starts with this item's href
    pub fn is_active(&self, current_path: &str) -> bool {
        current_path.starts_with(self.href)
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Dashboard", href: "/dashboard" },
    NavItem { label: "Markets", href: "/markets" },
    NavItem { label: "Trade", href: "/trading" },
    NavItem { label: "Wallet", href: "/wallet" },
    NavItem { label: "Earn", href: "/earn" },
];

/// Trim whitespace and trailing slashes; an empty path and `/` become `/dashboard`
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Route::Dashboard.path();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

impl Route {
    /// Resolve a path. Matching is exact after normalization.
    pub fn from_path(path: &str) -> Self {
        let path = normalize_path(path);
        match path.as_str() {
            "/dashboard" => Route::Dashboard,
            "/markets" => Route::Markets,
            "/trading" => Route::Trading,
            "/wallet" => Route::Wallet,
            "/earn" => Route::Earn,
            _ => Route::NotFound(path),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/dashboard".to_string(),
            Route::Markets => "/markets".to_string(),
            Route::Trading => "/trading".to_string(),
            Route::Wallet => "/wallet".to_string(),
            Route::Earn => "/earn".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Window/page heading
    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Markets => "Markets",
            Route::Trading => "Trade",
            Route::Wallet => "Wallet",
            Route::Earn => "Earn",
            Route::NotFound(_) => "Page Not Found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_redirects_to_dashboard() {
        assert_eq!(Route::from_path("/"), Route::Dashboard);
        assert_eq!(Route::from_path(""), Route::Dashboard);
        assert_eq!(normalize_path("/"), "/dashboard");
    }

    #[test]
    fn test_known_paths() {
        assert_eq!(Route::from_path("/markets"), Route::Markets);
        assert_eq!(Route::from_path("/trading/"), Route::Trading);
        assert_eq!(Route::from_path("wallet"), Route::Wallet);
        assert_eq!(Route::from_path(" /earn "), Route::Earn);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(Route::from_path("/trade"), Route::NotFound("/trade".to_string()));
        assert_eq!(Route::from_path("/wallet/extra").path(), "/wallet/extra");
    }

    #[test]
    fn test_nav_items_are_routable() {
        for item in NAV_ITEMS {
            assert!(!matches!(Route::from_path(item.href), Route::NotFound(_)), "{}", item.href);
        }
    }

    #[test]
    fn test_nav_item_active_by_prefix() {
        let trade = NAV_ITEMS.iter().find(|i| i.label == "Trade").unwrap();
        assert!(trade.is_active("/trading"));
        assert!(trade.is_active("/trading/BTC"));
        assert!(!trade.is_active("/markets"));
    }
}
