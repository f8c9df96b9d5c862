//! Session context
//!
//! The logged-in user and their role flags, passed explicitly to whatever
//! renders navigation. Visibility here is display-level only; the admin API
//! enforces authorization.

use serde::{Deserialize, Serialize};

/// Role flags of an admin user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleFlags {
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub sales: bool,
    #[serde(default)]
    pub warehouse: bool,
    #[serde(default)]
    pub finance: bool,
}

/// Current user profile (`auth/me`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub roles: RoleFlags,
}

/// Navigation sections of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavSection {
    Dashboard,
    Customers,
    Products,
    Inventory,
    Orders,
    PurchaseOrders,
    DeliveryNotes,
    Payments,
    Reports,
}

impl NavSection {
    pub const ALL: [NavSection; 9] = [
        NavSection::Dashboard,
        NavSection::Customers,
        NavSection::Products,
        NavSection::Inventory,
        NavSection::Orders,
        NavSection::PurchaseOrders,
        NavSection::DeliveryNotes,
        NavSection::Payments,
        NavSection::Reports,
    ];

    /// Whether a user with `roles` sees this section
    pub fn visible_to(&self, roles: &RoleFlags) -> bool {
        use NavSection::*;
        if roles.admin {
            return true;
        }
        match self {
            Dashboard => true,
            Customers | Orders => roles.sales,
            Products | PurchaseOrders => roles.sales || roles.warehouse,
            Inventory | DeliveryNotes => roles.warehouse,
            Payments => roles.finance,
            Reports => roles.sales || roles.finance,
        }
    }
}

/// Login request body (`auth/login`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Authenticated session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

impl Session {
    pub fn new(token: impl Into<String>, user: UserProfile) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user.roles.admin
    }

    /// Sections this session's user sees, in menu order
    pub fn visible_sections(&self) -> Vec<NavSection> {
        NavSection::ALL
            .into_iter()
            .filter(|s| s.visible_to(&self.user.roles))
            .collect()
    }
}

impl From<LoginResponse> for Session {
    fn from(resp: LoginResponse) -> Self {
        Self::new(resp.token, resp.user)
    }
}
