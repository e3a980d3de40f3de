//! Page-level views addressed by the route table

use std::fmt;

use serde::Serialize;

/// Every page the site can mount
///
/// `NotFound` is never declared in the route table; it is the fallback
/// mounted when a path resolves to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Main,
    Exchange,
    HowItWorks,
    Partners,
    Terms,
    Privacy,
    Cookie,
    Government,
    Kyc,
    AboutUs,
    VipClients,
    Order,
    NotFound,
}

impl View {
    /// Views declared in the route table, in declaration order
    pub const ROUTED: [View; 12] = [
        View::Main,
        View::Exchange,
        View::HowItWorks,
        View::Partners,
        View::Terms,
        View::Privacy,
        View::Cookie,
        View::Government,
        View::Kyc,
        View::AboutUs,
        View::VipClients,
        View::Order,
    ];

    /// Display name
    pub fn title(self) -> &'static str {
        match self {
            View::Main => "Main",
            View::Exchange => "Exchange",
            View::HowItWorks => "How It Works",
            View::Partners => "Partners",
            View::Terms => "Terms",
            View::Privacy => "Privacy",
            View::Cookie => "Cookie",
            View::Government => "Government",
            View::Kyc => "KYC",
            View::AboutUs => "About Us",
            View::VipClients => "VIP Clients",
            View::Order => "Order",
            View::NotFound => "Not Found",
        }
    }

    /// Stable identifier, also used as the route name
    pub fn slug(self) -> &'static str {
        match self {
            View::Main => "main",
            View::Exchange => "exchange",
            View::HowItWorks => "how-it-works",
            View::Partners => "partners",
            View::Terms => "terms",
            View::Privacy => "privacy",
            View::Cookie => "cookie",
            View::Government => "government",
            View::Kyc => "kyc",
            View::AboutUs => "about-us",
            View::VipClients => "vip-clients",
            View::Order => "order",
            View::NotFound => "not-found",
        }
    }

    /// Whether the page is linked from the navigation bar
    pub fn in_nav(self) -> bool {
        !matches!(self, View::Order | View::NotFound)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
