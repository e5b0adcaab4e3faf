use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::shortcode::ShortCode;

/// Identifier assigned to a link at creation, in creation order.
///
/// Ids only address links in listings; the public contract identifies a
/// link by its short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LinkId(u64);

impl LinkId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for LinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One successful resolution recorded against a link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickRecord {
    /// When the resolution happened.
    pub timestamp: Timestamp,
    /// Where the click came from, e.g. `direct` for a plain redirect.
    pub source: String,
}

/// A shortened link and its accumulated click history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: LinkId,
    pub original_url: String,
    pub shortcode: ShortCode,
    pub created_at: Timestamp,
    pub expiry_at: Timestamp,
    /// Total successful resolutions. Always equals `click_log.len()`.
    pub clicks: u64,
    pub click_log: Vec<ClickRecord>,
}

impl Link {
    /// True strictly after the expiry instant. A resolution at the
    /// instant itself still succeeds.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now > self.expiry_at
    }

    pub fn is_active(&self, now: Timestamp) -> bool {
        !self.is_expired(now)
    }
}

/// Aggregate statistics over every link in a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_links: usize,
    pub total_clicks: u64,
    pub active_links: usize,
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;

    use super::*;

    fn link(expiry_at: Timestamp) -> Link {
        Link {
            id: LinkId::new(1),
            original_url: "https://example.com/docs".to_owned(),
            shortcode: ShortCode::new_unchecked("abc123"),
            created_at: expiry_at - SignedDuration::from_mins(30),
            expiry_at,
            clicks: 0,
            click_log: Vec::new(),
        }
    }

    #[test]
    fn active_until_the_expiry_instant() {
        let expiry = Timestamp::now();
        let link = link(expiry);

        assert!(link.is_active(expiry - SignedDuration::from_secs(1)));
        assert!(link.is_active(expiry));
        assert!(!link.is_active(expiry + SignedDuration::from_secs(1)));
    }

    #[test]
    fn expired_strictly_after_the_expiry_instant() {
        let expiry = Timestamp::now();
        let link = link(expiry);

        assert!(!link.is_expired(expiry));
        assert!(link.is_expired(expiry + SignedDuration::from_millis(1)));
    }

    #[test]
    fn link_ids_order_by_creation() {
        assert!(LinkId::new(1) < LinkId::new(2));
        assert_eq!(LinkId::new(7).as_u64(), 7);
    }
}
