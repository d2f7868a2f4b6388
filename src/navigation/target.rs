//! Navigation targets and the classification dispatch table.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::classify::Classification;

pub const SEND_GROUP: &str = "Send";
pub const LNURL_GROUP: &str = "LNURL";

/// Where the user goes after a code has been recognised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationTarget {
    pub group: String,
    pub screen: String,
    pub params: BTreeMap<String, String>,
    pub replace: bool,
}

impl NavigationTarget {
    pub fn new(group: &str, screen: &str, replace: bool) -> Self {
        Self {
            group: group.to_string(),
            screen: screen.to_string(),
            params: BTreeMap::new(),
            replace,
        }
    }

    /// Dispatch table for classified codes.
    ///
    /// The match is exhaustive: adding a [`Classification`] variant does not
    /// compile until it has a target here.
    pub fn for_classification(classification: Classification) -> Self {
        let (group, screen) = match classification {
            Classification::Bolt11 => (SEND_GROUP, "SendConfirmation"),
            Classification::LnurlAuth => (LNURL_GROUP, "AuthRequest"),
            Classification::LnurlChannel => (LNURL_GROUP, "ChannelRequest"),
            Classification::LnurlPay => (LNURL_GROUP, "PayRequest"),
            Classification::LnurlWithdraw => (LNURL_GROUP, "WithdrawRequest"),
        };
        Self::new(group, screen, true)
    }

    /// Target of a successful lightning-address lookup.
    ///
    /// Unlike classified codes this one pushes instead of replacing.
    pub fn address_lookup() -> Self {
        Self::new(LNURL_GROUP, "PayRequest", false)
    }
}

impl std::fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.group, self.screen)
    }
}
