use serde::Serialize;

/// Protocol variant a payment code was recognised as.
///
/// "Not a payment code" is expressed as `Option::None` by the classifier,
/// so every variant here has a navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Classification {
    Bolt11,
    LnurlAuth,
    LnurlChannel,
    LnurlPay,
    LnurlWithdraw,
}

impl Classification {
    /// Tag used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Bolt11 => "BOLT11",
            Classification::LnurlAuth => "LNURLAuthRequest",
            Classification::LnurlChannel => "LNURLChannelRequest",
            Classification::LnurlPay => "LNURLPayRequest",
            Classification::LnurlWithdraw => "LNURLWithdrawRequest",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
