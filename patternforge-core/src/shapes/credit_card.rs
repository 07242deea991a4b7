//! Credit-card brand table.
//!
//! Each brand maps to an unanchored digit pattern. The table order is fixed
//! and is the order brands appear in the generated alternation.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Card brands known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardBrand {
    Visa,
    Mastercard,
    Amex,
    Discover,
    Jcb,
    DinersClub,
    Enroute,
    UnionPay,
}

/// Brand patterns in alternation order.
pub static CARD_PATTERNS: &[(CardBrand, &str)] = &[
    (CardBrand::Visa, r"4[0-9]{12}(?:[0-9]{3})?"),
    (
        CardBrand::Mastercard,
        r"(?:5[1-5][0-9]{2}|222[1-9]|22[3-9][0-9]|2[3-6][0-9]{2}|27[01][0-9]|2720)[0-9]{12}",
    ),
    (CardBrand::Amex, r"3[47][0-9]{13}"),
    (CardBrand::Discover, r"6(?:011|5[0-9]{2})[0-9]{12}"),
    (CardBrand::Jcb, r"(?:2131|1800|35[0-9]{3})[0-9]{11}"),
    (CardBrand::DinersClub, r"3(?:0[0-5]|[68][0-9])[0-9]{11}"),
    (CardBrand::Enroute, r"(?:2014|2149)[0-9]{11}"),
    (CardBrand::UnionPay, r"62[0-9]{14,17}"),
];

impl CardBrand {
    pub fn pattern(self) -> &'static str {
        CARD_PATTERNS
            .iter()
            .find(|(brand, _)| *brand == self)
            .map(|(_, pattern)| *pattern)
            .unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CardBrand::Visa => "visa",
            CardBrand::Mastercard => "mastercard",
            CardBrand::Amex => "amex",
            CardBrand::Discover => "discover",
            CardBrand::Jcb => "jcb",
            CardBrand::DinersClub => "diners_club",
            CardBrand::Enroute => "enroute",
            CardBrand::UnionPay => "union_pay",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for brand identifiers missing from the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCardBrand(pub String);

impl fmt::Display for UnknownCardBrand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unknown credit card brand '{}'.", self.0)
    }
}

impl std::error::Error for UnknownCardBrand {}

impl FromStr for CardBrand {
    type Err = UnknownCardBrand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "visa" => Ok(CardBrand::Visa),
            "mastercard" => Ok(CardBrand::Mastercard),
            "amex" | "americanexpress" => Ok(CardBrand::Amex),
            "discover" => Ok(CardBrand::Discover),
            "jcb" => Ok(CardBrand::Jcb),
            "diners" | "dinersclub" => Ok(CardBrand::DinersClub),
            "enroute" => Ok(CardBrand::Enroute),
            "unionpay" => Ok(CardBrand::UnionPay),
            _ => Err(UnknownCardBrand(s.to_string())),
        }
    }
}

/// Resolves the brand filter. An empty filter selects every brand; unknown
/// identifiers are dropped. Duplicates are kept once, in table order.
pub fn select_brands<S: AsRef<str>>(filter: &[S]) -> Vec<CardBrand> {
    if filter.is_empty() {
        return CARD_PATTERNS.iter().map(|(brand, _)| *brand).collect();
    }

    let mut requested = Vec::with_capacity(filter.len());
    for id in filter {
        match id.as_ref().parse::<CardBrand>() {
            Ok(brand) => requested.push(brand),
            Err(e) => warn!("{} Dropping it from the brand filter.", e),
        }
    }

    let selected: Vec<CardBrand> = CARD_PATTERNS
        .iter()
        .map(|(brand, _)| *brand)
        .filter(|brand| requested.contains(brand))
        .collect();
    debug!("Credit card brand filter resolved to {:?}.", selected);
    selected
}

/// Alternation of the selected brands' patterns, without anchors.
///
/// If every filter entry was unknown, nothing is selected and the result is
/// `(?:)`, which only accepts the empty string once anchored.
pub fn card_fragment<S: AsRef<str>>(filter: &[S]) -> String {
    let alternatives = select_brands(filter)
        .into_iter()
        .map(CardBrand::pattern)
        .collect::<Vec<&str>>()
        .join("|");
    format!("(?:{})", alternatives)
}
