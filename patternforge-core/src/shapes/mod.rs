//! Named-shape registry.
//!
//! A named shape is a fixed preset for a common format. Selecting one bypasses
//! the general constraint pipeline entirely. Most shapes are a single static,
//! already anchored pattern. The date and time shapes are built from a format
//! string and the credit-card shape from a brand-keyed table.
//!
//! License: MIT OR APACHE 2.0

pub mod credit_card;
pub mod format_tokens;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::config::Configuration;

/// The named shapes, one variant per preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Email,
    Url,
    Phone,
    Ipv4,
    Ipv6,
    HexColor,
    Date,
    Time,
    Latitude,
    Longitude,
    CreditCard,
}

impl Shape {
    /// Dispatch order when several shape flags are set: the first requested one wins.
    pub const PRIORITY: [Shape; 11] = [
        Shape::Email,
        Shape::Url,
        Shape::Phone,
        Shape::Ipv4,
        Shape::Ipv6,
        Shape::HexColor,
        Shape::Date,
        Shape::Time,
        Shape::Latitude,
        Shape::Longitude,
        Shape::CreditCard,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Email => "email",
            Shape::Url => "url",
            Shape::Phone => "phone",
            Shape::Ipv4 => "ipv4",
            Shape::Ipv6 => "ipv6",
            Shape::HexColor => "hex_color",
            Shape::Date => "date",
            Shape::Time => "time",
            Shape::Latitude => "latitude",
            Shape::Longitude => "longitude",
            Shape::CreditCard => "credit_card",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const EMAIL: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

const URL: &str = r"^(?:https?://)?(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}(?::[0-9]{1,5})?(?:[/?#][^\s]*)?$";

const PHONE: &str = r"^\+?(?:[0-9]{1,3})?[-. ]?\(?[0-9]{3}\)?[-. ]?[0-9]{3}[-. ]?[0-9]{4}$";

const IPV4: &str = r"^(?:(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])$";

// Full, compressed, link-local with zone index, IPv4-mapped and IPv4-embedded forms.
const IPV6: &str = concat!(
    r"^(?:",
    r"(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}",
    r"|(?:[0-9a-fA-F]{1,4}:){1,7}:",
    r"|(?:[0-9a-fA-F]{1,4}:){1,6}:[0-9a-fA-F]{1,4}",
    r"|(?:[0-9a-fA-F]{1,4}:){1,5}(?::[0-9a-fA-F]{1,4}){1,2}",
    r"|(?:[0-9a-fA-F]{1,4}:){1,4}(?::[0-9a-fA-F]{1,4}){1,3}",
    r"|(?:[0-9a-fA-F]{1,4}:){1,3}(?::[0-9a-fA-F]{1,4}){1,4}",
    r"|(?:[0-9a-fA-F]{1,4}:){1,2}(?::[0-9a-fA-F]{1,4}){1,5}",
    r"|[0-9a-fA-F]{1,4}:(?::[0-9a-fA-F]{1,4}){1,6}",
    r"|:(?:(?::[0-9a-fA-F]{1,4}){1,7}|:)",
    r"|[fF][eE]80:(?::[0-9a-fA-F]{0,4}){0,4}%[0-9a-zA-Z]+",
    r"|::(?:[fF]{4}(?::0{1,4})?:)?(?:(?:25[0-5]|(?:2[0-4]|1?[0-9])?[0-9])\.){3}(?:25[0-5]|(?:2[0-4]|1?[0-9])?[0-9])",
    r"|(?:[0-9a-fA-F]{1,4}:){1,4}:(?:(?:25[0-5]|(?:2[0-4]|1?[0-9])?[0-9])\.){3}(?:25[0-5]|(?:2[0-4]|1?[0-9])?[0-9])",
    r")$"
);

const HEX_COLOR: &str = r"^#?(?:[0-9a-fA-F]{6}|[0-9a-fA-F]{3})$";

const LATITUDE: &str = r"^[-+]?(?:90(?:\.0+)?|[1-8]?[0-9](?:\.[0-9]+)?)$";

const LONGITUDE: &str = r"^[-+]?(?:180(?:\.0+)?|(?:1[0-7][0-9]|[1-9]?[0-9])(?:\.[0-9]+)?)$";

/// Fixed templates, built once and only ever read.
static FIXED_TEMPLATES: Lazy<HashMap<Shape, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (Shape::Email, EMAIL),
        (Shape::Url, URL),
        (Shape::Phone, PHONE),
        (Shape::Ipv4, IPV4),
        (Shape::Ipv6, IPV6),
        (Shape::HexColor, HEX_COLOR),
        (Shape::Latitude, LATITUDE),
        (Shape::Longitude, LONGITUDE),
    ])
});

/// The static template for shapes that do not depend on configuration.
pub fn fixed_template(shape: Shape) -> Option<&'static str> {
    FIXED_TEMPLATES.get(&shape).copied()
}

/// Produces the anchored pattern text for `shape`.
///
/// Only `date_format`, `time_format` and `supported_credit_cards` are read
/// from `config`. Every other field is ignored for named shapes.
pub fn shape_pattern(shape: Shape, config: &Configuration) -> String {
    match shape {
        Shape::Date => format!("^{}$", format_tokens::date_fragment(config.date_format.as_deref())),
        Shape::Time => format!("^{}$", format_tokens::time_fragment(config.time_format.as_deref())),
        Shape::CreditCard => format!("^{}$", credit_card::card_fragment(&config.supported_credit_cards)),
        fixed => fixed_template(fixed).unwrap_or_default().to_string(),
    }
}
