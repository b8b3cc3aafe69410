//! Site template variants.
//!
//! Each documentation site nests its article body differently. A
//! `ProviderVariant` bundles the ordered content-selector chain and the extra
//! removal selectors for one template, so adding a site is a new enum arm
//! rather than a string comparison scattered through the crawler.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Elements stripped from every page regardless of variant.
pub const BLANKET_REMOVAL_SELECTORS: &[&str] = &[
    "nav",
    "header",
    "footer",
    "script",
    "style",
    "noscript",
    "form",
    ".sidebar",
    "#sidebar",
    ".menu",
    "[role='navigation']",
    ".cookie-banner",
    ".cookie-notice",
    "#cookie-consent",
];

/// Closed set of supported documentation templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderVariant {
    /// Generic documentation layout
    #[default]
    Default,
    /// Quantum SDK manuals
    Quantum,
    /// Realtime SDK manuals
    Realtime,
}

/// Seed values a variant supplies when the caller leaves them unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderPreset {
    pub start_url: &'static str,
    pub base_path: &'static str,
    pub output_dir: &'static str,
}

impl ProviderVariant {
    pub const ALL: [ProviderVariant; 3] = [Self::Default, Self::Quantum, Self::Realtime];

    /// Content-selector fallback chain, highest priority first.
    #[must_use]
    pub const fn content_selectors(self) -> &'static [&'static str] {
        match self {
            Self::Default => &["main", "article", ".content", ".main-content", "#content"],
            Self::Quantum => &[
                ".docs-content",
                "#docs-content",
                "article",
                "main",
                ".content",
            ],
            Self::Realtime => &[".markdown-body", ".docs-content", "article", "main"],
        }
    }

    /// Template-specific elements removed in addition to the blanket list.
    #[must_use]
    pub const fn extra_removal_selectors(self) -> &'static [&'static str] {
        match self {
            Self::Default => &[],
            Self::Quantum => &[
                ".docs-sidebar",
                ".toc",
                ".breadcrumbs",
                ".version-selector",
                ".page-feedback",
            ],
            Self::Realtime => &[
                ".docs-sidebar",
                ".sdk-selector",
                ".toc",
                ".breadcrumbs",
                ".page-feedback",
            ],
        }
    }

    /// Blanket removals followed by this variant's extras.
    pub fn removal_selectors(self) -> impl Iterator<Item = &'static str> {
        BLANKET_REMOVAL_SELECTORS
            .iter()
            .chain(self.extra_removal_selectors())
            .copied()
    }

    #[must_use]
    pub const fn preset(self) -> Option<ProviderPreset> {
        match self {
            Self::Default => None,
            Self::Quantum => Some(ProviderPreset {
                start_url: "https://doc.photonengine.com/quantum/current/getting-started/quantum-intro",
                base_path: "/quantum/current/",
                output_dir: "output/quantum3",
            }),
            Self::Realtime => Some(ProviderPreset {
                start_url: "https://doc.photonengine.com/realtime/current/getting-started/realtime-intro",
                base_path: "/realtime/current/",
                output_dir: "output/realtime",
            }),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Quantum => "quantum",
            Self::Realtime => "realtime",
        }
    }
}

impl fmt::Display for ProviderVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown provider '{s}', expected one of: default, quantum, realtime")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    #[test]
    fn test_every_selector_parses() {
        for variant in ProviderVariant::ALL {
            for sel in variant
                .content_selectors()
                .iter()
                .copied()
                .chain(variant.removal_selectors())
            {
                assert!(
                    Selector::parse(sel).is_ok(),
                    "{variant}: selector '{sel}' must parse"
                );
            }
        }
    }

    #[test]
    fn test_from_str_round_trips_names() {
        assert_eq!("quantum".parse::<ProviderVariant>(), Ok(ProviderVariant::Quantum));
        assert_eq!("Realtime".parse::<ProviderVariant>(), Ok(ProviderVariant::Realtime));
        assert_eq!(" default ".parse::<ProviderVariant>(), Ok(ProviderVariant::Default));
        assert!("photon".parse::<ProviderVariant>().is_err());
    }

    #[test]
    fn test_default_variant_has_no_preset() {
        assert!(ProviderVariant::Default.preset().is_none());
        let quantum = ProviderVariant::Quantum.preset().expect("quantum preset");
        assert!(quantum.start_url.contains(quantum.base_path));
    }

    #[test]
    fn test_removal_list_starts_with_blanket_entries() {
        let removals: Vec<_> = ProviderVariant::Quantum.removal_selectors().collect();
        assert_eq!(&removals[..BLANKET_REMOVAL_SELECTORS.len()], BLANKET_REMOVAL_SELECTORS);
        assert!(removals.contains(&".toc"));
    }
}
