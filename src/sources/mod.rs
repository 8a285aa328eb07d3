//! Registry source descriptors.
//!
//! A [`SourceDescriptor`] names one registry: where its text lives and which
//! line-classification rule applies to that text. Descriptors are built once
//! at process start from the configuration and never mutated.

use url::Url;

use crate::config::Config;

/// Line-classification rule for one registry format.
///
/// A closed set of variants keeps classification total: every source must
/// declare exactly one rule, and the classifier dispatches on it
/// exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceFormat {
    /// One candidate token per line; lines containing a `#` comment marker
    /// are rejected.
    FlatList,

    /// Public-suffix-style rule list. Only single bare labels are accepted
    /// as top-level entries; dotted rules, wildcard rules and exception
    /// rules are rejected.
    SuffixList {
        /// When set, `//` comments that embed a punycode token (the
        /// `xn--` transliteration of an internationalized TLD) have that
        /// token extracted and accepted as well. Tool lineage disagrees on
        /// this behavior, so it is a per-source capability.
        extract_idn_comments: bool,
    },
}

/// Identifies one registry: a display name, its URL, and the classification
/// rule for its text.
#[derive(Debug, Clone)]
pub struct SourceDescriptor {
    /// Short display name used in logs and error messages.
    pub name: &'static str,
    /// Location of the registry text.
    pub url: Url,
    /// Classification rule for this registry's format.
    pub format: SourceFormat,
}

/// Builds the source list for one run from the configuration.
///
/// The flat IANA registry is always consulted; the public suffix list is
/// included unless `--skip-suffix-list` was given, with punycode-comment
/// extraction enabled.
pub fn configured_sources(config: &Config) -> Vec<SourceDescriptor> {
    let mut sources = vec![SourceDescriptor {
        name: "iana",
        url: config.tld_registry_url.clone(),
        format: SourceFormat::FlatList,
    }];

    if !config.skip_suffix_list {
        sources.push(SourceDescriptor {
            name: "publicsuffix",
            url: config.suffix_list_url.clone(),
            format: SourceFormat::SuffixList {
                extract_idn_comments: true,
            },
        });
    }

    sources
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_both_registries() {
        let sources = configured_sources(&Config::default());
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].name, "iana");
        assert_eq!(sources[0].format, SourceFormat::FlatList);
        assert_eq!(sources[1].name, "publicsuffix");
        assert_eq!(
            sources[1].format,
            SourceFormat::SuffixList {
                extract_idn_comments: true
            }
        );
    }

    #[test]
    fn test_skip_suffix_list_leaves_flat_registry_only() {
        let config = Config {
            skip_suffix_list: true,
            ..Default::default()
        };
        let sources = configured_sources(&config);
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name, "iana");
    }
}
