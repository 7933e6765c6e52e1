//! # Chain List Pipeline
//!
//! Pure, synchronous derivation of the chain list shown on screen from
//! `(raw chains, search text, sort key)`. The UI calls [`derive`] whenever any
//! of the three inputs changes and redraws from the result; nothing here keeps
//! state between calls.
//!
//! ```text
//! Vec<Chain> ──► filter(name ⊇ search, case-insensitive) ──► stable sort(SortKey) ──► Vec<Chain>
//! ```
//!
//! ## Sort Keys
//!
//! | Key                | Order                                   | Missing value |
//! |--------------------|-----------------------------------------|---------------|
//! | `ByValue`          | TVL, descending                         | `0`           |
//! | `ByName`           | name, ascending, accent/case-folded     | n/a           |
//! | `ByProtocolCount`  | protocol count, descending              | `0`           |
//!
//! All sorts are stable: ties keep their relative order from the input.

pub mod delta;

use std::cmp::Ordering;

use shared::dto::llama::Chain;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub use delta::{tvl_change, ChangeDirection, TvlChange};

/// Number of chains listed on the Overview screen
pub const TOP_CHAINS: usize = 5;

/// Active ordering of the chain list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    ByValue,
    ByName,
    ByProtocolCount,
}

impl SortKey {
    /// All keys in button order
    pub fn all() -> &'static [SortKey] {
        &[SortKey::ByValue, SortKey::ByName, SortKey::ByProtocolCount]
    }

    /// Sort button label
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::ByValue => "TVL",
            SortKey::ByName => "Name",
            SortKey::ByProtocolCount => "Protocols",
        }
    }
}

/// Derive the visible chain list.
///
/// - `records` of `None` is treated as an empty list.
/// - An empty `search` keeps every record; otherwise a record is kept iff its
///   lowercased name contains the lowercased search text.
/// - The result is a new vector; the input is never touched.
///
/// # Example
///
/// ```rust
/// use shared::dto::llama::Chain;
/// use terminal::pipeline::{derive, SortKey};
///
/// let chains = vec![
///     Chain::new("Arbitrum", Some(5.0)),
///     Chain::new("Ethereum", Some(10.0)),
///     Chain::new("Base", None),
/// ];
///
/// let view = derive(Some(&chains), "", SortKey::ByValue);
/// let names: Vec<&str> = view.iter().map(|c| c.name.as_str()).collect();
/// assert_eq!(names, ["Ethereum", "Arbitrum", "Base"]);
///
/// let view = derive(Some(&chains), "ARB", SortKey::ByName);
/// assert_eq!(view.len(), 1);
/// ```
pub fn derive(records: Option<&[Chain]>, search: &str, sort: SortKey) -> Vec<Chain> {
    let records = records.unwrap_or_default();
    let needle = search.to_lowercase();

    let mut view: Vec<Chain> = records
        .iter()
        .filter(|chain| needle.is_empty() || chain.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    // slice::sort_by is stable
    match sort {
        SortKey::ByValue => view.sort_by(|a, b| b.tvl_or_zero().total_cmp(&a.tvl_or_zero())),
        SortKey::ByName => view.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::ByProtocolCount => view.sort_by(|a, b| b.protocol_count().cmp(&a.protocol_count())),
    }

    view
}

/// Locale-style name comparison.
///
/// Base letters decide first, with accents and case ignored ("Éclair" <
/// "Fantom", "Apple" < "banana"). Unaccented sorts before accented, then
/// lowercase before uppercase, and the raw code points break any remaining tie.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| folded(a).cmp(&folded(b)))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

/// Lowercase canonical decomposition, accents kept as combining marks
fn folded(name: &str) -> String {
    name.nfd().flat_map(char::to_lowercase).collect()
}

/// Lowercase canonical decomposition with combining marks dropped
fn base_letters(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn case_order(a: &str, b: &str) -> Ordering {
    a.chars()
        .zip(b.chars())
        .find(|(x, y)| x != y)
        .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        })
        .unwrap_or(Ordering::Equal)
}

/// Figures shown on the Overview screen
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverviewSummary {
    /// Sum of all chain TVLs (missing values count as zero)
    pub total_tvl: f64,
    /// Highest-TVL chains, at most [`TOP_CHAINS`]
    pub top_chains: Vec<Chain>,
}

/// Compute the Overview figures from the raw chain list.
pub fn summarize(records: Option<&[Chain]>) -> OverviewSummary {
    let total_tvl = records
        .unwrap_or_default()
        .iter()
        .map(Chain::tvl_or_zero)
        .sum();

    let mut top_chains = derive(records, "", SortKey::ByValue);
    top_chains.truncate(TOP_CHAINS);

    OverviewSummary { total_tvl, top_chains }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(name: &str, tvl: Option<f64>, protocols: Option<u32>) -> Chain {
        Chain {
            protocols,
            ..Chain::new(name, tvl)
        }
    }

    fn names(view: &[Chain]) -> Vec<&str> {
        view.iter().map(|c| c.name.as_str()).collect()
    }

    fn sample() -> Vec<Chain> {
        vec![
            chain("Ethereum", Some(60.0), Some(900)),
            chain("Solana", Some(8.0), Some(200)),
            chain("BSC", Some(5.0), None),
            chain("Arbitrum", Some(3.0), Some(600)),
            chain("Tron", None, Some(30)),
            chain("solaris", Some(8.0), Some(200)),
            chain("Base", Some(3.0), Some(300)),
        ]
    }

    #[test]
    fn test_empty_input() {
        assert!(derive(Some(&[]), "", SortKey::ByValue).is_empty());
        assert!(derive(None, "", SortKey::ByValue).is_empty());
        assert!(derive(None, "eth", SortKey::ByName).is_empty());
    }

    #[test]
    fn test_by_value_descending_missing_last() {
        let records = vec![
            chain("A", Some(5.0), None),
            chain("B", Some(10.0), None),
            chain("C", None, None),
        ];
        let view = derive(Some(&records), "", SortKey::ByValue);
        assert_eq!(names(&view), ["B", "A", "C"]);
    }

    #[test]
    fn test_by_value_ties_keep_input_order() {
        let view = derive(Some(&sample()), "", SortKey::ByValue);
        assert_eq!(
            names(&view),
            ["Ethereum", "Solana", "solaris", "BSC", "Arbitrum", "Base", "Tron"]
        );
    }

    #[test]
    fn test_by_name_case_insensitive_ascending() {
        let records = vec![chain("banana", None, None), chain("Apple", None, None)];
        let view = derive(Some(&records), "", SortKey::ByName);
        assert_eq!(names(&view), ["Apple", "banana"]);

        let view = derive(Some(&sample()), "", SortKey::ByName);
        assert_eq!(
            names(&view),
            ["Arbitrum", "Base", "BSC", "Ethereum", "Solana", "solaris", "Tron"]
        );
    }

    #[test]
    fn test_compare_names_lowercase_first_on_case_tie() {
        assert_eq!(compare_names("apple", "Apple"), Ordering::Less);
        assert_eq!(compare_names("Apple", "apple"), Ordering::Greater);
        assert_eq!(compare_names("Apple", "Apple"), Ordering::Equal);
        assert_eq!(compare_names("zkSync", "Zora"), Ordering::Less);
    }

    #[test]
    fn test_by_name_folds_accents() {
        let records = vec![
            chain("Zora", None, None),
            chain("Éclair", None, None),
            chain("Fantom", None, None),
        ];
        let view = derive(Some(&records), "", SortKey::ByName);
        assert_eq!(names(&view), ["Éclair", "Fantom", "Zora"]);

        assert_eq!(compare_names("Eclair", "Éclair"), Ordering::Less);
        assert_eq!(compare_names("éclair", "Éclair"), Ordering::Less);
        assert_eq!(compare_names("Ébène", "Ecosystem"), Ordering::Less);
    }

    #[test]
    fn test_by_protocol_count_descending_stable() {
        let view = derive(Some(&sample()), "", SortKey::ByProtocolCount);
        assert_eq!(
            names(&view),
            ["Ethereum", "Arbitrum", "Base", "Solana", "solaris", "Tron", "BSC"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let view = derive(Some(&sample()), "SOL", SortKey::ByName);
        assert_eq!(names(&view), ["Solana", "solaris"]);

        let view = derive(Some(&sample()), "um", SortKey::ByValue);
        assert_eq!(names(&view), ["Ethereum", "Arbitrum"]);

        let view = derive(Some(&sample()), "rum", SortKey::ByValue);
        assert_eq!(names(&view), ["Arbitrum"]);

        assert!(derive(Some(&sample()), "cosmos", SortKey::ByValue).is_empty());
    }

    #[test]
    fn test_empty_search_is_a_permutation() {
        let records = sample();
        for &key in SortKey::all() {
            let view = derive(Some(&records), "", key);
            assert_eq!(view.len(), records.len());
            for chain in &records {
                let expected = records.iter().filter(|c| *c == chain).count();
                let actual = view.iter().filter(|c| *c == chain).count();
                assert_eq!(expected, actual, "{} under {:?}", chain.name, key);
            }
        }
    }

    #[test]
    fn test_filter_preserves_duplicate_multiplicity() {
        let mut records = sample();
        records.push(chain("Solana", Some(8.0), Some(200)));

        for &key in SortKey::all() {
            let view = derive(Some(&records), "sol", key);
            assert!(view.iter().all(|c| c.name.to_lowercase().contains("sol")));
            let solana = chain("Solana", Some(8.0), Some(200));
            assert_eq!(view.iter().filter(|c| **c == solana).count(), 2);
            assert_eq!(view.len(), 3);
        }
    }

    #[test]
    fn test_derive_does_not_mutate_and_is_deterministic() {
        let records = sample();
        let snapshot = records.clone();

        let first = derive(Some(&records), "a", SortKey::ByName);
        let second = derive(Some(&records), "a", SortKey::ByName);

        assert_eq!(first, second);
        assert_eq!(records, snapshot);
    }

    #[test]
    fn test_sort_key_default_and_labels() {
        assert_eq!(SortKey::default(), SortKey::ByValue);
        let labels: Vec<&str> = SortKey::all().iter().map(SortKey::label).collect();
        assert_eq!(labels, ["TVL", "Name", "Protocols"]);
    }

    #[test]
    fn test_summarize() {
        let summary = summarize(Some(&sample()));
        assert_eq!(summary.total_tvl, 87.0);
        assert_eq!(
            names(&summary.top_chains),
            ["Ethereum", "Solana", "solaris", "BSC", "Arbitrum"]
        );

        let empty = summarize(None);
        assert_eq!(empty.total_tvl, 0.0);
        assert!(empty.top_chains.is_empty());
    }
}
