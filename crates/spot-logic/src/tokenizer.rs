//! Argument tokenizer
//!
//! Splits argument text of the form `preamble <p1>value <p2>value ...` into
//! a preamble and the values following each recognized prefix marker.
//!
//! A prefix is recognized only at the start of the text or right after
//! whitespace, so `x/` inside a value such as `n/Block x/2` is left alone
//! when `x/` is preceded by a letter. When several prefixes match at one
//! position the longest wins, so `rt/` is never read as `t/`.
//!
//! The flag marker `-` is recognized only through [`tokenize_with_flags`],
//! and only when the word right after it is one of the given flags. Any
//! other dash stays in the surrounding value, so `a/Block 3 -Level 2` keeps
//! its address intact.

use crate::prefix::{Flag, Prefix, PREFIX_FLAG};
use std::collections::HashMap;

/// Values found for each prefix, in appearance order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first recognized prefix, trimmed
    #[inline]
    #[must_use]
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for a prefix
    #[inline]
    #[must_use]
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// All values given for a prefix, in appearance order
    #[inline]
    #[must_use]
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map_or(&[], Vec::as_slice)
    }

    /// Check whether a prefix appeared at least once
    #[inline]
    #[must_use]
    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Check whether every prefix in `prefixes` appeared
    #[must_use]
    pub fn contains_all(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.contains(*p))
    }

    /// Check whether any prefix appeared at all
    #[inline]
    #[must_use]
    pub fn has_any_prefix(&self) -> bool {
        !self.values.is_empty()
    }
}

/// Tokenize `args` against the given prefixes
#[must_use]
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    tokenize_with_flags(args, prefixes, &[])
}

/// Tokenize `args` against the given prefixes and flags
///
/// Flag values are stored under [`PREFIX_FLAG`].
#[must_use]
pub fn tokenize_with_flags(args: &str, prefixes: &[Prefix], flags: &[Flag]) -> ArgumentMultimap {
    let mut ordered: Vec<Prefix> = prefixes
        .iter()
        .copied()
        .filter(|p| !p.is_flag_marker())
        .collect();
    ordered.sort_by_key(|p| std::cmp::Reverse(p.as_str().len()));

    let positions = find_prefix_positions(args, &ordered, flags);

    let preamble_end = positions.first().map_or(args.len(), |(start, _)| *start);
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    multimap
}

/// Byte offsets of recognized prefixes, in order
fn find_prefix_positions(args: &str, prefixes: &[Prefix], flags: &[Flag]) -> Vec<(usize, Prefix)> {
    let mut positions = Vec::new();
    let mut at_boundary = true;
    let mut skip_until = 0;

    for (index, ch) in args.char_indices() {
        if index >= skip_until && at_boundary {
            if let Some(prefix) = prefix_at(&args[index..], prefixes, flags) {
                positions.push((index, prefix));
                skip_until = index + prefix.as_str().len();
            }
        }
        at_boundary = ch.is_whitespace();
    }

    positions
}

fn prefix_at(rest: &str, prefixes: &[Prefix], flags: &[Flag]) -> Option<Prefix> {
    prefixes
        .iter()
        .copied()
        .find(|prefix| rest.starts_with(prefix.as_str()))
        .or_else(|| flag_at(rest, flags).map(|_| PREFIX_FLAG))
}

/// Flag whose whole word follows the marker at the start of `rest`
fn flag_at(rest: &str, flags: &[Flag]) -> Option<Flag> {
    let word = rest
        .strip_prefix(PREFIX_FLAG.as_str())?
        .split(char::is_whitespace)
        .next()?;
    flags.iter().copied().find(|flag| flag.as_str() == word)
}
