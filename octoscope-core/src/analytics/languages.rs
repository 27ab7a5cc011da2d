//! Language-weight aggregation across repositories.

use crate::types::RepoSummary;
use serde::Serialize;

use super::round1;

/// Accumulated per-language repository sizes.
///
/// Entries are kept as an explicit list of pairs in first-occurrence
/// order, which makes the tie-break rules mechanical: on an exact size
/// tie, the language seen first in the input wins, both for
/// [`primary`](Self::primary) and in the [`top`](Self::top) ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LanguageBreakdown {
    /// (language, accumulated size), ordered by first occurrence
    entries: Vec<(String, u64)>,
    /// Sum of all accumulated sizes
    total: u64,
}

/// One row of the top-N percentage view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageShare {
    /// Language name
    pub language: String,
    /// Accumulated size across the account's repositories
    pub size: u64,
    /// Share of total size, rounded to one decimal place
    pub percent: f64,
}

impl LanguageBreakdown {
    /// Accumulate sizes per language over a repository list.
    ///
    /// Repositories without a declared language are skipped.
    pub fn from_repos(repos: &[RepoSummary]) -> Self {
        let mut breakdown = Self::default();
        for repo in repos {
            let Some(language) = repo.language.as_deref() else {
                continue;
            };
            breakdown.add(language, repo.size);
        }
        breakdown
    }

    fn add(&mut self, language: &str, size: u64) {
        self.total += size;
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| name == language) {
            entry.1 += size;
        } else {
            self.entries.push((language.to_string(), size));
        }
    }

    /// Sum of all per-language sizes.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct languages seen.
    pub fn language_count(&self) -> usize {
        self.entries.len()
    }

    /// Language with the largest accumulated size.
    ///
    /// Returns `None` when no repository carried both a language and a
    /// positive size. On an exact tie the earliest-seen language wins.
    pub fn primary(&self) -> Option<&str> {
        if self.total == 0 {
            return None;
        }
        let mut best: Option<(&str, u64)> = None;
        for (language, size) in &self.entries {
            // Strict comparison keeps the first-seen language on ties
            if best.map_or(true, |(_, best_size)| *size > best_size) {
                best = Some((language.as_str(), *size));
            }
        }
        best.map(|(language, _)| language)
    }

    /// Top `n` languages by accumulated size, with their share of the
    /// total. Empty when the total size is zero.
    pub fn top(&self, n: usize) -> Vec<LanguageShare> {
        if self.total == 0 {
            return Vec::new();
        }
        let mut ranked: Vec<&(String, u64)> = self.entries.iter().collect();
        // Stable sort: ties keep first-occurrence order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(language, size)| LanguageShare {
                language: language.clone(),
                size: *size,
                percent: round1(*size as f64 / self.total as f64 * 100.0),
            })
            .collect()
    }
}
