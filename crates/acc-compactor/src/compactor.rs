//! Range compaction — sort, scan neighbours, fold consecutive runs.

use crate::accession::ParsedAccession;
use crate::token::OutputToken;
use serde::Serialize;
use tracing::{debug, trace};

/// Sort accessions by plain lexicographic order of the whole string.
///
/// Digit suffixes are NOT compared numerically: `"A0001"` sorts before
/// `"A001"`, and `"A0"` before `"A00"`.
pub fn sort_accessions(accessions: &mut [String]) {
    accessions.sort_unstable();
}

/// Whether `current` directly follows `previous`.
///
/// Both must share the prefix and the padded width of the digit suffix, and
/// the suffix values must differ by exactly one. An accession that cannot be
/// parsed is never consecutive with anything.
pub fn is_consecutive(previous: &str, current: &str) -> bool {
    let (prev, cur) = match (ParsedAccession::parse(previous), ParsedAccession::parse(current)) {
        (Ok(p), Ok(c)) => (p, c),
        (Err(e), _) | (_, Err(e)) => {
            debug!(error = %e, "accession not rangeable");
            return false;
        }
    };
    if prev.prefix != cur.prefix { return false; }
    if prev.width() != cur.width() { return false; }
    prev.value.checked_add(1) == Some(cur.value)
}

/// Sort `accessions` and compact consecutive runs.
///
/// Empty input yields an empty token list. Duplicates are kept and each
/// surfaces as its own token.
pub fn compact<S: AsRef<str>>(accessions: &[S]) -> Vec<OutputToken> {
    let mut sorted: Vec<String> = accessions.iter().map(|a| a.as_ref().to_string()).collect();
    sort_accessions(&mut sorted);

    let Some((head, rest)) = sorted.split_first() else {
        return Vec::new();
    };

    let mut tokens = Vec::new();
    let mut range_start = head.as_str();
    let mut previous = head.as_str();

    for current in rest {
        if !is_consecutive(previous, current) {
            let token = OutputToken::closing(range_start, previous);
            trace!(%token, "run closed");
            tokens.push(token);
            range_start = current;
        }
        previous = current;
    }

    // Final pending run
    let token = OutputToken::closing(range_start, previous);
    trace!(%token, "run closed");
    tokens.push(token);
    tokens
}

/// [`compact`] with every token rendered as a string.
pub fn compact_to_strings<S: AsRef<str>>(accessions: &[S]) -> Vec<String> {
    compact(accessions).iter().map(|t| t.to_string()).collect()
}

/// Compaction result with statistics.
#[derive(Debug, Clone, Serialize)]
pub struct CompactionResult {
    pub tokens: Vec<OutputToken>,
    pub input_count: usize,
    pub range_count: usize,
    pub single_count: usize,
}

impl CompactionResult {
    /// Output tokens per input accession.
    pub fn ratio(&self) -> f64 {
        if self.input_count == 0 { return 1.0; }
        self.tokens.len() as f64 / self.input_count as f64
    }
}

/// Stateless entry point, for callers that want the statistics too.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeCompactor;

impl RangeCompactor {
    pub fn new() -> Self {
        Self
    }

    pub fn compact<S: AsRef<str>>(&self, accessions: &[S]) -> CompactionResult {
        let tokens = compact(accessions);
        let range_count = tokens.iter().filter(|t| t.is_range()).count();
        CompactionResult {
            single_count: tokens.len() - range_count,
            range_count,
            input_count: accessions.len(),
            tokens,
        }
    }
}
