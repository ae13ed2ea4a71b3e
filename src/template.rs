//! Literal placeholder substitution for markup templates.
//!
//! Templates carry no templating syntax. A placeholder is any fixed string
//! (for example `January 2025`) that appears verbatim in the markup; it is
//! replaced wherever it occurs, case-sensitively, with no delimiters and no
//! escaping rules.
//!
//! Replacements run in list order, each over the output of the previous one,
//! so a later token can match text introduced by an earlier replacement.

/// One `from -> to` literal replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

impl Replacement {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Result of applying a replacement list to one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// The rewritten text.
    pub text: String,
    /// Occurrences replaced, one entry per replacement in list order.
    pub counts: Vec<usize>,
}

impl Substitution {
    /// Tokens from `replacements` that did not occur in the template.
    pub fn missing<'a>(&self, replacements: &'a [Replacement]) -> Vec<&'a str> {
        replacements
            .iter()
            .zip(&self.counts)
            .filter(|(_, count)| **count == 0)
            .map(|(r, _)| r.from.as_str())
            .collect()
    }

    /// Total number of replaced occurrences.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Apply `replacements` to `template` in order.
///
/// A token that does not occur is a no-op and reports a count of zero.
/// An empty token is skipped rather than matching between every character.
pub fn substitute(template: &str, replacements: &[Replacement]) -> Substitution {
    let mut text = template.to_string();
    let mut counts = Vec::with_capacity(replacements.len());

    for replacement in replacements {
        if replacement.from.is_empty() {
            counts.push(0);
            continue;
        }

        let count = text.matches(replacement.from.as_str()).count();
        if count > 0 {
            text = text.replace(replacement.from.as_str(), &replacement.to);
        }
        counts.push(count);
    }

    Substitution { text, counts }
}

/// Build a replacement list from `(from, to)` pairs.
pub fn replacements<I, K, V>(pairs: I) -> Vec<Replacement>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(from, to)| Replacement::new(from, to))
        .collect()
}
