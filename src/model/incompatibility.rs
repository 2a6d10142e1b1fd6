use std::collections::HashSet;

/// Pairs of names which must never end up with the same mentor. A pair
/// may name two mentees, or a mentor and a mentee. Pairs are unordered.
#[derive(Clone, Debug, Default)]
pub struct Incompatibilities {
    pairs: HashSet<(String, String)>,
}

impl Incompatibilities {
    pub fn new<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        Incompatibilities {
            pairs: pairs
                .into_iter()
                .map(|(a, b)| Self::key(a.as_ref().trim(), b.as_ref().trim()))
                .collect(),
        }
    }

    fn key(a: &str, b: &str) -> (String, String) {
        if a <= b {
            (a.to_owned(), b.to_owned())
        } else {
            (b.to_owned(), a.to_owned())
        }
    }

    pub fn conflicts(&self, a: &str, b: &str) -> bool {
        !self.is_empty() && self.pairs.contains(&Self::key(a, b))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unordered() {
        let incompatibilities = Incompatibilities::new([("tutor6", "tutor8"), (" tutor8 ", "tutor6")]);
        assert_eq!(incompatibilities.len(), 1);
        assert!(incompatibilities.conflicts("tutor6", "tutor8"));
        assert!(incompatibilities.conflicts("tutor8", "tutor6"));
        assert!(!incompatibilities.conflicts("tutor6", "tutor7"));
    }

    #[test]
    fn test_empty() {
        let incompatibilities = Incompatibilities::default();
        assert!(incompatibilities.is_empty());
        assert!(!incompatibilities.conflicts("a", "b"));
    }
}
