use itertools::Itertools;

/// An ordered, duplicate-free set of signed integers.
///
/// `IntSet` is the canonical form the encoder consumes: ascending order, no
/// duplicates. It is produced either by [`IntSet::parse`] from free-form text
/// or by collecting an iterator of `i64`, which canonicalizes on the way in.
///
/// # Examples
///
/// ```
/// use maskgen::IntSet;
///
/// let set: IntSet = [5, 1, 3, 1].into_iter().collect();
/// assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 3, 5]);
/// assert_eq!(set.first(), Some(1));
/// assert_eq!(set.last(), Some(5));
/// ```
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct IntSet(Vec<i64>);

static_assertions::const_assert_eq!(std::mem::size_of::<IntSet>(), 24);

impl IntSet {
    /// An empty set, suitable for usage in a const context.
    pub const EMPTY: Self = IntSet(Vec::new());

    /// Parses free-form text into a set.
    ///
    /// The text is split on every maximal run of characters that are neither
    /// ASCII digits nor `-`, so any delimiter style works: commas, spaces,
    /// newlines, or prose. Each fragment must parse as an exact base-10
    /// signed integer; fragments that do not (`"-"`, `"--5"`, `"abc"`,
    /// magnitudes beyond `i64`) are silently dropped. Empty input yields the
    /// empty set, never an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use maskgen::IntSet;
    ///
    /// let set = IntSet::parse("abc, , -, 7");
    /// assert_eq!(set.iter().collect::<Vec<_>>(), vec![7]);
    ///
    /// assert!(IntSet::parse("").is_empty());
    /// ```
    pub fn parse(text: &str) -> Self {
        text.split(|c: char| !c.is_ascii_digit() && c != '-')
            .filter(|frag| !frag.is_empty())
            .filter_map(|frag| frag.parse::<i64>().ok())
            .collect()
    }

    /// Returns the number of elements in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the set contains `value`.
    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.0.binary_search(&value).is_ok()
    }

    /// Returns the smallest element, or `None` if the set is empty.
    #[inline]
    pub fn first(&self) -> Option<i64> {
        self.0.first().copied()
    }

    /// Returns the largest element, or `None` if the set is empty.
    #[inline]
    pub fn last(&self) -> Option<i64> {
        self.0.last().copied()
    }

    /// Iterates over the elements in ascending order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.iter().copied()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[i64] {
        &self.0
    }
}

impl FromIterator<i64> for IntSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().sorted_unstable().dedup().collect())
    }
}

impl Extend<i64> for IntSet {
    fn extend<T: IntoIterator<Item = i64>>(&mut self, iter: T) {
        self.0.extend(iter);
        self.0.sort_unstable();
        self.0.dedup();
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use proptest::{collection::vec, proptest};

    use super::*;
    use crate::testutil::mkset;

    #[test]
    fn test_parse_delimiters() {
        let expected = vec![-4, -2, 1, 3, 5];
        for text in [
            "-4, -2, 1, 3, 5",
            "-4 -2 1 3 5",
            "-4;-2;1;3;5",
            "-4\n-2\n1\n3\n5",
            "values: -4 and -2 and 1 and 3 and 5",
        ] {
            assert_eq!(
                IntSet::parse(text).iter().collect::<Vec<_>>(),
                expected,
                "text: {text:?}"
            );
        }
    }

    #[test]
    fn test_parse_drops_malformed_fragments() {
        type Case = (&'static str, &'static [i64]);
        let cases: &[Case] = &[
            ("abc, , -, 7", &[7]),
            ("--5", &[]),
            ("-", &[]),
            ("5-3", &[]),
            ("1, --2, 3-", &[1]),
            ("99999999999999999999999999", &[]),
            ("", &[]),
            ("   ", &[]),
        ];

        for (text, expected) in cases {
            let set = IntSet::parse(text);
            assert_eq!(set.as_slice(), *expected, "text: {text:?}");
        }
    }

    #[test]
    fn test_parse_dedupes_and_sorts() {
        let set = IntSet::parse("5, 3, 5, -1, 3, -1");
        assert_eq!(set.as_slice(), &[-1, 3, 5]);
    }

    #[test]
    fn test_empty_set() {
        assert!(IntSet::EMPTY.is_empty());
        assert_eq!(IntSet::EMPTY.len(), 0);
        assert_eq!(IntSet::EMPTY.first(), None);
        assert_eq!(IntSet::EMPTY.last(), None);
        assert!(!IntSet::EMPTY.contains(0));
    }

    #[test]
    fn test_extend_recanonicalizes() {
        let mut set = mkset([3, 7]);
        set.extend([1, 7, 5]);
        assert_eq!(set.as_slice(), &[1, 3, 5, 7]);
    }

    proptest! {
        #[test]
        fn test_from_iter_canonical_proptest(values in vec(-512i64..512, 0..64)) {
            let set = mkset(values.iter().copied());
            assert!(set.iter().tuple_windows().all(|(a, b)| a < b));
            for v in &values {
                assert!(set.contains(*v));
            }
        }

        #[test]
        fn test_parse_idempotent_proptest(values in vec(-512i64..512, 0..64)) {
            let text = values.iter().join(", ");
            let once = IntSet::parse(&text);
            let twice = IntSet::parse(&once.iter().join(", "));
            assert_eq!(once, twice);
        }
    }
}
