/// The input tokens, tracking which ones have already been consumed.
///
/// Parsing runs in several passes (sub-commands, named arguments, positionals, leftovers).
/// Each pass only sees the tokens the earlier passes left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Tokens {
    // `None` marks a consumed token.
    items: Vec<Option<String>>,
}

impl Tokens {
    pub(crate) fn new(tokens: &[&str]) -> Self {
        Self {
            items: tokens.iter().map(|t| Some(t.to_string())).collect(),
        }
    }

    pub(crate) fn get(&self, position: usize) -> Option<&str> {
        self.items.get(position).and_then(|t| t.as_deref())
    }

    /// The first token not yet consumed.
    pub(crate) fn head(&self) -> Option<(usize, &str)> {
        self.remaining().next()
    }

    pub(crate) fn remaining(&self) -> impl Iterator<Item = (usize, &str)> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(i, t)| t.as_deref().map(|t| (i, t)))
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.head().is_none()
    }

    pub(crate) fn consume(&mut self, position: usize) {
        if let Some(item) = self.items.get_mut(position) {
            item.take();
        }
    }

    /// Consume `count` tokens starting at `position` (clamped at the end of the input).
    pub(crate) fn consume_range(&mut self, position: usize, count: usize) {
        let end = std::cmp::min(position + count, self.items.len());

        for i in position..end {
            self.consume(i);
        }
    }

    /// Remove every occurrence of `short` from the short-flag cluster at `position`.
    /// The token is consumed once nothing but the leading `-` remains.
    pub(crate) fn strip_short(&mut self, position: usize, short: char) {
        if let Some(item) = self.items.get_mut(position) {
            if let Some(token) = item {
                let stripped: String = token.chars().filter(|c| *c != short).collect();

                if stripped == "-" || stripped.is_empty() {
                    item.take();
                } else {
                    *token = stripped;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty() {
        let tokens = Tokens::new(&[]);
        assert!(tokens.is_exhausted());
        assert_eq!(tokens.head(), None);
    }

    #[test]
    fn consume() {
        let mut tokens = Tokens::new(&["prog", "a", "b"]);
        assert_eq!(tokens.head(), Some((0, "prog")));

        tokens.consume(0);
        assert_eq!(tokens.get(0), None);
        assert_eq!(tokens.head(), Some((1, "a")));

        tokens.consume_range(1, 5);
        assert!(tokens.is_exhausted());
        assert_eq!(tokens.get(2), None);
    }

    #[test]
    fn remaining_skips_consumed() {
        let mut tokens = Tokens::new(&["prog", "a", "b", "c"]);
        tokens.consume(0);
        tokens.consume(2);

        assert_eq!(
            tokens.remaining().collect::<Vec<(usize, &str)>>(),
            vec![(1, "a"), (3, "c")]
        );
    }

    #[rstest]
    #[case("-abc", 'a', Some("-bc"))]
    #[case("-abc", 'c', Some("-ab"))]
    #[case("-vvv", 'v', None)]
    #[case("-vav", 'v', Some("-a"))]
    #[case("-a", 'a', None)]
    fn strip_short(#[case] token: &str, #[case] short: char, #[case] expected: Option<&str>) {
        let mut tokens = Tokens::new(&[token]);
        tokens.strip_short(0, short);
        assert_eq!(tokens.get(0), expected);
    }
}
