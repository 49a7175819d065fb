use std::{
    fmt::{self, Display},
    num::ParseIntError,
    str::FromStr,
};

use thiserror::Error;

/// Separates the bounds of a range token.
pub const RANGE_SEPARATOR: char = '-';

/// Separates tokens in a list.
pub const LIST_SEPARATOR: char = ',';

/// An inclusive range of 1-based bit positions.
///
/// A single position is a range whose bounds are equal.
///
/// # Examples
///
/// ```
/// use fold_merge::bits::BitToken;
///
/// let single: BitToken = "5".parse().unwrap();
/// assert_eq!((single.from(), single.to()), (5, 5));
///
/// let range: BitToken = "14-17".parse().unwrap();
/// assert_eq!((range.from(), range.to()), (14, 17));
/// assert_eq!(range.to_string(), "14-17");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitToken {
    // 1 <= from <= to
    from: usize,
    to: usize,
}

impl BitToken {
    /// A token covering exactly `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is 0.
    #[inline]
    pub const fn single(position: usize) -> Self {
        Self::range(position, position)
    }

    /// A token covering `from..=to`.
    ///
    /// # Panics
    ///
    /// Panics if `from` is 0 or `from > to`.
    #[inline]
    pub const fn range(from: usize, to: usize) -> Self {
        assert!(from >= 1, "bit positions are 1-based");
        assert!(from <= to, "range bounds are reversed");
        Self { from, to }
    }

    /// The lowest covered position, 1-based.
    #[inline]
    pub const fn from(&self) -> usize {
        self.from
    }

    /// The highest covered position, 1-based.
    #[inline]
    pub const fn to(&self) -> usize {
        self.to
    }

    #[inline]
    pub const fn is_single(&self) -> bool {
        self.from == self.to
    }

    #[inline]
    pub const fn covers(&self, position: usize) -> bool {
        self.from <= position && position <= self.to
    }
}

impl FromStr for BitToken {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(TokenError::Empty);
        }

        let parse_bound = |bound: &str| {
            bound
                .trim()
                .parse::<usize>()
                .map_err(|source| TokenError::InvalidNumber {
                    token: token.to_owned(),
                    source,
                })
        };

        let (from, to) = match token.split_once(RANGE_SEPARATOR) {
            Some((from, to)) => (parse_bound(from)?, parse_bound(to)?),
            None => {
                let position = parse_bound(token)?;
                (position, position)
            }
        };

        if from == 0 {
            return Err(TokenError::ZeroPosition {
                token: token.to_owned(),
            });
        }
        if from > to {
            return Err(TokenError::ReversedRange {
                token: token.to_owned(),
                from,
                to,
            });
        }

        Ok(Self { from, to })
    }
}

impl Display for BitToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.from)
        } else {
            write!(f, "{}{RANGE_SEPARATOR}{}", self.from, self.to)
        }
    }
}

/// An error returned when a bit token cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("empty bit token")]
    Empty,

    #[error("invalid bit position in token `{token}`")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("bit positions are 1-based, got 0 in token `{token}`")]
    ZeroPosition { token: String },

    #[error("reversed range in token `{token}`: {from} > {to}")]
    ReversedRange {
        token: String,
        from: usize,
        to: usize,
    },
}

/// Parses a comma separated list of tokens.
///
/// Whitespace around tokens is ignored. A blank list yields no tokens,
/// any other malformed token fails the whole list.
///
/// # Examples
///
/// ```
/// use fold_merge::bits::{BitToken, TokenError, parse_tokens};
///
/// assert_eq!(
///     parse_tokens("7, 1-3,5"),
///     Ok(vec![BitToken::single(7), BitToken::range(1, 3), BitToken::single(5)]),
/// );
/// assert_eq!(parse_tokens("  "), Ok(vec![]));
/// assert!(matches!(parse_tokens("1,,2"), Err(TokenError::Empty)));
/// ```
pub fn parse_tokens(list: &str) -> Result<Vec<BitToken>, TokenError> {
    if list.trim().is_empty() {
        return Ok(Vec::new());
    }

    list.split(LIST_SEPARATOR).map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::{BitToken, TokenError, parse_tokens};
    use crate::store::BIT_LIST;

    #[test]
    fn parses_fixture_list() {
        let tokens = parse_tokens(BIT_LIST).expect("fixture list is well-formed");

        assert_eq!(tokens.len(), 13);
        assert_eq!(tokens[0], BitToken::range(22, 24));
        assert_eq!(tokens[1], BitToken::single(9));
        assert_eq!(tokens.iter().map(BitToken::to).max(), Some(50));
    }

    #[test]
    fn display_round_trips() {
        let rendered: Vec<_> = parse_tokens(BIT_LIST)
            .expect("fixture list is well-formed")
            .iter()
            .map(BitToken::to_string)
            .collect();

        assert_eq!(rendered.join(","), BIT_LIST);
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(matches!(
            "x".parse::<BitToken>(),
            Err(TokenError::InvalidNumber { token, .. }) if token == "x"
        ));
        assert!(matches!(
            "1-2-3".parse::<BitToken>(),
            Err(TokenError::InvalidNumber { .. })
        ));
        assert!(matches!(
            "-4".parse::<BitToken>(),
            Err(TokenError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn rejects_zero_and_reversed() {
        assert_eq!(
            "0".parse::<BitToken>(),
            Err(TokenError::ZeroPosition {
                token: "0".to_owned()
            })
        );
        assert_eq!(
            "9-3".parse::<BitToken>(),
            Err(TokenError::ReversedRange {
                token: "9-3".to_owned(),
                from: 9,
                to: 3,
            })
        );
    }

    #[test]
    fn error_messages() {
        let err = "4-2".parse::<BitToken>().unwrap_err();
        assert_eq!(err.to_string(), "reversed range in token `4-2`: 4 > 2");
        assert_eq!(TokenError::Empty.to_string(), "empty bit token");
    }

    #[test]
    #[should_panic(expected = "1-based")]
    fn zero_single_panics() {
        let _ = BitToken::single(0);
    }
}
