use std::fmt::{self, Debug};

use super::{BitToken, TokenError, parse_tokens};
use crate::strategy::{Characteristics, Strategy, assert_strategy};

const ZERO: u8 = b'0';
const ONE: u8 = b'1';

/// A [`Strategy`] that decodes [`BitToken`]s into a string of binary digits.
/// Its [`Output`](Strategy::Output) is [`String`].
///
/// Position `i` (1-based) of the output is `'1'` if any token covers it and
/// `'0'` otherwise. The output is as long as the highest position referenced.
///
/// Folding grows the buffer with `'0'`s whenever a token reaches past its end.
/// Two buffers are combined by keeping the longer one and raising every `'1'`
/// of the shorter one into it, so token order and partitioning never change the
/// result. This strategy is accepted by [`ForkJoin`](crate::fork_join::ForkJoin).
///
/// # Examples
///
/// ```
/// use fold_merge::{prelude::*, bits::{BitString, parse_tokens}};
///
/// let strategy = BitString::new();
///
/// assert_eq!(strategy.collect_all(parse_tokens("3").unwrap()), "001");
/// assert_eq!(strategy.collect_all(parse_tokens("1,3,5").unwrap()), "10101");
/// assert_eq!(strategy.collect_all(parse_tokens("1-3").unwrap()), "111");
/// assert_eq!(strategy.collect_all(parse_tokens("7,1-3,5").unwrap()), "1110101");
/// ```
#[derive(Clone, Copy, Default)]
pub struct BitString;

impl BitString {
    #[inline]
    pub const fn new() -> Self {
        assert_strategy(Self)
    }
}

impl Strategy for BitString {
    type Item = BitToken;
    // ASCII `'0'`s and `'1'`s.
    type State = Vec<u8>;
    type Output = String;

    #[inline]
    fn supply(&self) -> Self::State {
        Vec::new()
    }

    fn accumulate(&self, bits: &mut Self::State, token: Self::Item) {
        if bits.len() < token.to() {
            bits.resize(token.to(), ZERO);
        }
        bits[token.from() - 1..token.to()].fill(ONE);
    }

    fn combine(&self, a: Self::State, b: Self::State) -> Self::State {
        let (mut longer, shorter) = if a.len() > b.len() { (a, b) } else { (b, a) };

        // Past the shorter length only `longer` has data, already final from its own fold.
        for (bit, &other) in longer.iter_mut().zip(&shorter) {
            if other == ONE {
                *bit = ONE;
            }
        }
        longer
    }

    #[inline]
    fn finish(&self, bits: Self::State) -> Self::Output {
        bits.into_iter().map(char::from).collect()
    }

    #[inline]
    fn characteristics(&self) -> Characteristics {
        Characteristics::UNORDERED
    }
}

impl Debug for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BitString")
    }
}

/// Parses a comma separated token list and decodes it sequentially.
///
/// # Examples
///
/// ```
/// use fold_merge::bits::{decode, TokenError};
///
/// assert_eq!(decode("2,4-5"), Ok("01011".to_owned()));
/// assert_eq!(decode(""), Ok(String::new()));
/// assert!(matches!(decode("2,four"), Err(TokenError::InvalidNumber { .. })));
/// ```
pub fn decode(list: &str) -> Result<String, TokenError> {
    Ok(BitString::new().collect_all(parse_tokens(list)?))
}
