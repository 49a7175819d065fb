//! Decoding lists of 1-based bit positions into binary digit strings.
//!
//! The input is a comma separated list of [`BitToken`]s, each either a single
//! position (`"5"`) or an inclusive range (`"14-17"`). The decoded string is as
//! long as the highest position referenced, with `'1'` at every covered position
//! and `'0'` everywhere else.
//!
//! ```
//! assert_eq!(fold_merge::bits::decode("7,1-3,5").unwrap(), "1110101");
//! ```

mod bit_string;
mod token;

pub use bit_string::*;
pub use token::*;
