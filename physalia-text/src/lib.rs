//! Byte-string search algorithms.
//!
//! - **Pattern matching** — [`kmp`], [`rabin_karp`], the reusable
//!   [`Matcher`] with lazy [`Matcher::find_iter`]
//! - **Prefix function** — [`prefix_function`]
//! - **Palindromes** — [`longest_palindrome`] (Manacher, O(n)),
//!   [`is_palindrome`]
//!
//! The alphabet is raw bytes throughout; callers matching textual data pass
//! `str::as_bytes()` and interpret returned offsets as byte offsets.

pub mod palindrome;
pub mod pattern;

pub use palindrome::{is_palindrome, longest_palindrome, manacher_radii, PalindromeSpan};
pub use pattern::{kmp, prefix_function, rabin_karp, Matcher, MatcherKind, Occurrences};
