//! Lazy tokenizer over a raw option string.
//!
//! Tokens are separated by `,` and have the form `name` or `name=value`.
//! A double-quoted region may contain separators; the quotes are kept in the
//! value. A trailing separator is accepted.
use std::iter::FusedIterator;

use crate::constants::{OPT_SEPARATOR, QUOTE, VALUE_SEPARATOR};
use crate::types::errors::{OptionError, Result};

/// One unclassified option token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken<'a> {
    pub name: &'a str,
    pub value: Option<&'a str>,
}

/// Pull-based token stream. Fused after the first error.
#[derive(Debug, Clone)]
pub struct OptTokens<'a> {
    rest: &'a str,
    done: bool,
}

impl<'a> OptTokens<'a> {
    #[must_use]
    pub fn new(optstr: &'a str) -> Self {
        Self {
            rest: optstr,
            done: false,
        }
    }

    /// Input not yet consumed.
    #[must_use]
    pub fn remainder(&self) -> &'a str {
        self.rest
    }

    fn fail(&mut self, token: &str, reason: &'static str) -> Option<Result<RawToken<'a>>> {
        self.done = true;
        Some(Err(OptionError::malformed(token, reason)))
    }
}

impl<'a> Iterator for OptTokens<'a> {
    type Item = Result<RawToken<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.rest.is_empty() {
            self.done = true;
            return None;
        }
        let input = self.rest;
        let mut quoted = false;
        let mut end = input.len();
        let mut eq = None;
        for (i, c) in input.char_indices() {
            if c == QUOTE {
                quoted = !quoted;
            } else if quoted {
                continue;
            } else if c == OPT_SEPARATOR {
                end = i;
                break;
            } else if c == VALUE_SEPARATOR && eq.is_none() {
                eq = Some(i);
            }
        }
        let token = &input[..end];
        if quoted {
            return self.fail(token, "unterminated quote");
        }
        self.rest = input.get(end + OPT_SEPARATOR.len_utf8()..).unwrap_or("");
        if token.is_empty() {
            return self.fail(token, "empty option");
        }
        let (name, value) = match eq {
            Some(i) => (&token[..i], Some(&token[i + VALUE_SEPARATOR.len_utf8()..])),
            None => (token, None),
        };
        if name.is_empty() {
            return self.fail(token, "missing option name");
        }
        Some(Ok(RawToken { name, value }))
    }
}

impl FusedIterator for OptTokens<'_> {}
