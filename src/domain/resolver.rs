// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recursive placeholder substitution.
//!
//! Values may reference other keys with placeholder tokens such as
//! `${server.port}`. The name inside a token may itself contain tokens, so
//! `${${environment}.server.host}` first resolves `environment` and then looks up
//! the key that name produces. Tokens are matched leftmost-innermost: the first
//! closing delimiter that follows an unmatched opening delimiter ends the token
//! that is substituted next.
//!
//! Each key is resolved at most once and memoized. Resolution runs on an
//! explicit stack of partially expanded values rather than the call stack, so
//! arbitrarily long reference chains resolve. Keys on that stack are tracked in
//! an in-progress set, and a key that is requested again while still in that set
//! is a cycle.

use crate::domain::delimiters::DelimiterPair;
use crate::domain::errors::{ConfigError, Result};
use crate::domain::ranked::FlatConfig;
use crate::domain::resolved::ResolvedConfig;
use std::collections::{HashMap, HashSet, VecDeque};
use std::ops::Range;

/// Resolves placeholder tokens across a flat mapping.
///
/// References to keys that no source defines resolve to the empty string unless
/// strict mode is enabled, in which case they fail with
/// [`ConfigError::UnresolvedPlaceholder`].
///
/// # Examples
///
/// ```
/// use layercfg::domain::{DelimiterPair, PlaceholderResolver};
/// use std::collections::HashMap;
///
/// let flat: HashMap<String, String> = [
///     ("environment", "PROD"),
///     ("PROD.server.host", "10.10.10.10"),
///     ("server.port", "8080"),
///     ("server.url", "http://${${environment}.server.host}:${server.port}"),
/// ]
/// .into_iter()
/// .map(|(k, v)| (k.to_string(), v.to_string()))
/// .collect();
///
/// let resolved = PlaceholderResolver::new(DelimiterPair::default())
///     .resolve(&flat)
///     .unwrap();
///
/// assert_eq!(resolved.get("server.url"), Some("http://10.10.10.10:8080"));
/// ```
#[derive(Clone, Debug)]
pub struct PlaceholderResolver {
    delimiters: DelimiterPair,
    strict: bool,
}

impl PlaceholderResolver {
    /// Creates a permissive resolver for the given delimiters.
    pub fn new(delimiters: DelimiterPair) -> Self {
        Self {
            delimiters,
            strict: false,
        }
    }

    /// Sets whether references to undefined keys are an error.
    pub fn strict(mut self, enabled: bool) -> Self {
        self.strict = enabled;
        self
    }

    /// Returns the delimiters this resolver recognizes.
    pub fn delimiters(&self) -> &DelimiterPair {
        &self.delimiters
    }

    /// Resolves every value of `flat`.
    ///
    /// `flat` is left untouched; the result is a new mapping with the same keys.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::InvalidDelimiters`] if the delimiter pair is unusable
    /// * [`ConfigError::CyclicReference`] if a key depends on itself
    /// * [`ConfigError::MalformedPlaceholder`] if a value has an unclosed token
    /// * [`ConfigError::UnresolvedPlaceholder`] in strict mode, for undefined keys
    pub fn resolve(&self, flat: &FlatConfig) -> Result<ResolvedConfig> {
        self.delimiters.validate()?;

        let mut pass = Resolution {
            raw: flat,
            delimiters: &self.delimiters,
            strict: self.strict,
            resolved: HashMap::with_capacity(flat.len()),
            in_progress: HashSet::new(),
            substitutions: 0,
        };

        // Sorted so that the key named in a cycle error is deterministic.
        let mut keys: Vec<&String> = flat.keys().collect();
        keys.sort_unstable();
        for key in keys {
            pass.resolve_key(key)?;
        }

        tracing::debug!(
            keys = pass.resolved.len(),
            substitutions = pass.substitutions,
            delimiters = %self.delimiters,
            "Resolved placeholders"
        );

        Ok(ResolvedConfig::from_map(pass.resolved))
    }
}

/// Working state for a single resolution pass.
struct Resolution<'a> {
    raw: &'a FlatConfig,
    delimiters: &'a DelimiterPair,
    strict: bool,
    resolved: HashMap<String, String>,
    in_progress: HashSet<String>,
    substitutions: usize,
}

/// A key whose value is partially expanded.
struct Frame {
    key: String,
    value: String,
    /// Where scanning of `value` continues.
    cursor: Cursor,
}

impl Resolution<'_> {
    /// Resolves `root` together with every key it depends on.
    fn resolve_key(&mut self, root: &str) -> Result<()> {
        if self.resolved.contains_key(root) {
            return Ok(());
        }

        let mut stack = vec![self.enter(root)?];
        while let Some(frame) = stack.last_mut() {
            let token = match scan(&frame.value, self.delimiters, &frame.cursor) {
                Scan::Token(token) => token,
                Scan::Unclosed => {
                    return Err(ConfigError::MalformedPlaceholder {
                        key: frame.key.clone(),
                        value: frame.value.clone(),
                    })
                }
                Scan::Clean => {
                    if let Some(done) = stack.pop() {
                        self.in_progress.remove(&done.key);
                        self.resolved.insert(done.key, done.value);
                    }
                    continue;
                }
            };

            let name = &frame.value[token.name.clone()];
            if let Some(replacement) = self.resolved.get(name) {
                tracing::trace!(
                    key = frame.key.as_str(),
                    placeholder = name,
                    "Substituting placeholder"
                );
                frame.value.replace_range(token.span, replacement);
            } else if self.raw.contains_key(name) {
                // Resolve the target first; the token is found again afterwards.
                let name = name.to_string();
                let target = self.enter(&name)?;
                stack.push(target);
                continue;
            } else if self.strict {
                return Err(ConfigError::UnresolvedPlaceholder {
                    key: frame.key.clone(),
                    name: name.to_string(),
                });
            } else {
                tracing::debug!(
                    key = frame.key.as_str(),
                    placeholder = name,
                    "Placeholder refers to undefined key"
                );
                frame.value.replace_range(token.span, "");
            }

            frame.cursor = token.resume;
            self.substitutions += 1;
        }

        Ok(())
    }

    /// Marks `key` as in progress and starts expanding its raw value.
    fn enter(&mut self, key: &str) -> Result<Frame> {
        if !self.in_progress.insert(key.to_string()) {
            return Err(ConfigError::CyclicReference {
                key: key.to_string(),
            });
        }

        Ok(Frame {
            key: key.to_string(),
            value: self.raw.get(key).cloned().unwrap_or_default(),
            cursor: Cursor::default(),
        })
    }
}

/// Scanner state: the next byte to examine and the unmatched opening
/// delimiters before it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Cursor {
    pos: usize,
    opened: Vec<Open>,
}

/// An opening delimiter still waiting for its close.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Open {
    at: usize,
    /// An earlier scanner state whose lookahead ends at or before `at`.
    resume: Checkpoint,
}

/// A position the scanner visited and how many delimiters were open there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Checkpoint {
    pos: usize,
    depth: usize,
}

/// Byte ranges of a single token within a value.
#[derive(Debug, PartialEq, Eq)]
struct Token {
    /// The whole token, delimiters included.
    span: Range<usize>,
    /// The name between the delimiters.
    name: Range<usize>,
    /// Where to continue once the token has been replaced.
    resume: Cursor,
}

#[derive(Debug, PartialEq, Eq)]
enum Scan {
    /// No opening delimiter remains.
    Clean,
    /// An opening delimiter is never closed.
    Unclosed,
    /// The leftmost-innermost token.
    Token(Token),
}

/// Finds the leftmost-innermost token in `text`, starting from `from`.
///
/// A closing delimiter with no preceding unmatched opening delimiter is plain
/// text.
///
/// Replacing a token only changes text from its start onwards, but text just
/// before it may combine with the replacement into new delimiters. The returned
/// resume cursor is therefore a state the scanner reached before it looked at
/// any byte of the token, so scanning from it after the replacement finds the
/// same tokens as scanning the new text from the beginning.
fn scan(text: &str, delimiters: &DelimiterPair, from: &Cursor) -> Scan {
    let open = delimiters.open();
    let close = delimiters.close();
    let reach = open.len().max(close.len());

    let mut opened = from.opened.clone();
    let mut recent: VecDeque<Checkpoint> = VecDeque::with_capacity(reach + 1);
    let mut i = from.pos;

    while i < text.len() {
        if recent.len() > reach {
            recent.pop_front();
        }
        recent.push_back(Checkpoint {
            pos: i,
            depth: opened.len(),
        });

        let rest = &text[i..];
        if rest.starts_with(open) {
            let resume = recent
                .iter()
                .rev()
                .find(|c| c.pos + reach <= i)
                .copied()
                .or_else(|| opened.last().map(|o| o.resume))
                .unwrap_or_default();
            opened.push(Open { at: i, resume });
            i += open.len();
        } else if rest.starts_with(close) {
            if let Some(start) = opened.pop() {
                opened.truncate(start.resume.depth);
                return Scan::Token(Token {
                    span: start.at..i + close.len(),
                    name: start.at + open.len()..i,
                    resume: Cursor {
                        pos: start.resume.pos,
                        opened,
                    },
                });
            }
            i += close.len();
        } else {
            i += rest.chars().next().map_or(1, char::len_utf8);
        }
    }

    if opened.is_empty() {
        Scan::Clean
    } else {
        Scan::Unclosed
    }
}
