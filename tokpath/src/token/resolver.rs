//! Recursive token resolution.
//!
//! This module provides the `TokenResolver` type, the main interface for
//! expanding tokens against a [`TokenStore`].

use crate::error::{Error, Result};
use crate::platform::{Platform, Separator};
use crate::store::TokenStore;
use crate::token::syntax;
use crate::token::types::ResolvedPath;

/// Default bound on the number of expansion passes.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Expands tokens in path strings.
///
/// Resolution works in passes. Each pass splits the current string on
/// unescaped separators, expands every segment that is a token, and joins the
/// result with the running separator. Passes repeat until no token syntax
/// remains.
///
/// The separator starts as the one passed to [`resolve`](Self::resolve). A
/// token written `</name>` or `<\name>` replaces it for the rest of the
/// resolution. If no separator has been set by the end of a pass, the host's
/// native separator is used.
///
/// # Examples
///
/// ```
/// use tokpath::store::MemoryStore;
/// use tokpath::{Platform, Separator, TokenResolver};
///
/// let store = MemoryStore::new()
///     .with_literal("a", "<b>/x")
///     .with_literal("b", "y")
///     .with_platform_values("root", [("linux", "/data"), ("windows", "C:\\data")]);
/// let resolver = TokenResolver::new(store, Platform::new("linux"));
///
/// let path = resolver.resolve("<a>", Some(Separator::Slash)).unwrap();
/// assert_eq!(path.as_str(), "y/x");
///
/// let path = resolver.resolve("<root>/logs", Some(Separator::Slash)).unwrap();
/// assert_eq!(path.as_str(), "/data/logs");
/// ```
#[derive(Debug, Clone)]
pub struct TokenResolver<S> {
    /// Source of token values.
    store: S,
    /// Key used to select per-platform values.
    platform: Platform,
    /// Maximum number of expansion passes.
    max_depth: usize,
}

impl<S: TokenStore> TokenResolver<S> {
    /// Create a resolver over `store` for `platform`.
    pub fn new(store: S, platform: Platform) -> Self {
        Self {
            store,
            platform,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Configure the maximum number of expansion passes.
    ///
    /// A store with cyclic references never reaches a resolved string; the
    /// depth bound turns that into an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokpath::store::MemoryStore;
    /// use tokpath::{Platform, TokenResolver};
    ///
    /// let resolver = TokenResolver::new(MemoryStore::new(), Platform::host())
    ///     .with_max_depth(8);
    /// assert_eq!(resolver.max_depth(), 8);
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// The platform used to select per-platform values.
    #[must_use]
    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// The maximum number of expansion passes.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolve every token in `input`.
    ///
    /// An input that is already resolved is returned untouched when
    /// `separator` is `None`; with a separator, its separators are rewritten.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A store lookup fails
    /// - A per-platform token has no entry for this platform
    /// - Expansion needs more than `max_depth` passes
    /// - Token text remains that is not a whole segment (e.g. `x<a>`)
    pub fn resolve(&self, input: &str, separator: Option<Separator>) -> Result<ResolvedPath> {
        let mut current = input.to_string();
        let mut separator = separator;
        let mut passes = 0;

        while !syntax::is_resolved(&current) {
            if passes == self.max_depth {
                return Err(Error::ExpansionDepthExceeded {
                    depth: self.max_depth,
                    input: current,
                });
            }
            passes += 1;

            let (expanded, used) = self.expand_pass(&current, separator)?;
            log::debug!("Pass {passes}: '{current}' -> '{expanded}'");
            current = expanded;
            separator = Some(used);
        }

        let resolved = match separator {
            Some(sep) => syntax::replace_separators(&current, sep),
            None => current,
        };

        Ok(ResolvedPath::new(resolved, input.to_string(), separator))
    }

    /// Resolve `input` without a separator override and return the string.
    ///
    /// # Errors
    ///
    /// Same as [`resolve`](Self::resolve).
    pub fn resolve_str(&self, input: &str) -> Result<String> {
        self.resolve(input, None).map(ResolvedPath::into_string)
    }

    /// Expand a single segment.
    ///
    /// Returns the replacement and the separator the token declares. A
    /// segment that is not a token comes back unchanged with no separator.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails or a per-platform value has no
    /// entry for this platform.
    pub fn process_token(&self, segment: &str) -> Result<(String, Option<Separator>)> {
        let Some(spec) = syntax::parse_token(segment) else {
            return Ok((segment.to_string(), None));
        };

        let value = self.store.lookup(spec.name)?;
        let replacement = value.select(spec.name, &self.platform)?;
        log::debug!("Token '{}' -> '{replacement}'", spec.name);

        Ok((replacement, spec.separator))
    }

    /// True iff `input` contains no token syntax.
    #[must_use]
    pub fn is_resolved(input: &str) -> bool {
        syntax::is_resolved(input)
    }

    /// True iff `segment` is exactly one token.
    #[must_use]
    pub fn is_token(segment: &str) -> bool {
        syntax::is_token(segment)
    }

    /// Expand every whole-segment token of `input` once and join the
    /// segments. Returns the joined string and the separator used.
    fn expand_pass(
        &self,
        input: &str,
        separator: Option<Separator>,
    ) -> Result<(String, Separator)> {
        let mut segments: Vec<String> = Vec::new();
        let mut separator = separator;
        let mut expanded_any = false;

        for segment in syntax::split_segments(input) {
            if !syntax::is_token(segment) {
                segments.push(segment.to_string());
                continue;
            }

            let (replacement, declared) = self.process_token(segment)?;
            segments.extend(
                syntax::split_segments(&replacement)
                    .into_iter()
                    .map(str::to_string),
            );
            separator = declared.or(separator);
            expanded_any = true;
        }

        if !expanded_any {
            return Err(Error::StalledToken {
                input: input.to_string(),
            });
        }

        let separator = separator.unwrap_or_else(Separator::native);
        Ok((segments.join(&separator.to_string()), separator))
    }
}
