//! Epoch/version/release triples.

use std::fmt;

use crate::config::EvrSyntax;

/// A borrowed `[epoch:]version[-release]` triple
///
/// Empty epoch and release parts are represented as `None`. An epoch
/// separator with nothing in front of it (`":1.0"`) yields epoch `"0"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evr<'a> {
    epoch: Option<&'a str>,
    version: &'a str,
    release: Option<&'a str>,
}

impl<'a> Evr<'a> {
    /// Create an EVR from its parts, treating empty parts as absent
    pub fn new(epoch: Option<&'a str>, version: &'a str, release: Option<&'a str>) -> Self {
        Self {
            epoch: epoch.filter(|e| !e.is_empty()),
            version,
            release: release.filter(|r| !r.is_empty()),
        }
    }

    /// Parse with the default `:` and `-` separators
    pub fn parse(evr: &'a str) -> Self {
        Self::parse_with(evr, &EvrSyntax::default())
    }

    /// Parse with explicit separators
    ///
    /// The epoch is the run of leading digits when it is followed by the
    /// epoch separator. The release is everything after the last release
    /// separator.
    pub fn parse_with(evr: &'a str, syntax: &EvrSyntax) -> Self {
        let digits = evr.find(|c: char| !c.is_ascii_digit()).unwrap_or(evr.len());
        let (epoch, rest) = match evr[digits..].strip_prefix(syntax.epoch_separator) {
            Some(rest) if digits == 0 => (Some("0"), rest),
            Some(rest) => (Some(&evr[..digits]), rest),
            None => (None, evr),
        };
        let (version, release) = match rest.rsplit_once(syntax.release_separator) {
            Some((version, release)) => (version, Some(release)),
            None => (rest, None),
        };
        Self::new(epoch, version, release)
    }

    pub fn epoch(&self) -> Option<&'a str> {
        self.epoch
    }

    pub fn version(&self) -> &'a str {
        self.version
    }

    pub fn release(&self) -> Option<&'a str> {
        self.release
    }
}

impl fmt::Display for Evr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(epoch) = self.epoch {
            write!(f, "{}:", epoch)?;
        }
        f.write_str(self.version)?;
        if let Some(release) = self.release {
            write!(f, "-{}", release)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_only() {
        let evr = Evr::parse("1.2.3");
        assert_eq!(evr.epoch(), None);
        assert_eq!(evr.version(), "1.2.3");
        assert_eq!(evr.release(), None);
    }

    #[test]
    fn test_full_triple() {
        let evr = Evr::parse("2:1.0-alt1");
        assert_eq!(evr.epoch(), Some("2"));
        assert_eq!(evr.version(), "1.0");
        assert_eq!(evr.release(), Some("alt1"));
        assert_eq!(evr.to_string(), "2:1.0-alt1");
    }

    #[test]
    fn test_release_splits_on_last_separator() {
        let evr = Evr::parse("1.0-rc1-3");
        assert_eq!(evr.version(), "1.0-rc1");
        assert_eq!(evr.release(), Some("3"));
    }

    #[test]
    fn test_empty_epoch_is_zero() {
        let evr = Evr::parse(":1.0");
        assert_eq!(evr.epoch(), Some("0"));
        assert_eq!(evr.version(), "1.0");
    }

    #[test]
    fn test_epoch_requires_leading_digits() {
        // a colon after non-digits is part of the version
        let evr = Evr::parse("a1:2.0");
        assert_eq!(evr.epoch(), None);
        assert_eq!(evr.version(), "a1:2.0");
    }

    #[test]
    fn test_empty_release_is_absent() {
        let evr = Evr::parse("1.0-");
        assert_eq!(evr.version(), "1.0");
        assert_eq!(evr.release(), None);
        assert_eq!(evr.to_string(), "1.0");
    }

    #[test]
    fn test_digits_only() {
        let evr = Evr::parse("12");
        assert_eq!(evr.epoch(), None);
        assert_eq!(evr.version(), "12");
    }

    #[test]
    fn test_custom_syntax() {
        let syntax = EvrSyntax {
            epoch_separator: '!',
            release_separator: '_',
        };
        let evr = Evr::parse_with("3!1.0-beta_2", &syntax);
        assert_eq!(evr.epoch(), Some("3"));
        assert_eq!(evr.version(), "1.0-beta");
        assert_eq!(evr.release(), Some("2"));
    }
}
