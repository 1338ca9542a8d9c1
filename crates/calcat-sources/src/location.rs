//! Source locations: URLs and filesystem paths.
//!
//! A location is a URL when it parses as an absolute URL whose scheme is at
//! least two characters long; everything else (including `C:\...` style
//! Windows paths) is a filesystem path. `file://` URLs are resolved to paths.
//!
//! The legacy `webcal` scheme is rewritten to `http` (and `webcals` to
//! `https`) at parse time, so every fetch sees the normalized URL. Nothing
//! but the scheme changes.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;
use url::Url;

/// Where a location points after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationKind {
    /// A network resource.
    Url(Url),
    /// A local file.
    Path(PathBuf),
}

/// A calendar source as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    input: String,
    kind: LocationKind,
}

impl Location {
    /// Classifies `input` as a URL or a path, normalizing `webcal` URLs.
    pub fn parse(input: impl Into<String>) -> Self {
        let input = input.into();
        let kind = match Url::parse(&input) {
            Ok(url) if url.scheme().len() > 1 => {
                let url = normalize_scheme(url);
                if url.scheme() == "file" {
                    match url.to_file_path() {
                        Ok(path) => LocationKind::Path(path),
                        Err(()) => LocationKind::Url(url),
                    }
                } else {
                    LocationKind::Url(url)
                }
            }
            _ => LocationKind::Path(PathBuf::from(&input)),
        };
        Self { input, kind }
    }

    /// Returns the location exactly as it was given.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the normalized target.
    pub fn kind(&self) -> &LocationKind {
        &self.kind
    }

    /// Returns true if this location is fetched over the network.
    pub fn is_url(&self) -> bool {
        matches!(self.kind, LocationKind::Url(_))
    }

    /// Returns the URL to fetch, if this is a network location.
    pub fn url(&self) -> Option<&Url> {
        match &self.kind {
            LocationKind::Url(url) => Some(url),
            LocationKind::Path(_) => None,
        }
    }

    /// Returns the file path, if this is a local location.
    pub fn path(&self) -> Option<&Path> {
        match &self.kind {
            LocationKind::Path(path) => Some(path),
            LocationKind::Url(_) => None,
        }
    }
}

impl FromStr for Location {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.input)
    }
}

/// Rewrites `webcal`/`webcals` URLs to `http`/`https`.
///
/// `Url::set_scheme` refuses to switch between special and non-special
/// schemes, so the URL is re-parsed with the new scheme prefix.
pub fn normalize_scheme(url: Url) -> Url {
    let replacement = match url.scheme() {
        "webcal" => "http",
        "webcals" => "https",
        _ => "",
    };
    if replacement.is_empty() {
        return url;
    }

    let rest = &url.as_str()[url.scheme().len()..];
    match Url::parse(&format!("{}{}", replacement, rest)) {
        Ok(normalized) => {
            debug!(from = %url, to = %normalized, "Normalized webcal URL");
            normalized
        }
        Err(e) => {
            debug!(url = %url, error = %e, "Could not normalize webcal URL");
            url
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webcal_becomes_http() {
        let location = Location::parse("webcal://example.com/cal.ics");
        assert!(location.is_url());
        assert_eq!(
            location.url().map(Url::as_str),
            Some("http://example.com/cal.ics")
        );
        assert_eq!(location.input(), "webcal://example.com/cal.ics");
        assert_eq!(location.to_string(), "webcal://example.com/cal.ics");
    }

    #[test]
    fn webcal_keeps_port_path_and_query() {
        let location = Location::parse("webcal://example.com:8080/a/b.ics?token=x&y=1#frag");
        assert_eq!(
            location.url().map(Url::as_str),
            Some("http://example.com:8080/a/b.ics?token=x&y=1#frag")
        );
    }

    #[test]
    fn webcals_becomes_https() {
        let location = Location::parse("webcals://example.com/cal.ics");
        assert_eq!(
            location.url().map(Url::as_str),
            Some("https://example.com/cal.ics")
        );
    }

    #[test]
    fn https_is_untouched() {
        let location = Location::parse("https://example.com/cal.ics");
        assert_eq!(
            location.url().map(Url::as_str),
            Some("https://example.com/cal.ics")
        );
    }

    #[test]
    fn relative_and_absolute_paths() {
        assert_eq!(
            Location::parse("cal.ics").path(),
            Some(Path::new("cal.ics"))
        );
        assert_eq!(
            Location::parse("/tmp/cal.ics").path(),
            Some(Path::new("/tmp/cal.ics"))
        );
        assert!(!Location::parse("./work/cal.ics").is_url());
    }

    #[test]
    fn drive_letter_is_a_path() {
        let location = Location::parse("C:\\calendars\\work.ics");
        assert!(!location.is_url());
    }

    #[cfg(unix)]
    #[test]
    fn file_url_is_a_path() {
        let location = Location::parse("file:///tmp/cal.ics");
        assert_eq!(location.path(), Some(Path::new("/tmp/cal.ics")));
    }

    #[test]
    fn from_str_never_fails() {
        let location: Location = "webcal://example.com/x.ics".parse().unwrap();
        assert!(location.is_url());
    }
}
