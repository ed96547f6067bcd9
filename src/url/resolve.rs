use crate::UrlError;
use url::{ParseError, Url};

/// Resolves a candidate href against a base URL
///
/// A candidate that already carries a scheme is returned as-is; anything
/// else is resolved against `base` per standard relative-reference rules
/// (scheme and authority inherited from the base, paths merged, query and
/// fragment taken from the candidate).
///
/// The function is pure and idempotent: resolving an already-resolved URL
/// against the same base returns it unchanged.
///
/// # Arguments
///
/// * `base` - The URL of the page the href was found on
/// * `candidate` - The raw href, absolute or relative
///
/// # Returns
///
/// * `Ok(Url)` - The absolute URL
/// * `Err(UrlError)` - The candidate could not be parsed or resolved
///
/// # Examples
///
/// ```
/// use boardwalk::url::resolve;
/// use url::Url;
///
/// let base = Url::parse("https://city.example.org/search/egr/").unwrap();
/// let url = resolve(&base, "/egr/d/chief-engineer/123.html").unwrap();
/// assert_eq!(url.as_str(), "https://city.example.org/egr/d/chief-engineer/123.html");
/// ```
pub fn resolve(base: &Url, candidate: &str) -> Result<Url, UrlError> {
    let candidate = candidate.trim();

    match Url::parse(candidate) {
        Ok(absolute) => Ok(absolute),
        Err(ParseError::RelativeUrlWithoutBase) => base
            .join(candidate)
            .map_err(|e| UrlError::Resolve(format!("{} against {}: {}", candidate, base, e))),
        Err(e) => Err(UrlError::Parse(format!("{}: {}", candidate, e))),
    }
}
