//! Navigation targets: path, query and fragment

use std::fmt;

use crate::path::normalize_path;

/// A parsed navigation target such as `/order/7?ref=mail#status`
///
/// The path is normalized; query pairs are percent-decoded (`+` is a space)
/// and kept in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub hash: Option<String>,
}

impl Location {
    /// Parses a target string
    ///
    /// ```
    /// use exchange_router::Location;
    ///
    /// let loc = Location::parse("/order/7/?ref=mail&x=a+b#status");
    /// assert_eq!(loc.path, "/order/7");
    /// assert_eq!(loc.query_value("ref"), Some("mail"));
    /// assert_eq!(loc.query_value("x"), Some("a b"));
    /// assert_eq!(loc.hash.as_deref(), Some("status"));
    /// ```
    pub fn parse(target: &str) -> Self {
        let (rest, hash) = match target.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (target, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, parse_query(query)),
            None => (rest, Vec::new()),
        };

        Self {
            path: normalize_path(path).into_owned(),
            query,
            hash: hash.filter(|h| !h.is_empty()),
        }
    }

    /// First value for a query key
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if !self.query.is_empty() {
            let query = self
                .query
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            write!(f, "?{}", query)?;
        }
        if let Some(hash) = &self.hash {
            write!(f, "#{}", hash)?;
        }
        Ok(())
    }
}

impl From<&str> for Location {
    fn from(target: &str) -> Self {
        Location::parse(target)
    }
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(k), decode_component(v))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|v| v.into_owned())
        .unwrap_or(spaced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_path() {
        let loc = Location::parse("/kyc");
        assert_eq!(loc.path, "/kyc");
        assert!(loc.query.is_empty());
        assert_eq!(loc.hash, None);
    }

    #[test]
    fn test_parse_empty_parts() {
        let loc = Location::parse("?#");
        assert_eq!(loc.path, "/");
        assert!(loc.query.is_empty());
        assert_eq!(loc.hash, None);
    }

    #[test]
    fn test_query_key_without_value() {
        let loc = Location::parse("/exchange?from=btc&debug");
        assert_eq!(loc.query_value("from"), Some("btc"));
        assert_eq!(loc.query_value("debug"), Some(""));
    }

    #[test]
    fn test_display_encodes_query() {
        let loc = Location::parse("/exchange?to=usd%20t#form");
        assert_eq!(loc.to_string(), "/exchange?to=usd%20t#form");
    }
}
