//! Route pattern parsing and segment matching
//!
//! A pattern is a `/`-separated template such as `/docs/how-it-works` or
//! `/order/:id`. Literal segments must match exactly; a `:name` segment binds
//! exactly one non-empty path segment.

use std::collections::HashMap;
use std::fmt;

use crate::error::PatternError;
use crate::path;

/// Parameters bound by a successful match (name → decoded value)
pub type Params = HashMap<String, String>;

/// One segment of a parsed route pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Literal text: `exchange` in `/exchange`
    Static(String),
    /// Named parameter: `id` in `/order/:id`
    Param(String),
}

impl Segment {
    /// Classifies a raw pattern segment
    ///
    /// ```
    /// use exchange_router::Segment;
    ///
    /// assert_eq!(Segment::classify("kyc"), Segment::Static("kyc".into()));
    /// assert_eq!(Segment::classify(":id"), Segment::Param("id".into()));
    /// ```
    pub fn classify(raw: &str) -> Self {
        match raw.strip_prefix(':') {
            Some(name) => Segment::Param(name.to_string()),
            None => Segment::Static(raw.to_string()),
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, Segment::Param(_))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Static(text) => f.write_str(text),
            Segment::Param(name) => write!(f, ":{}", name),
        }
    }
}

/// A parsed, validated route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parses a pattern string
    ///
    /// # Examples
    ///
    /// ```
    /// use exchange_router::{PathPattern, Segment};
    ///
    /// let pattern = PathPattern::parse("/order/:id").unwrap();
    /// assert_eq!(pattern.params(), vec!["id"]);
    /// assert_eq!(pattern.segments()[0], Segment::Static("order".into()));
    ///
    /// assert!(PathPattern::parse("order/:id").is_err());
    /// assert!(PathPattern::parse("/order/:").is_err());
    /// ```
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        if !source.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash(source.to_string()));
        }

        if source == "/" {
            return Ok(Self {
                source: source.to_string(),
                segments: Vec::new(),
            });
        }

        if source.ends_with('/') {
            return Err(PatternError::TrailingSlash(source.to_string()));
        }

        let segments = source[1..]
            .split('/')
            .map(|raw| {
                if raw.is_empty() {
                    return Err(PatternError::EmptySegment(source.to_string()));
                }
                let segment = Segment::classify(raw);
                if let Segment::Param(name) = &segment {
                    validate_param_name(source, name)?;
                }
                Ok(segment)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen: Vec<&str> = Vec::new();
        for segment in &segments {
            if let Segment::Param(name) = segment {
                if seen.contains(&name.as_str()) {
                    return Err(PatternError::DuplicateParam {
                        pattern: source.to_string(),
                        name: name.clone(),
                    });
                }
                seen.push(name);
            }
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The pattern exactly as declared
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Parameter names in declaration order
    pub fn params(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Param(name) => Some(name.as_str()),
                Segment::Static(_) => None,
            })
            .collect()
    }

    pub fn is_static(&self) -> bool {
        !self.segments.iter().any(Segment::is_dynamic)
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Shape of the pattern with parameter names erased
    ///
    /// Two patterns with the same shape accept exactly the same URLs.
    ///
    /// ```
    /// use exchange_router::PathPattern;
    ///
    /// let a = PathPattern::parse("/order/:id").unwrap();
    /// let b = PathPattern::parse("/order/:code").unwrap();
    /// assert_eq!(a.shape(), b.shape());
    /// ```
    pub fn shape(&self) -> String {
        if self.segments.is_empty() {
            return "/".to_string();
        }
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Static(text) => format!("/{}", text),
                Segment::Param(_) => "/:".to_string(),
            })
            .collect()
    }

    /// Ranking used to order routes: lower wins
    ///
    /// Static patterns rank `0`. Dynamic patterns rank
    /// `dynamic_count + depth + 1`, so deeper and more parameterized
    /// patterns are tried later.
    ///
    /// ```
    /// use exchange_router::PathPattern;
    ///
    /// assert_eq!(PathPattern::parse("/terms").unwrap().priority(), 0);
    /// assert_eq!(PathPattern::parse("/order/:id").unwrap().priority(), 4);
    /// ```
    pub fn priority(&self) -> usize {
        let dynamic_count = self.segments.iter().filter(|s| s.is_dynamic()).count();
        if dynamic_count == 0 {
            0
        } else {
            dynamic_count + self.depth() + 1
        }
    }

    /// Matches a canonical path against this pattern
    ///
    /// The caller is expected to pass a normalized path (see
    /// [`normalize_path`](crate::path::normalize_path)). Every path segment is
    /// percent-decoded before comparison, so `/about%2Dus` matches `/about-us`;
    /// a segment that does not decode to UTF-8 is used verbatim.
    ///
    /// ```
    /// use exchange_router::PathPattern;
    ///
    /// let pattern = PathPattern::parse("/order/:id").unwrap();
    /// let params = pattern.matches("/order/a%20b", false).unwrap();
    /// assert_eq!(params["id"], "a b");
    ///
    /// assert!(pattern.matches("/order", false).is_none());
    /// assert!(pattern.matches("/order/1/2", false).is_none());
    /// ```
    pub fn matches(&self, path: &str, case_insensitive: bool) -> Option<Params> {
        let path_segments: Vec<&str> = path::segments(path).collect();
        if path_segments.len() != self.segments.len() {
            return None;
        }

        self.segments
            .iter()
            .zip(path_segments.into_iter().map(decode_segment))
            .try_fold(Params::new(), |mut params, (segment, value)| match segment {
                Segment::Static(text) => {
                    let same = if case_insensitive {
                        text.eq_ignore_ascii_case(&value)
                    } else {
                        *text == value
                    };
                    same.then_some(params)
                }
                Segment::Param(name) => {
                    params.insert(name.clone(), value);
                    Some(params)
                }
            })
    }

    /// Builds a concrete path by substituting parameters
    ///
    /// Returns `None` when a parameter is missing or empty. Values are
    /// percent-encoded.
    ///
    /// ```
    /// use exchange_router::PathPattern;
    /// use std::collections::HashMap;
    ///
    /// let pattern = PathPattern::parse("/order/:id").unwrap();
    /// let params = HashMap::from([("id".to_string(), "A 1".to_string())]);
    /// assert_eq!(pattern.generate(&params).as_deref(), Some("/order/A%201"));
    /// assert_eq!(pattern.generate(&HashMap::new()), None);
    /// ```
    pub fn generate(&self, params: &Params) -> Option<String> {
        if self.segments.is_empty() {
            return Some("/".to_string());
        }

        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Static(text) => Some(format!("/{}", text)),
                Segment::Param(name) => params
                    .get(name)
                    .filter(|v| !v.is_empty())
                    .map(|v| format!("/{}", urlencoding::encode(v))),
            })
            .collect()
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn decode_segment(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|v| v.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

fn validate_param_name(pattern: &str, name: &str) -> Result<(), PatternError> {
    if name.is_empty() {
        return Err(PatternError::EmptyParamName(pattern.to_string()));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(PatternError::InvalidParamName {
            pattern: pattern.to_string(),
            name: name.to_string(),
        });
    }
    Ok(())
}
