//! Resolved navigation targets.

use std::collections::BTreeMap;

use super::routes::RouteMeta;

/// A location the router can navigate to, after route matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Path only, e.g. `/tasks/nightly`.
    pub path: String,
    /// Path with query and hash, e.g. `/tasks/nightly?tab=jobs#history`.
    pub full_path: String,
    /// Decoded query parameters in order of appearance.
    pub query: Vec<(String, String)>,
    /// Fragment including the leading `#`, or empty.
    pub hash: String,
    /// Name of the matched route, if it has one.
    pub name: Option<String>,
    /// `:param` captures of the matched route.
    pub params: BTreeMap<String, String>,
    /// Metadata of the matched route.
    pub meta: RouteMeta,
}

impl Location {
    /// First value of query parameter `key`.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// `true` unless the matched route is marked anonymous.
    pub fn requires_session(&self) -> bool {
        !self.meta.anonymous
    }
}

/// Parts of a raw navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Target {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub hash: String,
}

impl Target {
    /// Split `/path?query#hash`. A missing leading `/` is added.
    pub fn parse(raw: &str) -> Self {
        let (rest, hash) = match raw.find('#') {
            Some(i) => (&raw[..i], raw[i..].to_string()),
            None => (raw, String::new()),
        };
        let (path, query) = match rest.find('?') {
            Some(i) => (&rest[..i], parse_query(&rest[i + 1..])),
            None => (rest, Vec::new()),
        };

        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        Self { path, query, hash }
    }

    pub fn full_path(&self) -> String {
        let mut full = self.path.clone();
        if !self.query.is_empty() {
            full.push('?');
            full.push_str(&encode_query(&self.query));
        }
        full.push_str(&self.hash);
        full
    }
}

/// `path?k=v&...` with percent-encoded values.
pub fn with_query(path: &str, query: &[(&str, &str)]) -> String {
    if query.is_empty() {
        return path.to_string();
    }
    let pairs: Vec<(String, String)> = query
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    format!("{}?{}", path, encode_query(&pairs))
}

fn encode_query(query: &[(String, String)]) -> String {
    query
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn parse_query(raw: &str) -> Vec<(String, String)> {
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(k), decode(v))
        })
        .collect()
}

fn decode(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    urlencoding::decode(&raw)
        .map(|s| s.into_owned())
        .unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target() {
        let target = Target::parse("/tasks?name=nightly%20build&page=2#history");
        assert_eq!(target.path, "/tasks");
        assert_eq!(
            target.query,
            vec![
                ("name".to_string(), "nightly build".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
        assert_eq!(target.hash, "#history");
    }

    #[test]
    fn test_parse_target_without_leading_slash() {
        let target = Target::parse("jobs");
        assert_eq!(target.path, "/jobs");
        assert!(target.query.is_empty());
        assert_eq!(target.hash, "");
    }

    #[test]
    fn test_full_path_round_trips_redirect() {
        let target = Target::parse(&with_query("/login", &[("redirect", "/tasks/new?copy=a&b#top")]));
        assert_eq!(target.path, "/login");
        assert_eq!(
            target.query,
            vec![("redirect".to_string(), "/tasks/new?copy=a&b#top".to_string())]
        );
        assert_eq!(target.hash, "");
        assert_eq!(Target::parse(&target.full_path()), target);
    }

    #[test]
    fn test_with_query_without_pairs() {
        assert_eq!(with_query("/403", &[]), "/403");
    }
}
