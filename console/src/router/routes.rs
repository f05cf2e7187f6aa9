//! # Route Table
//!
//! Static routes of the console and the matcher that turns a navigation target
//! into a [`Location`].
//!
//! Patterns are matched segment by segment in declaration order; `:name`
//! captures one segment. A final catch-all record redirects everything else to
//! the `404` page.

use std::collections::BTreeMap;

use super::location::{with_query, Location, Target};

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const FORBIDDEN_PATH: &str = "/403";
pub const NOT_FOUND_PATH: &str = "/404";

/// Login page target that returns to `full_path` after signing in.
pub fn login_redirect(full_path: &str) -> String {
    with_query(LOGIN_PATH, &[("redirect", full_path)])
}

/// Page frame a route renders in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// Navigation menu, header and content.
    #[default]
    Default,
    /// Content only (login, initialisation).
    Empty,
    /// Centered message (error pages).
    Simple,
}

/// Per-route flags read by the navigation guard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Reachable without a session.
    pub anonymous: bool,
    pub title: Option<String>,
    pub layout: Layout,
}

#[derive(Debug, Clone)]
enum Pattern {
    Segments(Vec<Segment>),
    CatchAll,
}

#[derive(Debug, Clone)]
enum Segment {
    Static(String),
    Param(String),
}

impl Pattern {
    fn parse(pattern: &str) -> Self {
        if pattern == "*" {
            return Pattern::CatchAll;
        }
        let segments = split(pattern)
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Static(s.to_string()),
            })
            .collect();
        Pattern::Segments(segments)
    }

    fn matches(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let segments = match self {
            Pattern::CatchAll => return Some(BTreeMap::new()),
            Pattern::Segments(segments) => segments,
        };

        let parts: Vec<&str> = split(path).collect();
        if parts.len() != segments.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (segment, part) in segments.iter().zip(parts) {
            match segment {
                Segment::Static(s) if s == part => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), part.to_string());
                }
            }
        }
        Some(params)
    }
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// One entry of the route table.
#[derive(Debug, Clone)]
pub struct RouteRecord {
    name: Option<String>,
    pattern: Pattern,
    meta: RouteMeta,
    redirect: Option<String>,
}

impl RouteRecord {
    /// Protected route rendered in the default layout.
    pub fn page(path: &str, title: &str) -> Self {
        Self {
            name: None,
            pattern: Pattern::parse(path),
            meta: RouteMeta {
                anonymous: false,
                title: Some(title.to_string()),
                layout: Layout::Default,
            },
            redirect: None,
        }
    }

    /// Route reachable without a session.
    pub fn public(path: &str, title: &str, layout: Layout) -> Self {
        let mut record = Self::page(path, title);
        record.meta.anonymous = true;
        record.meta.layout = layout;
        record
    }

    /// Matches every path and redirects to `target`.
    pub fn catch_all(target: &str) -> Self {
        Self {
            name: Some("not-found".to_string()),
            pattern: Pattern::CatchAll,
            meta: RouteMeta::default(),
            redirect: Some(target.to_string()),
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}

/// Ordered route table.
#[derive(Debug, Clone)]
pub struct RouteTable {
    records: Vec<RouteRecord>,
}

impl RouteTable {
    pub fn new(records: Vec<RouteRecord>) -> Self {
        Self { records }
    }

    /// Routes of the Skynet console.
    pub fn skynet() -> Self {
        use RouteRecord as R;

        Self::new(vec![
            R::page("/", "Home"),
            R::public("/login", "Sign in", Layout::Empty).named("login"),
            R::public("/init", "Initialize", Layout::Empty).named("init"),
            R::page("/profile", "Profile"),
            R::page("/config/notice", "Notice settings"),
            R::page("/config/advance", "Advanced settings"),
            R::page("/tasks", "Tasks"),
            R::page("/tasks/new", "New task"),
            R::page("/tasks/:name", "Task details"),
            R::page("/tasks/:name/edit", "Edit task"),
            R::page("/jobs", "Jobs"),
            R::page("/jobs/:id", "Job details"),
            R::page("/account/users", "Users"),
            R::page("/account/users/new", "New user"),
            R::page("/account/users/:id", "User details"),
            R::page("/account/users/:id/edit", "Edit user"),
            R::page("/account/roles", "Roles").named("role.list"),
            R::page("/account/roles/new", "New role").named("role.new"),
            R::page("/account/roles/:id", "Role details").named("role.view"),
            R::page("/account/roles/:id/edit", "Edit role").named("role.edit"),
            R::public("/403", "Forbidden", Layout::Simple).named("403"),
            R::public("/404", "Page not found", Layout::Simple).named("404"),
            R::public("/500", "Server error", Layout::Simple).named("500"),
            R::catch_all(NOT_FOUND_PATH),
        ])
    }

    /// Resolve `target` to a location, following a redirect record once.
    ///
    /// Returns `None` only when no record matches (a table without catch-all).
    pub fn resolve(&self, target: &str) -> Option<Location> {
        let target = Target::parse(target);
        let (record, params) = self.find(&target.path)?;

        if let Some(redirect) = &record.redirect {
            let redirected = Target::parse(redirect);
            let (record, params) = self.find(&redirected.path)?;
            return Some(location(redirected, record, params));
        }

        Some(location(target, record, params))
    }

    fn find(&self, path: &str) -> Option<(&RouteRecord, BTreeMap<String, String>)> {
        self.records
            .iter()
            .find_map(|record| record.pattern.matches(path).map(|params| (record, params)))
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::skynet()
    }
}

fn location(target: Target, record: &RouteRecord, params: BTreeMap<String, String>) -> Location {
    Location {
        full_path: target.full_path(),
        path: target.path,
        query: target.query,
        hash: target.hash,
        name: record.name.clone(),
        params,
        meta: record.meta.clone(),
    }
}
