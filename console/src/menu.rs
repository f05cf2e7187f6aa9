//! # Navigation Menu
//!
//! The static menu tree and the two lookups that keep it in sync with the
//! current route:
//!
//! - [`Menu::resolve_active`]: the entry to highlight. The menu only registers
//!   index paths, so the lookup walks up the path (`/tasks/x/edit` →
//!   `/tasks/x` → `/tasks`) until an entry's path matches exactly.
//! - [`Menu::resolve_trail`]: the groups to expand. Depth-first, prefix match,
//!   first hit wins.

/// Entry of the menu tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    pub key: String,
    pub label: String,
    pub kind: MenuKind,
}

/// A node either links to a path or groups other nodes, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuKind {
    Link(String),
    Group(Vec<MenuNode>),
}

impl MenuNode {
    pub fn link(key: &str, label: &str, path: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind: MenuKind::Link(path.to_string()),
        }
    }

    pub fn group(key: &str, label: &str, children: Vec<MenuNode>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind: MenuKind::Group(children),
        }
    }

    pub fn path(&self) -> Option<&str> {
        match &self.kind {
            MenuKind::Link(path) => Some(path),
            MenuKind::Group(_) => None,
        }
    }

    pub fn children(&self) -> &[MenuNode] {
        match &self.kind {
            MenuKind::Link(_) => &[],
            MenuKind::Group(children) => children,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Menu {
    nodes: Vec<MenuNode>,
}

impl Menu {
    pub fn new(nodes: Vec<MenuNode>) -> Self {
        Self { nodes }
    }

    /// Menu of the Skynet console.
    pub fn skynet() -> Self {
        use MenuNode as N;

        Self::new(vec![
            N::link("home", "Home", "/"),
            N::link("tasks", "Tasks", "/tasks"),
            N::link("jobs", "Jobs", "/jobs"),
            N::group(
                "account",
                "Accounts",
                vec![
                    N::link("users", "Users", "/account/users"),
                    N::link("roles", "Roles", "/account/roles"),
                ],
            ),
            N::group(
                "config",
                "Settings",
                vec![
                    N::link("notice", "Notifications", "/config/notice"),
                    N::link("advance", "Advanced", "/config/advance"),
                ],
            ),
        ])
    }

    pub fn nodes(&self) -> &[MenuNode] {
        &self.nodes
    }

    /// Entry to highlight for `path`.
    pub fn resolve_active(&self, path: &str) -> Option<&MenuNode> {
        let mut candidate = path;
        loop {
            if let Some(node) = find_exact(&self.nodes, candidate) {
                return Some(node);
            }
            match candidate.rfind('/') {
                Some(index) if index > 0 => candidate = &candidate[..index],
                _ => return None,
            }
        }
    }

    /// Ancestor chain, outermost group first, ending at the matching link.
    /// Empty when nothing matches.
    pub fn resolve_trail(&self, path: &str) -> Vec<&MenuNode> {
        find_trail(&self.nodes, path).unwrap_or_default()
    }

    pub fn active_key(&self, path: &str) -> Option<&str> {
        self.resolve_active(path).map(|node| node.key.as_str())
    }

    pub fn trail_keys(&self, path: &str) -> Vec<&str> {
        self.resolve_trail(path)
            .into_iter()
            .map(|node| node.key.as_str())
            .collect()
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::skynet()
    }
}

fn find_exact<'a>(nodes: &'a [MenuNode], path: &str) -> Option<&'a MenuNode> {
    nodes.iter().find_map(|node| match &node.kind {
        MenuKind::Link(p) if p == path => Some(node),
        MenuKind::Link(_) => None,
        MenuKind::Group(children) => find_exact(children, path),
    })
}

// The root link is excluded: every path starts with "/".
fn find_trail<'a>(nodes: &'a [MenuNode], path: &str) -> Option<Vec<&'a MenuNode>> {
    nodes.iter().find_map(|node| match &node.kind {
        MenuKind::Link(p) if p != "/" && path.starts_with(p.as_str()) => Some(vec![node]),
        MenuKind::Link(_) => None,
        MenuKind::Group(children) => find_trail(children, path)
            .map(|rest| std::iter::once(node).chain(rest).collect()),
    })
}
