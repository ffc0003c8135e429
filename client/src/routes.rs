//! Static route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The table is the single source of truth for which paths exist, which page
//! each one renders, and whether it requires a logged-in session. The router
//! forwards every location to `app::PageOutlet`, which resolves it here.
//!
//! Matching ignores a single trailing slash and ASCII case, so `/MainPage/`
//! resolves to the same record as `/mainPage`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Path of the root route; unauthenticated redirects land here.
pub const ROOT_PATH: &str = "/";

/// Page rendered by a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Front,
    Main,
    Registration,
    Upload,
    TimeCapsule,
    User,
}

impl Page {
    /// Human-readable page title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Front => "Intellicrop",
            Self::Main => "Dashboard",
            Self::Registration => "Register",
            Self::Upload => "Upload",
            Self::TimeCapsule => "Time Capsule",
            Self::User => "Account",
        }
    }
}

/// One entry of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteRecord {
    /// URL path with a leading slash.
    pub path: &'static str,
    /// Unique route name.
    pub name: &'static str,
    /// Page the route renders.
    pub page: Page,
    /// Navigation requires a logged-in session.
    pub requires_auth: bool,
}

impl RouteRecord {
    /// Public route; use [`RouteRecord::protected`] to require a session.
    #[must_use]
    pub const fn new(path: &'static str, name: &'static str, page: Page) -> Self {
        Self { path, name, page, requires_auth: false }
    }

    #[must_use]
    pub const fn protected(self) -> Self {
        Self { requires_auth: true, ..self }
    }

    /// Whether `path` addresses this record.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        normalize_path(self.path).eq_ignore_ascii_case(normalize_path(path))
    }
}

/// Routes the application ships with.
pub static BUILTIN_ROUTES: [RouteRecord; 6] = [
    RouteRecord::new("/", "frontPage", Page::Front),
    RouteRecord::new("/mainPage", "mainPage", Page::Main).protected(),
    RouteRecord::new("/regiPage", "regiPage", Page::Registration),
    RouteRecord::new("/uploadPage", "uploadPage", Page::Upload).protected(),
    RouteRecord::new("/timeCapsule", "timeCapsule", Page::TimeCapsule).protected(),
    RouteRecord::new("/userPage", "userPage", Page::User).protected(),
];

/// Reasons a record list is rejected by [`RouteTable::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("route {name:?} has an empty path")]
    EmptyPath { name: &'static str },
    #[error("route path {path:?} must start with '/'")]
    MissingLeadingSlash { path: &'static str },
    #[error("duplicate route path: {0}")]
    DuplicatePath(&'static str),
    #[error("duplicate route name: {0}")]
    DuplicateName(&'static str),
}

/// Read-only view over a validated list of route records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteTable<'a> {
    records: &'a [RouteRecord],
}

impl<'a> RouteTable<'a> {
    /// Validate `records` and wrap them in a table.
    ///
    /// # Errors
    ///
    /// Returns [`RouteTableError`] if a path is empty or lacks a leading
    /// slash, or if two records share a path or a name.
    pub fn new(records: &'a [RouteRecord]) -> Result<Self, RouteTableError> {
        for (i, record) in records.iter().enumerate() {
            if record.path.is_empty() {
                return Err(RouteTableError::EmptyPath { name: record.name });
            }
            if !record.path.starts_with('/') {
                return Err(RouteTableError::MissingLeadingSlash { path: record.path });
            }
            for earlier in &records[..i] {
                if earlier.matches(record.path) {
                    return Err(RouteTableError::DuplicatePath(record.path));
                }
                if earlier.name == record.name {
                    return Err(RouteTableError::DuplicateName(record.name));
                }
            }
        }
        Ok(Self { records })
    }

    /// Records in declaration order.
    #[must_use]
    pub fn records(&self) -> &'a [RouteRecord] {
        self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a RouteRecord> + use<'a> {
        self.records.iter()
    }

    /// Find the record addressed by `path`. Query and fragment must already
    /// be stripped.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&'a RouteRecord> {
        self.records.iter().find(|r| r.matches(path))
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&'a RouteRecord> {
        self.records.iter().find(|r| r.name == name)
    }
}

impl RouteTable<'static> {
    /// Table over [`BUILTIN_ROUTES`]. Validity is covered by unit tests.
    #[must_use]
    pub fn builtin() -> Self {
        Self { records: &BUILTIN_ROUTES }
    }
}

impl Default for RouteTable<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Drop one trailing slash; an empty path is the root.
fn normalize_path(path: &str) -> &str {
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    if trimmed.is_empty() { ROOT_PATH } else { trimmed }
}
