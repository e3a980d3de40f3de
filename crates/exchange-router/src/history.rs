//! History strategies: the navigation stack a [`Navigator`](crate::Navigator) drives

use crate::location::Location;
use crate::path::{join_base, normalize_path};

/// One entry of the navigation stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryState {
    /// Unique, increasing key assigned when the entry was created
    pub key: u64,
    pub location: Location,
}

/// Navigation stack with a cursor
///
/// Locations handed to and returned from a history are base-relative;
/// [`History::href`] renders the full URL including the base.
pub trait History {
    /// Entry under the cursor
    fn current(&self) -> &HistoryState;

    /// Adds an entry after the cursor, discarding forward entries
    fn push(&mut self, location: Location);

    /// Overwrites the entry under the cursor
    fn replace(&mut self, location: Location);

    /// Moves the cursor by `delta`; out-of-range moves are ignored and return `false`
    fn go(&mut self, delta: isize) -> bool;

    /// Number of entries on the stack
    fn len(&self) -> usize;

    /// Base path all locations live under (`/` when none)
    fn base(&self) -> &str;

    fn location(&self) -> &Location {
        &self.current().location
    }

    fn back(&mut self) -> bool {
        self.go(-1)
    }

    fn forward(&mut self) -> bool {
        self.go(1)
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Full URL for a base-relative location
    fn href(&self, location: &Location) -> String {
        let mut full = location.clone();
        full.path = join_base(self.base(), &location.path);
        full.to_string()
    }
}

/// In-process history, the default strategy for servers, tests and the CLI
///
/// # Examples
///
/// ```
/// use exchange_router::{History, Location, MemoryHistory};
///
/// let mut history = MemoryHistory::new();
/// history.push(Location::parse("/exchange"));
/// history.push(Location::parse("/kyc"));
///
/// assert!(history.back());
/// assert_eq!(history.location().path, "/exchange");
/// assert!(history.forward());
/// assert!(!history.forward());
/// ```
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    base: String,
    entries: Vec<HistoryState>,
    cursor: usize,
    next_key: u64,
}

impl MemoryHistory {
    /// Starts at `/` with no base path
    pub fn new() -> Self {
        Self::with_base("/")
    }

    /// Starts at `/` under `base`
    ///
    /// ```
    /// use exchange_router::{History, Location, MemoryHistory};
    ///
    /// let history = MemoryHistory::with_base("/app/");
    /// assert_eq!(history.base(), "/app");
    /// assert_eq!(history.href(&Location::parse("/kyc?x=1")), "/app/kyc?x=1");
    /// ```
    pub fn with_base(base: &str) -> Self {
        Self::starting_at(base, Location::parse("/"))
    }

    /// Starts at an arbitrary location under `base`
    pub fn starting_at(base: &str, location: Location) -> Self {
        Self {
            base: normalize_path(base).into_owned(),
            entries: vec![HistoryState { key: 0, location }],
            cursor: 0,
            next_key: 1,
        }
    }

    /// Entries from oldest to newest
    pub fn entries(&self) -> &[HistoryState] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn state(&mut self, location: Location) -> HistoryState {
        let key = self.next_key;
        self.next_key += 1;
        HistoryState { key, location }
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl History for MemoryHistory {
    fn current(&self) -> &HistoryState {
        &self.entries[self.cursor]
    }

    fn push(&mut self, location: Location) {
        let state = self.state(location);
        self.entries.truncate(self.cursor + 1);
        self.entries.push(state);
        self.cursor = self.entries.len() - 1;
    }

    fn replace(&mut self, location: Location) {
        let state = self.state(location);
        self.entries[self.cursor] = state;
    }

    fn go(&mut self, delta: isize) -> bool {
        match self.cursor.checked_add_signed(delta) {
            Some(target) if target < self.entries.len() => {
                self.cursor = target;
                delta != 0
            }
            _ => false,
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn base(&self) -> &str {
        &self.base
    }
}
