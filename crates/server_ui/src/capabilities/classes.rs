use indexmap::IndexSet;

use crate::html::escape;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered set of CSS class tokens.
///
/// Tokens keep their first insertion position and never repeat, so emitted class attributes are
/// deterministic.
pub struct ClassSet {
    tokens: IndexSet<String>,
}

impl ClassSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every whitespace-separated token not already present.
    pub fn add(&mut self, tokens: &str) {
        for token in tokens.split_whitespace() {
            if !self.tokens.contains(token) {
                self.tokens.insert(token.to_string());
            }
        }
    }

    /// Adds every token of `other`, keeping this set's order first.
    pub fn extend(&mut self, other: &ClassSet) {
        for token in &other.tokens {
            if !self.tokens.contains(token.as_str()) {
                self.tokens.insert(token.clone());
            }
        }
    }

    /// Whether `token` is present.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Tokens joined by single spaces, or `None` when empty.
    pub fn joined(&self) -> Option<String> {
        if self.tokens.is_empty() {
            None
        } else {
            Some(self.iter().collect::<Vec<_>>().join(" "))
        }
    }

    /// Scratch set holding `base` followed by this set's tokens.
    ///
    /// Components derive render-time classes into the returned value instead of touching their
    /// persistent set.
    pub(crate) fn layered(&self, base: &str) -> ClassSet {
        let mut scratch = ClassSet::from(base);
        scratch.extend(self);
        scratch
    }

    /// ` class="..."`, or nothing for an empty set.
    pub(crate) fn attr(&self) -> String {
        match self.joined() {
            Some(joined) => format!(" class=\"{}\"", escape(&joined)),
            None => String::new(),
        }
    }
}

impl From<&str> for ClassSet {
    fn from(tokens: &str) -> Self {
        let mut set = Self::new();
        set.add(tokens);
        set
    }
}

macro_rules! spacing {
    ($($(#[$doc:meta])* $name:ident => $prefix:literal;)+) => {
        $(
            $(#[$doc])*
            fn $name(self, scale: u8) -> Self {
                self.add_classes(&format!(concat!($prefix, "-{}"), scale))
            }
        )+
    };
}

/// Class-list capability.
pub trait WithClasses: Sized {
    /// Persistent class set.
    fn class_set(&self) -> &ClassSet;

    /// Mutable persistent class set.
    fn class_set_mut(&mut self) -> &mut ClassSet;

    /// Adds whitespace-separated class tokens, ignoring duplicates.
    fn add_classes(mut self, tokens: &str) -> Self {
        self.class_set_mut().add(tokens);
        self
    }

    /// Current tokens joined by spaces, `None` when no class was added.
    fn classes(&self) -> Option<String> {
        self.class_set().joined()
    }

    spacing! {
        /// Margin on all sides.
        m => "m";
        /// Top margin.
        mt => "mt";
        /// Bottom margin.
        mb => "mb";
        /// Start margin.
        ms => "ms";
        /// End margin.
        me => "me";
        /// Horizontal margin.
        mx => "mx";
        /// Vertical margin.
        my => "my";
        /// Padding on all sides.
        p => "p";
        /// Top padding.
        pt => "pt";
        /// Bottom padding.
        pb => "pb";
        /// Start padding.
        ps => "ps";
        /// End padding.
        pe => "pe";
        /// Horizontal padding.
        px => "px";
        /// Vertical padding.
        py => "py";
    }
}
