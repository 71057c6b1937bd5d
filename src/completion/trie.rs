//! Character prefix tree with set semantics.

use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Node {
    children: BTreeMap<char, Node>,
    terminal: bool,
}

impl Node {
    fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A set of strings indexed by prefix.
///
/// Children are ordered by `char`, so enumeration is lexicographic by code
/// point and a value always precedes its extensions.
///
/// # Examples
///
/// ```
/// use contactbook::Trie;
///
/// let trie = Trie::from_values(["Alice", "Alex", "Bob"]);
/// assert_eq!(trie.predict("Al"), vec!["Alex", "Alice"]);
/// assert!(trie.predict("Z").is_empty());
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Trie {
    root: Node,
    len: usize,
}

impl Trie {
    /// Creates an empty trie.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a trie from values; duplicates collapse.
    #[must_use]
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for value in values {
            trie.insert(value.as_ref());
        }
        trie
    }

    /// Number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a value. Returns false if it was already present.
    pub fn insert(&mut self, value: &str) -> bool {
        let mut node = &mut self.root;
        for ch in value.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.len += 1;
        true
    }

    /// Returns true if the exact value is stored.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.find(value).is_some_and(|node| node.terminal)
    }

    /// Removes a value, pruning branches left without terminals.
    /// Returns false if the value was not stored.
    pub fn remove(&mut self, value: &str) -> bool {
        let chars: Vec<char> = value.chars().collect();
        let removed = Self::remove_at(&mut self.root, &chars);
        if removed {
            self.len -= 1;
        }
        removed
    }

    fn remove_at(node: &mut Node, rest: &[char]) -> bool {
        let Some((first, tail)) = rest.split_first() else {
            let was_terminal = node.terminal;
            node.terminal = false;
            return was_terminal;
        };
        let Some(child) = node.children.get_mut(first) else {
            return false;
        };
        let removed = Self::remove_at(child, tail);
        if removed && !child.terminal && child.is_leaf() {
            node.children.remove(first);
        }
        removed
    }

    /// Every stored value starting with `prefix`, in lexicographic order.
    ///
    /// The match is literal and case-sensitive. An empty prefix returns all
    /// values.
    #[must_use]
    pub fn predict(&self, prefix: &str) -> Vec<String> {
        let Some(start) = self.find(prefix) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        let mut buf = prefix.to_string();
        Self::collect(start, &mut buf, &mut out);
        out
    }

    fn find(&self, prefix: &str) -> Option<&Node> {
        let mut node = &self.root;
        for ch in prefix.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    fn collect(node: &Node, buf: &mut String, out: &mut Vec<String>) {
        if node.terminal {
            out.push(buf.clone());
        }
        for (ch, child) in &node.children {
            buf.push(*ch);
            Self::collect(child, buf, out);
            buf.pop();
        }
    }
}
