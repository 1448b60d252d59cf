use std::io;

use hashbrown::HashMap;

use crate::node::Node;

/// A phone directory backed by a trie over the characters of each name.
///
/// Presence means three things at once: the name's path exists in the trie,
/// its final node is terminal, and `numbers` has an entry for it.  Insert
/// and remove update the terminal flag and the table together, so the two
/// diverging is an internal defect and treated as fatal.
pub struct Directory {
    pub(crate) root: Node,
    pub(crate) numbers: HashMap<String, String>,
}

impl Directory {
    pub fn new() -> Self {
        Self {
            root: Node::new(),
            numbers: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Registers `name` with `number`, creating a node per previously unseen
    /// character position.  Re-inserting overwrites and returns the old
    /// number.  The empty name is a name like any other: it lands on the
    /// root.
    pub fn insert(&mut self, name: &str, number: impl Into<String>) -> Option<String> {
        let mut cur = &mut self.root;
        for c in name.chars() {
            cur = cur.children.entry(c).or_insert_with(Node::new);
        }
        cur.terminal = true;
        self.numbers.insert(name.to_owned(), number.into())
    }

    /// Exact lookup.  Absence is an ordinary `None`, whether the walk falls
    /// off the trie or ends on a non-terminal node.
    pub fn get(&self, name: &str) -> Option<&str> {
        let node = self.root.walk(name)?;
        if !node.terminal {
            return None;
        }
        let number = self
            .numbers
            .get(name)
            .expect("terminal node with no numbers entry");
        Some(number.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn debug(&self, out: &mut impl io::Write) -> io::Result<()> {
        if self.root.terminal {
            writeln!(out, "\"\" *")?;
        }
        self.root.debug(0, out)
    }
}
