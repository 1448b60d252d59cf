use std::io;

use hashbrown::HashMap;

pub(crate) struct Node {
    pub(crate) children: HashMap<char, Node>,
    pub(crate) terminal: bool,
}

impl Node {
    pub(crate) fn new() -> Self {
        Self {
            children: HashMap::new(),
            terminal: false,
        }
    }

    /// Follows `name` edge by edge, returning the node it ends on.  Read
    /// only: a missing edge is `None`, never a freshly created child.
    pub(crate) fn walk(&self, name: &str) -> Option<&Node> {
        let mut cur = self;
        for c in name.chars() {
            cur = cur.children.get(&c)?;
        }
        Some(cur)
    }

    pub(crate) fn debug(&self, depth: usize, out: &mut impl io::Write) -> io::Result<()> {
        for (c, child) in &self.children {
            let mark = if child.terminal { " *" } else { "" };
            writeln!(out, "{:width$}{:?}{}", "", c, mark, width = 2 * depth)?;
            child.debug(depth + 1, out)?;
        }
        Ok(())
    }
}
