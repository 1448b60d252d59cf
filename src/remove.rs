// One invariant we maintain inductively: every node except the root is
// terminal or has at least one child.
//
// Removing a name just clears the terminal flag on its final node, which can
// leave that node childless and non-terminal.  Each frame of the recursion
// therefore unlinks a child that came back useless, which can in turn leave
// the parent useless, and so on up toward the root.  The walk stops at the
// first node that is still terminal or still branches, and the root itself
// is never unlinked: an empty directory is just a bare root.

use std::str::Chars;

use crate::directory::Directory;
use crate::node::Node;

impl Directory {
    /// Removes `name` and returns its number.  Removing an absent name is a
    /// no-op returning `None`, so repeated removes are harmless.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        if !self.root.remove(name.chars()) {
            return None;
        }
        let number = self
            .numbers
            .remove(name)
            .expect("removed name with no numbers entry");
        Some(number)
    }
}

impl Node {
    pub(crate) fn remove(&mut self, mut chars: Chars<'_>) -> bool {
        let c = match chars.next() {
            None => {
                let was_terminal = self.terminal;
                self.terminal = false;
                return was_terminal;
            }
            Some(c) => c,
        };
        let child = match self.children.get_mut(&c) {
            None => return false,
            Some(child) => child,
        };
        if !child.remove(chars) {
            return false;
        }
        if !child.terminal && child.children.is_empty() {
            self.children.remove(&c);
        }
        true
    }
}
