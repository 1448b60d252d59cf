use crate::directory::Directory;
use crate::node::Node;

enum Step<'a> {
    // Push the edge character (if any), emit the node's name if terminal,
    // then descend into its children.
    Enter(Option<char>, &'a Node),
    // Pop the character pushed by the matching Enter.
    PopChar,
}

pub(crate) struct Walk<'a> {
    name: String,
    stack: Vec<Step<'a>>,
}

impl<'a> Walk<'a> {
    pub(crate) fn new(prefix: &str, start: Option<&'a Node>) -> Self {
        Self {
            name: prefix.to_owned(),
            stack: start.map(|n| Step::Enter(None, n)).into_iter().collect(),
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            match self.stack.pop()? {
                Step::Enter(edge, node) => {
                    if let Some(c) = edge {
                        self.name.push(c);
                        self.stack.push(Step::PopChar);
                    }
                    // PopChar sits below the children, so it fires once the
                    // whole subtree has been walked.
                    for (&c, child) in &node.children {
                        self.stack.push(Step::Enter(Some(c), child));
                    }
                    if node.terminal {
                        return Some(self.name.clone());
                    }
                }
                Step::PopChar => {
                    self.name.pop();
                }
            }
        }
    }
}

impl Directory {
    /// Every registered name starting with `prefix`, each exactly once, in
    /// no particular order.  An unreachable prefix yields nothing; an empty
    /// prefix yields every name.
    pub fn complete<'a>(&'a self, prefix: &str) -> impl Iterator<Item = String> + 'a {
        Walk::new(prefix, self.root.walk(prefix))
    }

    /// Every (name, number) entry, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        Walk::new("", Some(&self.root)).map(move |name| {
            let number = self
                .numbers
                .get(&name)
                .expect("terminal node with no numbers entry");
            (name, number.as_str())
        })
    }
}
