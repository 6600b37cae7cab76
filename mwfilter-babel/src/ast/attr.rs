//! Identifier/class/key-value triples attached to many nodes

/// `(identifier, [classes], [(key, value)])`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attr {
    pub identifier: String,
    pub classes: Vec<String>,
    pub pairs: Vec<(String, String)>,
}

impl Attr {
    pub fn new(identifier: impl Into<String>) -> Self {
        Attr {
            identifier: identifier.into(),
            ..Attr::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_pair(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// True when identifier, classes and pairs are all empty.
    pub fn is_empty(&self) -> bool {
        self.identifier.is_empty() && self.classes.is_empty() && self.pairs.is_empty()
    }

    /// Flattens the triple into HTML attribute pairs in `id`, `class`, pairs order.
    pub fn html_attributes(&self) -> Vec<(String, String)> {
        let mut attrs = Vec::with_capacity(self.pairs.len() + 2);
        if !self.identifier.is_empty() {
            attrs.push(("id".to_string(), self.identifier.clone()));
        }
        if !self.classes.is_empty() {
            attrs.push(("class".to_string(), self.classes.join(" ")));
        }
        attrs.extend(self.pairs.iter().cloned());
        attrs
    }
}
