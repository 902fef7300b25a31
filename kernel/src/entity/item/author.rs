use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct ItemAuthor(String);

impl ItemAuthor {
    pub fn new(author: impl Into<String>) -> Self {
        Self(author.into())
    }
}
