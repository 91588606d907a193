use core::fmt::{self, Display};

use crate::prelude_internal::*;

/// Identifier the root of a datum is rendered as unless a caller overrides it.
pub const ROOT_IDENTIFIER: &str = ".";

/// Separator placed between field and key segments.
pub const PATH_SEPARATOR: char = '.';

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Plural)]
pub struct DatumPath(pub Vec<PathSegment>);

impl DatumPath {
    /// Create an empty path representing the datum root
    pub fn root() -> Self {
        DatumPath(Vec::new())
    }

    /// Check if this is the root path
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Render the path with a custom root identifier.
    ///
    /// Runs of adjacent separators collapse into one, so a root of `.`
    /// followed by field `x` renders as `.x` and key `a..b` as `.a.b`.
    pub fn render(&self, root: &str) -> String {
        let mut out = String::from(root);
        for segment in &self.0 {
            match segment {
                PathSegment::Field(name) => push_named(&mut out, name),
                PathSegment::Key(key) => push_named(&mut out, &key.to_string()),
                PathSegment::Index(index) => out.push_str(&format!("[{index}]")),
            }
        }
        out
    }
}

fn push_named(out: &mut String, name: &str) {
    if !out.ends_with(PATH_SEPARATOR) {
        out.push(PATH_SEPARATOR);
    }
    for c in name.chars() {
        if c == PATH_SEPARATOR && out.ends_with(PATH_SEPARATOR) {
            continue;
        }
        out.push(c);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Declared record field
    Field(String),
    /// Map entry key
    Key(ObjectKey),
    /// Array element index
    Index(usize),
}

impl Display for DatumPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(ROOT_IDENTIFIER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str) -> PathSegment {
        PathSegment::Field(name.to_string())
    }

    #[test]
    fn test_display_root() {
        assert_eq!(DatumPath::root().to_string(), ".");
        assert!(DatumPath::root().is_root());
    }

    #[test]
    fn test_display_single_field() {
        let path = DatumPath(vec![field("name")]);
        assert_eq!(path.to_string(), ".name");
    }

    #[test]
    fn test_display_nested_fields() {
        let path = DatumPath(vec![field("a"), field("b"), field("c")]);
        assert_eq!(path.to_string(), ".a.b.c");
    }

    #[test]
    fn test_display_array_index() {
        let path = DatumPath(vec![field("tags"), PathSegment::Index(2)]);
        assert_eq!(path.to_string(), ".tags[2]");
    }

    #[test]
    fn test_display_index_at_root() {
        let path = DatumPath(vec![PathSegment::Index(0), field("x")]);
        assert_eq!(path.to_string(), ".[0].x");
    }

    #[test]
    fn test_display_keys() {
        let path = DatumPath(vec![
            PathSegment::Key(ObjectKey::from("hello world")),
            PathSegment::Key(ObjectKey::from(42)),
        ]);
        assert_eq!(path.to_string(), ".hello world.42");
    }

    #[test]
    fn test_render_custom_root() {
        let path = DatumPath(vec![field("items"), PathSegment::Index(0), field("id")]);
        assert_eq!(path.render("datum"), "datum.items[0].id");
        assert_eq!(path.render(""), ".items[0].id");
        assert_eq!(DatumPath::root().render("datum"), "datum");
    }

    #[test]
    fn test_render_collapses_separators() {
        let path = DatumPath(vec![field(".hidden")]);
        assert_eq!(path.to_string(), ".hidden");
        assert_eq!(DatumPath(vec![field("x")]).render("root."), "root.x");

        let path = DatumPath(vec![
            PathSegment::Key(ObjectKey::from("..x")),
            PathSegment::Key(ObjectKey::from("a..b")),
        ]);
        assert_eq!(path.to_string(), ".x.a.b");
        assert_eq!(path.render("datum"), "datum.x.a.b");

        let path = DatumPath(vec![field("x."), field("y"), PathSegment::Index(0)]);
        assert_eq!(path.to_string(), ".x.y[0]");
    }
}
