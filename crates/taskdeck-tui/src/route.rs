use std::fmt;

use serde::{Deserialize, Serialize};

/// The three views and their paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// `/`
    List,
    /// `/create`
    Create,
    /// `/edit/{id}`
    Edit { id: String },
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::List => "/".into(),
            Route::Create => "/create".into(),
            Route::Edit { id } => format!("/edit/{id}"),
        }
    }

    pub fn parse(path: &str) -> Option<Self> {
        match path {
            "" | "/" => Some(Route::List),
            "/create" => Some(Route::Create),
            _ => {
                let id = path.strip_prefix("/edit/")?;
                if id.is_empty() || id.contains('/') {
                    None
                } else {
                    Some(Route::Edit { id: id.to_string() })
                }
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        assert_eq!(Route::List.path(), "/");
        assert_eq!(Route::Create.path(), "/create");
        assert_eq!(Route::Edit { id: "abc".into() }.path(), "/edit/abc");
    }

    #[test]
    fn parse_known_paths() {
        assert_eq!(Route::parse("/"), Some(Route::List));
        assert_eq!(Route::parse(""), Some(Route::List));
        assert_eq!(Route::parse("/create"), Some(Route::Create));
        assert_eq!(
            Route::parse("/edit/42"),
            Some(Route::Edit { id: "42".into() })
        );
    }

    #[test]
    fn parse_rejects_unknown_paths() {
        assert_eq!(Route::parse("/edit/"), None);
        assert_eq!(Route::parse("/edit/a/b"), None);
        assert_eq!(Route::parse("/settings"), None);
    }
}
