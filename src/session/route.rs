use std::fmt;

use crate::schema::Category;

/// A navigable location of the portal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    News(String),
    Category(Category),
    Search(String),
    SignUp,
    Profile,
    Admin,
    NotFound,
}

impl Route {
    /// Parse a path such as `/news/abc` or `/category/health`.
    ///
    /// Query strings and fragments are ignored, as are trailing slashes.
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["news", id] => Route::News((*id).to_string()),
            ["category", name] => name
                .parse::<Category>()
                .map(Route::Category)
                .unwrap_or(Route::NotFound),
            ["search", text] => Route::Search((*text).to_string()),
            ["sign-up"] => Route::SignUp,
            ["user"] => Route::Profile,
            ["admin"] => Route::Admin,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::News(id) => format!("/news/{}", id),
            Route::Category(category) => format!("/category/{}", category.as_str()),
            Route::Search(text) => format!("/search/{}", text),
            Route::SignUp => "/sign-up".to_string(),
            Route::Profile => "/user".to_string(),
            Route::Admin => "/admin".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
