//! Server-side views for the category pages.
//!
//! A PJAX request gets the category *fragment*: just the item grid, swapped
//! into the page in place. Any other request gets the *full-page shell*
//! (`fullpageloader`), which carries the fragment's template name in
//! `pageToLoad` and embeds the fragment inside its container.
//!
//! Both are askama templates under `templates/`; interpolated catalog text
//! is HTML-escaped by askama.

use askama::Template;

use crate::catalog::{Category, Item};

/// View name of the full-page shell.
pub const SHELL_VIEW: &str = "fullpageloader";

/// Request header that marks a PJAX navigation.
pub const PJAX_HEADER: &str = "x-pjax";

#[derive(Template)]
#[template(path = "fragment.html")]
struct FragmentTemplate<'a> {
    category_prefix: &'a str,
    page_title: &'a str,
    items: &'a [Item],
}

#[derive(Template)]
#[template(path = "fullpageloader.html")]
struct ShellTemplate<'a> {
    category_prefix: &'a str,
    page_title: &'a str,
    items: &'a [Item],
    page_to_load: &'a str,
    nav: &'static [Category],
}

/// Everything a category view needs to render.
#[derive(Clone, Debug, PartialEq)]
pub struct PageModel {
    pub category: Category,
    pub view_name: &'static str,
    pub page_title: &'static str,
    pub items: Vec<Item>,
    /// Set only for the shell: the fragment it should load.
    pub page_to_load: Option<String>,
}

impl PageModel {
    /// Picks the fragment view for PJAX requests and the shell otherwise.
    pub fn select(category: Category, items: Vec<Item>, pjax: bool) -> Self {
        let (view_name, page_to_load) = if pjax {
            (category.fragment_view(), None)
        } else {
            (SHELL_VIEW, Some(category.fragment_template()))
        };

        Self {
            category,
            view_name,
            page_title: category.page_title(),
            items,
            page_to_load,
        }
    }

    pub fn render(&self) -> Result<String, askama::Error> {
        let category_prefix = self.category.key_prefix();
        match &self.page_to_load {
            Some(page_to_load) => ShellTemplate {
                category_prefix,
                page_title: self.page_title,
                items: &self.items,
                page_to_load,
                nav: &Category::ALL,
            }
            .render(),
            None => FragmentTemplate {
                category_prefix,
                page_title: self.page_title,
                items: &self.items,
            }
            .render(),
        }
    }
}
