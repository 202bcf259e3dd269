//! Shape contracts for the site configuration.
//! Field names serialise to the SCREAMING_SNAKE_CASE names templates expect.

use std::{fmt, iter::Take, str::FromStr};

use color_eyre::eyre::eyre;
use serde::Serialize;

use crate::config::{BLOG, HOME, PROJECTS};

/// Site-wide metadata and homepage listing counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Site {
    pub title: &'static str,
    pub description: &'static str,
    pub email: &'static str,
    pub num_posts_on_homepage: usize,
    pub num_projects_on_homepage: usize,
}

impl Site {
    /// The first `num_posts_on_homepage` posts, in order.
    pub fn homepage_posts<I: IntoIterator>(&self, posts: I) -> Take<I::IntoIter> {
        posts.into_iter().take(self.num_posts_on_homepage)
    }

    /// The first `num_projects_on_homepage` projects, in order.
    pub fn homepage_projects<I: IntoIterator>(&self, projects: I) -> Take<I::IntoIter> {
        projects.into_iter().take(self.num_projects_on_homepage)
    }
}

/// Title and description used for a page's header and meta tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Metadata {
    pub title: &'static str,
    pub description: &'static str,
}

/// A named external profile link with its icon asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Social {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

/// Social links in display order.
pub type Socials = &'static [Social];

/// The logical pages that carry their own [`Metadata`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Blog,
    Projects,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Blog, Page::Projects];

    pub fn metadata(self) -> Metadata {
        match self {
            Page::Home => HOME,
            Page::Blog => BLOG,
            Page::Projects => PROJECTS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Blog => "blog",
            Page::Projects => "projects",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = color_eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Page::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| eyre!("Unknown page {wanted:?}, expected one of: home, blog, projects"))
    }
}
