use serde::Serialize;

use crate::types::{Metadata, Site, Social, Socials};

// Site-wide metadata and homepage listing counts.
pub const SITE: Site = Site {
    title: "FelipebDev",
    description: "Felipe borgaco dev blog.",
    email: "felipeborgaco@hotmail.com",
    num_posts_on_homepage: 5,
    num_projects_on_homepage: 3,
};

pub const HOME: Metadata = Metadata {
    title: "Home",
    description: "Felipe borgaco dev blog.",
};

pub const BLOG: Metadata = Metadata {
    title: "Blog",
    description: "A collection of articles on topics I am passionate about.",
};

pub const PROJECTS: Metadata = Metadata {
    title: "Projects",
    description: "A collection of my projects with links to repositories and live demos.",
};

// Display order. A static so every access sees the same slice.
pub static SOCIALS: Socials = &[
    Social {
        name: "GitHub",
        href: "https://github.com/felipebrgs1",
        icon: "/github.svg",
    },
    Social {
        name: "LinkedIn",
        href: "https://www.linkedin.com/in/felipeborgaco/",
        icon: "/linkedin.svg",
    },
];

/// Convenience container bundling every constant, e.g. for export to build tooling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SiteConfig {
    pub site: Site,
    pub home: Metadata,
    pub blog: Metadata,
    pub projects: Metadata,
    pub socials: Socials,
}

impl SiteConfig {
    /// First social entry whose name matches, ignoring ASCII case.
    pub fn social(&self, name: &str) -> Option<&'static Social> {
        self.socials
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
    }
}

pub fn site_config() -> SiteConfig {
    SiteConfig {
        site: SITE,
        home: HOME,
        blog: BLOG,
        projects: PROJECTS,
        socials: SOCIALS,
    }
}
