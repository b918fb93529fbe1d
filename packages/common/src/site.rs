//! Static site information and navigation.

use serde::Serialize;

use crate::catalog::CATEGORIES;

#[derive(Debug, Clone, Serialize)]
pub struct Owner {
    pub name: &'static str,
    pub email: &'static str,
    pub bio: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub url: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteInfo {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub owner: Owner,
    pub achievements: &'static [Achievement],
    pub taglines: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct SeoDefaults {
    pub site_name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub author: &'static str,
    pub og_image: &'static str,
}

pub static SITE_INFO: SiteInfo = SiteInfo {
    title: "Silver Spring Observatory",
    subtitle: "CCD Astro-Imaging",
    description: "Astronomy portfolio featuring deep sky images captured from Silver Spring \
        Observatory and remote observatories. Galaxies, nebulae, star clusters, and more.",
    owner: Owner {
        name: "Ken Levin",
        email: "Klevin@aol.com",
        bio: "Ken Levin is a physicist who works in the field of infrared optics and sensors for \
            application in medicine, aerospace and astronomy. He is an avid amateur astronomer \
            and operates two private observatories.",
    },
    achievements: &[
        Achievement {
            title: "Asteroid (99862) Kenlevin",
            description: "Asteroid named for Ken Levin. Citation: (99862) \"Kenlevin\" = 2002 OD2",
            url: None,
        },
        Achievement {
            title: "Washington Post Article",
            description: "Featured in the Washington Post for amateur astronomy work.",
            url: Some("/publications/washington-post"),
        },
    ],
    taglines: &[
        "All images taken from Silver Spring, Maryland or from Cloudcroft, New Mexico",
        "Now located at Concordia University, Irvine, CA",
        "Remote imaging at Sierra Remote Observatories",
    ],
};

pub static SEO_DEFAULTS: SeoDefaults = SeoDefaults {
    site_name: "Silver Spring Observatory",
    title: "Silver Spring Observatory | CCD Astro-Imaging",
    description: "Deep sky astrophotography by Ken Levin. Galaxies, nebulae, star clusters, \
        supernovae and more captured from personal and remote observatories using CCD imaging.",
    keywords: &[
        "astrophotography",
        "astronomy",
        "CCD imaging",
        "galaxies",
        "nebulae",
        "deep sky",
        "star clusters",
        "supernovae",
        "amateur astronomy",
    ],
    author: "Ken Levin",
    og_image: "/images/hero/ken-telescope-desktop.jpg",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

impl NavItem {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Static content routes that are not galleries.
pub const CONTENT_ROUTES: [(&str, &str); 3] = [
    ("Equipment", "/equipment"),
    ("About", "/about"),
    ("Travel", "/travel"),
];

/// Home followed by one entry per gallery category.
pub fn main_navigation() -> Vec<NavItem> {
    std::iter::once(NavItem::new("Home", "/"))
        .chain(
            CATEGORIES
                .iter()
                .map(|c| NavItem::new(c.title, &format!("/{}", c.slug))),
        )
        .collect()
}

pub fn secondary_navigation() -> Vec<NavItem> {
    CONTENT_ROUTES
        .iter()
        .map(|(label, href)| NavItem::new(label, href))
        .collect()
}
