use std::fmt::Write;

use chrono::NaiveDate;
use common::catalog::CATEGORIES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub path: String,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

impl SitemapEntry {
    fn new(path: &str, change_frequency: ChangeFrequency, priority: f32) -> Self {
        Self {
            path: path.to_string(),
            change_frequency,
            priority,
        }
    }
}

/// Content pages followed by one entry per gallery category.
pub fn entries() -> Vec<SitemapEntry> {
    let mut entries = vec![
        SitemapEntry::new("/", ChangeFrequency::Weekly, 1.0),
        SitemapEntry::new("/about", ChangeFrequency::Monthly, 0.8),
        SitemapEntry::new("/equipment", ChangeFrequency::Monthly, 0.8),
        SitemapEntry::new("/travel", ChangeFrequency::Monthly, 0.6),
    ];
    entries.extend(CATEGORIES.iter().map(|c| {
        SitemapEntry::new(&format!("/{}", c.slug.slug()), ChangeFrequency::Weekly, 0.9)
    }));
    entries
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn absolute_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if path == "/" {
        base.to_string()
    } else {
        format!("{base}{path}")
    }
}

/// Render a `urlset` document for `base_url`.
pub fn render(base_url: &str, last_modified: NaiveDate) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries() {
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    \
             <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            escape_xml(&absolute_url(base_url, &entry.path)),
            last_modified.format("%Y-%m-%d"),
            entry.change_frequency.as_str(),
            entry.priority,
        );
    }
    xml.push_str("</urlset>\n");
    xml
}

pub fn robots(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /admin\nDisallow: /login\n\nSitemap: {}/sitemap.xml\n",
        base_url.trim_end_matches('/')
    )
}
