// src/links.rs
//
// The fixed link table and its expansion for a resolved identifier.

/// A destination URL with a single `{}` slot for the identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkTemplate {
    pub label: &'static str,
    pub pattern: &'static str,
}

impl LinkTemplate {
    pub const fn new(label: &'static str, pattern: &'static str) -> Self {
        Self { label, pattern }
    }

    pub fn fill(&self, identifier: &str) -> String {
        self.pattern.replacen("{}", identifier, 1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedLink {
    pub label: String,
    pub url: String,
}

pub static TEMPLATES: &[LinkTemplate] = &[
    LinkTemplate::new("Photos Of", "https://www.facebook.com/{}/photos_of"),
    LinkTemplate::new("Videos Of", "https://www.facebook.com/{}/videos_of"),
    LinkTemplate::new("Stories Of", "https://www.facebook.com/stories/{}"),
    LinkTemplate::new("Groups", "https://www.facebook.com/{}/groups"),
    LinkTemplate::new("Events Joined", "https://www.facebook.com/{}/events"),
    LinkTemplate::new("Games", "https://www.facebook.com/{}/games"),
    LinkTemplate::new("Apps", "https://www.facebook.com/{}/apps"),
    LinkTemplate::new("Liked Photos", "https://www.facebook.com/{}/photos_liked"),
    LinkTemplate::new("Liked Videos", "https://www.facebook.com/{}/videos_liked"),
    LinkTemplate::new("Places Visited", "https://www.facebook.com/{}/places"),
];

/// One link per template, same order.
pub fn expand(identifier: &str, templates: &[LinkTemplate]) -> Vec<GeneratedLink> {
    templates
        .iter()
        .map(|t| GeneratedLink { label: s!(t.label), url: t.fill(identifier) })
        .collect()
}

/// Case-insensitive label lookup; surrounding whitespace ignored.
pub fn find_template(label: &str) -> Option<&'static LinkTemplate> {
    let wanted = label.trim();
    TEMPLATES.iter().find(|t| t.label.eq_ignore_ascii_case(wanted))
}
