//! Document head model and the scoped synchronizer that applies an
//! `SeoBundle` to it.
//!
//! A `HeadSynchronizer` borrows the head mutably for as long as one page is
//! mounted. Dropping it removes every element it created and restores every
//! element it overwrote, so nothing leaks into the next page whatever path
//! the page is left by.

use crate::html::{escape_html, escape_script_json};
use crate::seo::bundle::SeoBundle;

/// Attribute marking structured-data scripts owned by the synchronizer.
pub const JSON_LD_MARKER: &str = "data-seo";

/// One `<meta>`, `<link>` or `<script>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadElement {
    pub tag: &'static str,
    pub attrs: Vec<(String, String)>,
    pub text: Option<String>,
}

/// Stable identity of an upserted singleton element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKey {
    MetaName(String),
    MetaProperty(String),
    Link(String),
}

impl HeadElement {
    fn new(tag: &'static str, attrs: &[(&str, &str)]) -> Self {
        Self {
            tag,
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            text: None,
        }
    }

    pub fn meta_name(name: &str, content: &str) -> Self {
        Self::new("meta", &[("name", name), ("content", content)])
    }

    pub fn meta_property(property: &str, content: &str) -> Self {
        Self::new("meta", &[("property", property), ("content", content)])
    }

    pub fn link(rel: &str, href: &str) -> Self {
        Self::new("link", &[("rel", rel), ("href", href)])
    }

    pub fn alternate(hreflang: &str, href: &str) -> Self {
        Self::new(
            "link",
            &[("rel", "alternate"), ("hreflang", hreflang), ("href", href)],
        )
    }

    pub fn json_ld(json: &str) -> Self {
        let mut element = Self::new(
            "script",
            &[("type", "application/ld+json"), (JSON_LD_MARKER, "structured-data")],
        );
        element.text = Some(json.to_string());
        element
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    /// Upsert identity; `None` for set-valued elements (hreflang links,
    /// scripts) and anything without a keying attribute.
    pub fn key(&self) -> Option<ElementKey> {
        match self.tag {
            "meta" => self
                .attr("name")
                .map(|n| ElementKey::MetaName(n.to_string()))
                .or_else(|| {
                    self.attr("property")
                        .map(|p| ElementKey::MetaProperty(p.to_string()))
                }),
            "link" if self.attr("hreflang").is_none() => {
                self.attr("rel").map(|r| ElementKey::Link(r.to_string()))
            }
            _ => None,
        }
    }

    pub fn is_hreflang_link(&self) -> bool {
        self.tag == "link" && self.attr("rel") == Some("alternate") && self.attr("hreflang").is_some()
    }

    pub fn is_marked_json_ld(&self) -> bool {
        self.tag == "script" && self.attr(JSON_LD_MARKER).is_some()
    }

    fn content_attr(&self) -> &'static str {
        if self.tag == "link" {
            "href"
        } else {
            "content"
        }
    }

    pub fn render(&self) -> String {
        let mut out = format!("<{}", self.tag);
        for (name, value) in &self.attrs {
            out.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
        }
        match (&self.text, self.tag) {
            (Some(text), _) => out.push_str(&format!(">{}</{}>", escape_script_json(text), self.tag)),
            (None, "script") => out.push_str("></script>"),
            (None, _) => out.push('>'),
        }
        out
    }
}

/// The document head: a title plus an ordered element list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentHead {
    pub title: String,
    pub elements: Vec<HeadElement>,
}

impl DocumentHead {
    /// Head shell every page starts from, before any page is mounted.
    pub fn shell(site_name: &str) -> Self {
        Self {
            title: site_name.to_string(),
            elements: vec![
                HeadElement::new("meta", &[("charset", "utf-8")]),
                HeadElement::meta_name("viewport", "width=device-width, initial-scale=1"),
                HeadElement::link("icon", "/assets/favicon.svg"),
                HeadElement::link("stylesheet", "/assets/site.css"),
            ],
        }
    }

    pub fn find(&self, key: &ElementKey) -> Option<&HeadElement> {
        self.elements.iter().find(|e| e.key().as_ref() == Some(key))
    }

    fn position(&self, key: &ElementKey) -> Option<usize> {
        self.elements.iter().position(|e| e.key().as_ref() == Some(key))
    }

    pub fn meta_name(&self, name: &str) -> Option<&str> {
        self.find(&ElementKey::MetaName(name.to_string()))
            .and_then(|e| e.attr("content"))
    }

    pub fn meta_property(&self, property: &str) -> Option<&str> {
        self.find(&ElementKey::MetaProperty(property.to_string()))
            .and_then(|e| e.attr("content"))
    }

    pub fn link_href(&self, rel: &str) -> Option<&str> {
        self.find(&ElementKey::Link(rel.to_string()))
            .and_then(|e| e.attr("href"))
    }

    pub fn hreflang_links(&self) -> impl Iterator<Item = &HeadElement> {
        self.elements.iter().filter(|e| e.is_hreflang_link())
    }

    pub fn json_ld_scripts(&self) -> impl Iterator<Item = &HeadElement> {
        self.elements.iter().filter(|e| e.is_marked_json_ld())
    }

    pub fn render(&self) -> String {
        let mut out = format!("<title>{}</title>", escape_html(&self.title));
        for element in &self.elements {
            out.push('\n');
            out.push_str(&element.render());
        }
        out
    }
}

/// What the synchronizer did to an element, so it can be undone.
#[derive(Debug)]
enum Change {
    Created(ElementKey),
    Updated {
        key: ElementKey,
        previous: HeadElement,
    },
}

/// Exclusive, page-scoped handle on the document head.
pub struct HeadSynchronizer<'h> {
    head: &'h mut DocumentHead,
    changes: Vec<Change>,
    previous_title: Option<String>,
    applied: bool,
}

impl<'h> HeadSynchronizer<'h> {
    /// Acquire the head for a page and apply its bundle.
    pub fn mount(head: &'h mut DocumentHead, bundle: Option<&SeoBundle>) -> Self {
        let mut sync = Self {
            head,
            changes: Vec::new(),
            previous_title: None,
            applied: false,
        };
        sync.sync(bundle);
        sync
    }

    /// Re-apply for the mounted page.
    ///
    /// Everything from the previous call is torn down before the new bundle
    /// is written. `None` leaves the head untouched.
    pub fn sync(&mut self, bundle: Option<&SeoBundle>) {
        let Some(bundle) = bundle else {
            return;
        };

        self.release();
        self.applied = true;

        self.previous_title = Some(std::mem::replace(&mut self.head.title, bundle.title.clone()));

        self.upsert(HeadElement::meta_name("description", &bundle.description));
        if !bundle.keywords.is_empty() {
            self.upsert(HeadElement::meta_name("keywords", &bundle.keywords.join(", ")));
        }
        self.upsert(HeadElement::meta_name("robots", &bundle.robots));
        self.upsert(HeadElement::link("canonical", &bundle.canonical));

        let og = &bundle.open_graph;
        for (property, content) in [
            ("og:title", &og.title),
            ("og:description", &og.description),
            ("og:url", &og.url),
            ("og:type", &og.og_type),
            ("og:locale", &og.locale),
            ("og:site_name", &og.site_name),
            ("og:image", &og.image),
            ("og:image:alt", &og.image_alt),
        ] {
            self.upsert(HeadElement::meta_property(property, content));
        }

        let tw = &bundle.twitter;
        for (name, content) in [
            ("twitter:card", &tw.card),
            ("twitter:title", &tw.title),
            ("twitter:description", &tw.description),
            ("twitter:image", &tw.image),
        ] {
            self.upsert(HeadElement::meta_name(name, content));
        }

        self.remove_hreflang_links();
        for alternate in &bundle.alternates {
            self.head
                .elements
                .push(HeadElement::alternate(&alternate.hreflang, &alternate.href));
        }

        self.remove_json_ld();
        for object in &bundle.json_ld {
            self.head
                .elements
                .push(HeadElement::json_ld(&object.to_string()));
        }
    }

    /// Read access to the head while the page is mounted.
    pub fn head(&self) -> &DocumentHead {
        &*self.head
    }

    fn upsert(&mut self, element: HeadElement) {
        let Some(key) = element.key() else {
            self.head.elements.push(element);
            return;
        };

        match self.head.position(&key) {
            Some(index) => {
                let existing = &mut self.head.elements[index];
                let previous = existing.clone();
                let attr = element.content_attr();
                if let Some(value) = element.attr(attr) {
                    existing.set_attr(attr, value);
                }
                self.changes.push(Change::Updated { key, previous });
            }
            None => {
                self.head.elements.push(element);
                self.changes.push(Change::Created(key));
            }
        }
    }

    fn remove_hreflang_links(&mut self) {
        self.head.elements.retain(|e| !e.is_hreflang_link());
    }

    fn remove_json_ld(&mut self) {
        self.head.elements.retain(|e| !e.is_marked_json_ld());
    }

    /// Undo everything applied so far.
    fn release(&mut self) {
        if !self.applied {
            return;
        }

        while let Some(change) = self.changes.pop() {
            match change {
                Change::Created(key) => {
                    if let Some(index) = self.head.position(&key) {
                        self.head.elements.remove(index);
                    }
                }
                Change::Updated { key, previous } => {
                    if let Some(index) = self.head.position(&key) {
                        self.head.elements[index] = previous;
                    }
                }
            }
        }
        self.remove_hreflang_links();
        self.remove_json_ld();

        if let Some(title) = self.previous_title.take() {
            self.head.title = title;
        }
        self.applied = false;
    }
}

impl Drop for HeadSynchronizer<'_> {
    fn drop(&mut self) {
        self.release();
    }
}
