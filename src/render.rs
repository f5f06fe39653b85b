//! Server-side page rendering.
//!
//! Every page is rendered against a fresh head shell with a mounted
//! `HeadSynchronizer`, so the server, the prerenderer and the tests all go
//! through the same head contract.

use crate::html::escape_html;
use crate::i18n::{Language, LanguageStrings};
use crate::routing::{path_for, RouteKey};
use crate::seo::{DocumentHead, HeadSynchronizer, SeoBundle, SeoCatalog, SiteSettings, X_DEFAULT};

/// Posts the contact form as JSON and shows the returned UI state.
const CONTACT_SCRIPT: &str = r#"<script>
document.getElementById("contact-form").addEventListener("submit", async (event) => {
  event.preventDefault();
  const form = event.target;
  const status = document.getElementById("contact-status");
  const button = form.querySelector("button");
  button.disabled = true;
  try {
    const response = await fetch(form.action, {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify(Object.fromEntries(new FormData(form))),
    });
    const state = await response.json();
    status.textContent = state.message;
    status.dataset.status = state.status;
    if (state.status === "success") form.reset();
  } catch (_) {
    status.textContent = status.dataset.fallback;
    status.dataset.status = "error";
  } finally {
    button.disabled = false;
  }
});
</script>"#;

/// Render the full HTML document for one page.
pub fn render_page(
    site: &SiteSettings,
    catalog: &SeoCatalog,
    key: RouteKey,
    language: Language,
) -> String {
    let bundle = catalog.resolve(site, key, language);
    let strings = LanguageStrings::for_language(language);

    let mut head = DocumentHead::shell(&site.site_name);
    let sync = HeadSynchronizer::mount(&mut head, bundle.as_ref());

    let (heading, description) = match &bundle {
        Some(b) => (b.heading.as_str(), b.description.as_str()),
        None => (site.site_name.as_str(), ""),
    };

    let mut main = format!("<h1>{}</h1>\n", escape_html(heading));
    if !description.is_empty() {
        main.push_str(&format!("<p class=\"lead\">{}</p>\n", escape_html(description)));
    }
    match key {
        RouteKey::Services => main.push_str(&document_list(catalog, language, strings)),
        RouteKey::Contact => main.push_str(&contact_form(catalog, language, strings)),
        k if k.is_document_page() => main.push_str(&format!(
            "<p><a class=\"cta\" href=\"{}\">{}</a></p>\n",
            path_for(RouteKey::Contact, language),
            escape_html(strings.form_submit)
        )),
        _ => {}
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n{head}\n</head>\n<body>\n{header}<main>\n{main}</main>\n{footer}</body>\n</html>\n",
        lang = language.code(),
        head = sync.head().render(),
        header = header(site, key, language, strings, bundle.as_ref()),
        main = main,
        footer = footer(site, language, strings),
    )
}

fn header(
    site: &SiteSettings,
    current: RouteKey,
    language: Language,
    strings: &LanguageStrings,
    bundle: Option<&SeoBundle>,
) -> String {
    let mut out = format!(
        "<header>\n<a class=\"brand\" href=\"{}\">{}</a>\n<nav>\n<ul>\n",
        path_for(RouteKey::Home, language),
        escape_html(&site.site_name)
    );

    for (key, label) in [
        (RouteKey::Home, strings.nav_home),
        (RouteKey::Services, strings.nav_services),
        (RouteKey::Pricing, strings.nav_pricing),
        (RouteKey::About, strings.nav_about),
        (RouteKey::Contact, strings.nav_contact),
    ] {
        let current_attr = if key == current {
            " aria-current=\"page\""
        } else {
            ""
        };
        out.push_str(&format!(
            "<li><a href=\"{}\"{}>{}</a></li>\n",
            path_for(key, language),
            current_attr,
            escape_html(label)
        ));
    }
    out.push_str("</ul>\n</nav>\n");
    out.push_str(&language_switcher(current, language, strings, bundle));
    out.push_str("</header>\n");
    out
}

/// Switcher entries follow the page's hreflang alternates, so it offers
/// exactly the languages the head advertises.
fn language_switcher(
    current: RouteKey,
    language: Language,
    strings: &LanguageStrings,
    bundle: Option<&SeoBundle>,
) -> String {
    let languages: Vec<Language> = match bundle {
        Some(b) => b
            .alternates
            .iter()
            .filter(|a| a.hreflang != X_DEFAULT)
            .filter_map(|a| Language::parse(&a.hreflang))
            .collect(),
        None => Language::all(),
    };

    let mut out = format!(
        "<nav class=\"language-switcher\" aria-label=\"{}\">\n<ul>\n",
        escape_html(strings.language_switcher)
    );
    for lang in languages {
        let current_attr = if lang == language {
            " aria-current=\"true\""
        } else {
            ""
        };
        out.push_str(&format!(
            "<li><a href=\"{}\" hreflang=\"{code}\" lang=\"{code}\"{}>{}</a></li>\n",
            path_for(current, lang),
            current_attr,
            escape_html(lang.native_name()),
            code = lang.code(),
        ));
    }
    out.push_str("</ul>\n</nav>\n");
    out
}

fn document_list(catalog: &SeoCatalog, language: Language, strings: &LanguageStrings) -> String {
    let mut out = format!(
        "<section class=\"documents\">\n<h2>{}</h2>\n<ul>\n",
        escape_html(strings.documents_heading)
    );
    for key in RouteKey::DOCUMENT_PAGES {
        let label = catalog
            .entry(key, language)
            .map(|e| e.heading)
            .unwrap_or(key.as_str());
        out.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            path_for(key, language),
            escape_html(label)
        ));
    }
    out.push_str("</ul>\n</section>\n");
    out
}

fn contact_form(catalog: &SeoCatalog, language: Language, strings: &LanguageStrings) -> String {
    let mut options = String::from("<option value=\"\"></option>\n");
    for key in RouteKey::DOCUMENT_PAGES {
        let label = catalog
            .entry(key, language)
            .map(|e| e.heading)
            .unwrap_or(key.as_str());
        options.push_str(&format!(
            "<option value=\"{}\">{}</option>\n",
            key.as_str(),
            escape_html(label)
        ));
    }

    format!(
        concat!(
            "<form id=\"contact-form\" action=\"/api/contact\" method=\"post\">\n",
            "<input type=\"hidden\" name=\"language\" value=\"{lang}\">\n",
            "<label>{name}<input name=\"name\" required></label>\n",
            "<label>{email}<input type=\"email\" name=\"email\" required></label>\n",
            "<label>{phone}<input type=\"tel\" name=\"phone\"></label>\n",
            "<label>{document_type}<select name=\"document_type\">\n{options}</select></label>\n",
            "<label>{message}<textarea name=\"message\" required></textarea></label>\n",
            "<button type=\"submit\">{submit}</button>\n",
            "<p id=\"contact-status\" role=\"status\" aria-live=\"polite\" data-fallback=\"{fallback}\"></p>\n",
            "</form>\n",
            "{script}\n",
        ),
        lang = language.code(),
        name = escape_html(strings.form_name),
        email = escape_html(strings.form_email),
        phone = escape_html(strings.form_phone),
        document_type = escape_html(strings.form_document_type),
        options = options,
        message = escape_html(strings.form_message),
        submit = escape_html(strings.form_submit),
        fallback = escape_html(strings.contact_unreachable),
        script = CONTACT_SCRIPT,
    )
}

fn footer(site: &SiteSettings, language: Language, strings: &LanguageStrings) -> String {
    format!(
        concat!(
            "<footer>\n",
            "<p>{tagline}</p>\n",
            "<ul>\n",
            "<li><a href=\"{legal_href}\">{legal}</a></li>\n",
            "<li><a href=\"{privacy_href}\">{privacy}</a></li>\n",
            "</ul>\n",
            "<p>&copy; {name}</p>\n",
            "</footer>\n",
        ),
        tagline = escape_html(strings.footer_tagline),
        legal_href = path_for(RouteKey::Legal, language),
        legal = escape_html(strings.footer_legal),
        privacy_href = path_for(RouteKey::Privacy, language),
        privacy = escape_html(strings.footer_privacy),
        name = escape_html(&site.site_name),
    )
}
