//! Navigation markup: header menu, documentation sidebar, prev/next links

use super::urls::{is_external, UrlBuilder, DEFAULT_LANG};
use super::{CanonicalPath, SiteData, Sidebar, Translate};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use indexmap::IndexMap;

/// Menu entries whose paths get a language prefix
const LOCALIZED_MENU: &[&str] = &["docs"];

/// Everything the navigation helpers need to know about the current page
pub struct NavContext<'a> {
    /// Site data files
    pub data: &'a SiteData,
    /// URL settings
    pub urls: &'a UrlBuilder,
    /// i18n lookup for the page language
    pub translator: &'a dyn Translate,
    /// Canonical path, e.g. `docs/0.14/services.html`
    pub canonical_path: &'a str,
    /// Output path of the page, e.g. `zh/docs/0.14/services.html`
    pub path: &'a str,
    /// Page language
    pub lang: &'a str,
}

impl<'a> NavContext<'a> {
    fn t(&self, key: &str) -> String {
        self.translator.translate(key)
    }

    fn sidebar(&self) -> Option<(&'a str, &'a str, &'a Sidebar)> {
        let canonical = CanonicalPath::new(self.canonical_path);
        let section_type = canonical.section_type()?;
        let version = canonical.version()?;
        let sidebar = self.data.sidebar(version, section_type)?;
        Some((section_type, version, sidebar))
    }
}

/// Header menu links. Localized entries point into the page language.
pub fn header_menu(ctx: &NavContext<'_>, class_name: &str) -> String {
    let mut result = String::new();

    for (title, path) in &ctx.data.menu {
        let path = if ctx.lang != DEFAULT_LANG && LOCALIZED_MENU.contains(&title.as_str()) {
            format!("{}{}", ctx.lang, path)
        } else {
            path.clone()
        };

        result.push_str(&format!(
            "<a href=\"{}\" class=\"{}-link\">{}</a>",
            attr(&ctx.urls.url_for(&path)),
            attr(class_name),
            text(&ctx.t(&format!("menu.{}", title)))
        ));
    }

    result
}

/// Left sidebar: version selector, then every group with its links.
///
/// `page_exists` decides whether a translated version landing page exists;
/// when it does not, the selector links to the English page.
pub fn doc_sidebar(
    ctx: &NavContext<'_>,
    class_name: &str,
    page_exists: impl Fn(&str) -> bool,
) -> String {
    let canonical = CanonicalPath::new(ctx.canonical_path);
    let segments = canonical.segments();
    if segments.len() < 2 {
        return String::new();
    }
    let (section_type, current_version) = (segments[0], segments[1]);
    let mut result = String::new();

    if let Some(versions) = ctx.data.versions.for_type(section_type) {
        result.push_str("<div class=\"version-selector\"><select onchange=\"changeVersion(this)\">");
        for (version, title) in versions {
            let target = format!("{}/{}", section_type, version);
            let mut url = ctx.urls.url_for_lang(&target, ctx.lang);
            if !page_exists(&url) {
                url = ctx.urls.url_for_lang(&target, DEFAULT_LANG);
            }
            let selected = if version == current_version {
                " selected"
            } else {
                ""
            };
            result.push_str(&format!(
                "<option value=\"{}\"{}>{}</option>",
                attr(&url),
                selected,
                text(&ctx.t(title))
            ));
        }
        result.push_str("</select></div>");
    }

    let Some((_, _, sidebar)) = ctx.sidebar() else {
        return result;
    };
    let prefix = format!("sidebar.{}.", section_type);
    let current = format!("/{}", ctx.path);

    for (group, items) in sidebar {
        result.push_str(&format!(
            "<strong class=\"{}-title\">{}</strong>",
            attr(class_name),
            text(&ctx.t(&format!("{}{}", prefix, group)))
        ));

        for (label, link) in items {
            let external = is_external(link);
            let full_link = if external || link.starts_with('/') {
                link.clone()
            } else {
                ctx.urls.url_for_lang(
                    &format!("{}/{}/{}", section_type, current_version, link),
                    ctx.lang,
                )
            };

            let mut item_class = format!("{}-link", class_name);
            if full_link == current {
                item_class.push_str(" current");
            }

            result.push_str(&format!(
                "<a href=\"{}\" class=\"{}\"{}>{}</a>",
                attr(&full_link),
                attr(&item_class),
                if external { " target=\"_blank\"" } else { "" },
                text(&ctx.t(&format!("{}{}", prefix, label)))
            ));
        }
    }

    result
}

/// Previous/next links following sidebar order.
///
/// Pages missing from the sidebar get no links.
pub fn page_nav(ctx: &NavContext<'_>) -> String {
    let Some((section_type, _, sidebar)) = ctx.sidebar() else {
        return String::new();
    };
    let prefix = format!("sidebar.{}.", section_type);
    let page = ctx.path.rsplit('/').next().unwrap_or(ctx.path);

    // link → label; a link listed twice keeps its first position
    let mut links: IndexMap<&str, &str> = IndexMap::new();
    for items in sidebar.values() {
        for (label, link) in items {
            links.insert(link.as_str(), label.as_str());
        }
    }

    let Some(index) = links.get_index_of(page) else {
        return String::new();
    };
    let mut result = String::new();

    if index > 0 {
        if let Some((link, label)) = links.get_index(index - 1) {
            result.push_str(&format!(
                "<a href=\"{}\" class=\"article-footer-prev\" title=\"{}\"><i class=\"fa fa-chevron-left\"></i><span>{}</span></a>",
                attr(link),
                attr(&ctx.t(&format!("{}{}", prefix, label))),
                text(&ctx.t("page.prev"))
            ));
        }
    }

    if let Some((link, label)) = links.get_index(index + 1) {
        result.push_str(&format!(
            "<a href=\"{}\" class=\"article-footer-next\" title=\"{}\"><span>{}</span><i class=\"fa fa-chevron-right\"></i></a>",
            attr(link),
            attr(&ctx.t(&format!("{}{}", prefix, label))),
            text(&ctx.t("page.next"))
        ));
    }

    result
}
