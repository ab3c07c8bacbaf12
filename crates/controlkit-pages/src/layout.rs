//! Page layout.

use ironhtml::html;
use ironhtml::typed::{Document, Element};
use ironhtml_elements::{Body, Div, Head, Html, Li, Link, Meta, Nav, Script, Title, Ul};

const SITE_TITLE: &str = "Docker Builder";

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css";
const BOOTSTRAP_ICONS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.1/font/bootstrap-icons.css";
const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/js/bootstrap.bundle.min.js";

const JS: &str = "\
document.querySelectorAll('.select-all').forEach(checkbox=>{\
checkbox.addEventListener('change',function(){\
const table=this.closest('table');\
table.querySelectorAll('.row-select').forEach(cb=>{\
cb.checked=this.checked;});});});";

/// Navigation entries: label and href.
const NAV: [(&str, &str); 3] = [
    ("Projeto", "/"),
    ("Frameworks", "/framework/"),
    ("Linguagens", "/linguagem/"),
];

/// Wraps `content` in a complete HTML document titled `page_title`.
pub fn render_page(page_title: &str, content: &str) -> String {
    let title_str = format!("{page_title} | {SITE_TITLE}");

    Document::new()
        .doctype()
        .root::<Html, _>(|html_el| {
            html_el
                .attr("lang", "pt-BR")
                .data("bs-theme", "light")
                .child::<Head, _>(|head| {
                    head.child::<Meta, _>(|m| m.attr("charset", "UTF-8"))
                        .child::<Meta, _>(|m| {
                            m.attr("name", "viewport")
                                .attr("content", "width=device-width, initial-scale=1.0")
                        })
                        .child::<Title, _>(|t| t.text(&title_str))
                        .child::<Link, _>(|l| l.attr("href", BOOTSTRAP_CSS).attr("rel", "stylesheet"))
                        .child::<Link, _>(|l| {
                            l.attr("href", BOOTSTRAP_ICONS).attr("rel", "stylesheet")
                        })
                })
                .child::<Body, _>(|body| {
                    body.child::<Nav, _>(render_navbar)
                        .child::<Div, _>(|main| {
                            let title_el = html! {
                                h2.class("mb-4") {
                                    #page_title
                                }
                            };
                            main.class("container py-4")
                                .raw(title_el.render())
                                .raw(content)
                        })
                        .child::<Script, _>(|s| s.attr("src", BOOTSTRAP_JS))
                        .child::<Script, _>(|s| s.raw(JS))
                })
        })
        .build()
}

fn render_navbar(nav: Element<Nav>) -> Element<Nav> {
    nav.class("navbar navbar-expand navbar-dark bg-primary")
        .child::<Div, _>(|d| {
            let brand = html! {
                a.class("navbar-brand").href("/") {
                    i.class("bi bi-box-seam me-2")
                    #SITE_TITLE
                }
            };
            d.class("container").raw(brand.render()).child::<Ul, _>(|ul| {
                ul.class("navbar-nav").children(NAV.iter().copied(), |(label, href), li: Element<Li>| {
                    let link = html! {
                        a.class("nav-link").href(#href) {
                            #label
                        }
                    };
                    li.class("nav-item").raw(link.render())
                })
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_page() {
        let html = render_page("Linguagens", "<p>conteúdo</p>");
        assert!(html.to_lowercase().starts_with("<!doctype html>"));
        assert!(html.contains("<title>Linguagens | Docker Builder</title>"));
        assert!(html.contains("<p>conteúdo</p>"));
        assert!(html.contains("bootstrap.min.css"));
        assert!(html.contains("/framework/"));
    }
}
