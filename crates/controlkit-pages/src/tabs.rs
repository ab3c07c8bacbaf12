//! Tab strip with one active panel.

use ironhtml::typed::Element;
use ironhtml_elements::{Button, Div, Li, Ul};

use crate::error::{PageError, Result};
use crate::slug::slugify;

/// Labelled tabs and the index of the active one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    labels: Vec<String>,
    active: usize,
}

impl TabSet {
    /// Creates a tab set with the first tab active.
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(PageError::NoTabs);
        }
        if let Some(label) = labels.iter().find(|label| slugify(label).is_empty()) {
            return Err(PageError::InvalidTabLabel(label.clone()));
        }
        Ok(Self { labels, active: 0 })
    }

    /// Tab labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of tabs.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false; a tab set has at least one tab.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Index of the active tab.
    pub const fn active(&self) -> usize {
        self.active
    }

    /// Label of the active tab.
    pub fn active_label(&self) -> &str {
        &self.labels[self.active]
    }

    /// Slug of the active tab's label.
    pub fn active_slug(&self) -> String {
        slugify(self.active_label())
    }

    /// Makes `index` the active tab.
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.labels.len() {
            return Err(PageError::TabOutOfRange {
                index,
                len: self.labels.len(),
            });
        }
        self.active = index;
        Ok(())
    }

    /// Renders the tab strip and the active panel's content.
    pub fn render(&self, panel: impl FnOnce(usize) -> String) -> String {
        let content = panel(self.active);
        let active = self.active;

        Element::<Div>::new()
            .class("tabs")
            .child::<Ul, _>(|ul| {
                ul.class("nav nav-tabs mb-3").attr("role", "tablist").children(
                    self.labels.iter().enumerate(),
                    |(index, label), li: Element<Li>| {
                        let class = if index == active {
                            "nav-link active"
                        } else {
                            "nav-link"
                        };
                        let index = index.to_string();
                        li.class("nav-item").child::<Button, _>(|b| {
                            b.class(class)
                                .attr("type", "button")
                                .attr("role", "tab")
                                .data("tab-index", &index)
                                .text(label)
                        })
                    },
                )
            })
            .child::<Div, _>(|d| {
                d.class("tab-content").child::<Div, _>(|pane| {
                    pane.class("tab-pane active")
                        .attr("role", "tabpanel")
                        .raw(&content)
                })
            })
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> TabSet {
        TabSet::new(["Frontend", "Backend", "Mobile"]).unwrap()
    }

    #[test]
    fn test_select() {
        let mut tabs = tabs();
        assert_eq!(tabs.active(), 0);
        tabs.select(2).unwrap();
        assert_eq!(tabs.active_label(), "Mobile");
        assert_eq!(tabs.active_slug(), "mobile");
    }

    #[test]
    fn test_select_out_of_range() {
        let mut tabs = tabs();
        let err = tabs.select(3).unwrap_err();
        assert!(matches!(err, PageError::TabOutOfRange { index: 3, len: 3 }));
        assert_eq!(tabs.active(), 0);
    }

    #[test]
    fn test_empty_tab_set() {
        assert!(matches!(TabSet::new(Vec::<String>::new()), Err(PageError::NoTabs)));
    }

    #[test]
    fn test_label_without_slug_is_rejected() {
        let err = TabSet::new(["Frontend", "--"]).unwrap_err();
        assert!(matches!(err, PageError::InvalidTabLabel(label) if label == "--"));
        assert!(TabSet::new(["C++ / C#"]).is_ok());
    }

    #[test]
    fn test_render_only_active_panel() {
        let mut tabs = tabs();
        tabs.select(1).unwrap();
        let mut rendered = Vec::new();
        let html = tabs.render(|index| {
            rendered.push(index);
            format!("<p>painel {index}</p>")
        });
        assert_eq!(rendered, vec![1]);
        assert!(html.contains("<p>painel 1</p>"));
        assert!(html.contains("nav-link active"));
        assert!(html.contains("Backend"));
        assert!(html.contains("Mobile"));
    }
}
