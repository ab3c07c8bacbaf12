//! # controlkit-pages
//!
//! The Docker project builder pages, built on `controlkit-forms` and
//! `controlkit-tables`:
//!
//! - [`DockerProjectPage`]: project form with a derived container name and
//!   version fields enabled by their framework or language
//! - [`FrameworkAdminPage`]: tabbed create-framework forms, one endpoint
//!   per tab
//! - [`LanguageAdminPage`]: the language catalog as a table
//!
//! Option lists and table rows come from [`PageData`].
//!
//! ```rust
//! use controlkit_pages::{DockerField, DockerProjectPage, PageData};
//!
//! let mut page = DockerProjectPage::new(&PageData::default()).unwrap();
//! page.apply(DockerField::ProjectName, "Loja Online").unwrap();
//! page.apply(DockerField::Framework, "React").unwrap();
//!
//! let request = page.submit().unwrap();
//! assert_eq!(request.container_name, "loja-online");
//! ```

mod assign;
mod config;
mod docker;
mod error;
mod framework;
mod language;
mod layout;
mod slug;
mod tabs;

pub use assign::parse_assignment;
pub use config::{Named, PageData};
pub use docker::{docker_schema, DockerField, DockerProjectPage, DockerProjectRequest};
pub use error::{PageError, Result};
pub use framework::{FrameworkAdminPage, FrameworkField, FrameworkRequest};
pub use language::LanguageAdminPage;
pub use layout::render_page;
pub use slug::slugify;
pub use tabs::TabSet;
