//! controlkit CLI
//!
//! Renders the builder pages and submits their forms from the command line.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use controlkit_forms::ValidationErrors;
use controlkit_pages::{
    parse_assignment, render_page, DockerProjectPage, FrameworkAdminPage, LanguageAdminPage,
    PageData, PageError,
};

/// Docker project builder pages.
#[derive(Parser)]
#[command(name = "controlkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Page data file (JSON). Built-in data when not given.
    #[arg(short, long, env = "CONTROLKIT_DATA")]
    data: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum PageKind {
    /// Docker project form.
    Docker,
    /// Framework admin tabs.
    Framework,
    /// Language catalog table.
    Language,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a page as HTML.
    Render {
        /// Page to render.
        page: PageKind,

        /// Active tab (framework page).
        #[arg(short, long, default_value_t = 0)]
        tab: usize,

        /// Print only the page content, without the layout.
        #[arg(long)]
        fragment: bool,
    },

    /// Fill in a page's form and submit it.
    Submit {
        /// Page whose form is submitted.
        page: PageKind,

        /// Field assignment, FIELD=VALUE. Repeatable.
        #[arg(short, long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
        set: Vec<(String, String)>,

        /// Active tab (framework page).
        #[arg(short, long, default_value_t = 0)]
        tab: usize,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let data = PageData::load_or_default(cli.data.as_deref())?;

    match cli.command {
        Commands::Render {
            page,
            tab,
            fragment,
        } => {
            let (title, content) = render(page, &data, tab)?;
            info!(page = title, "page rendered");
            if fragment {
                println!("{content}");
            } else {
                println!("{}", render_page(title, &content));
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Submit { page, set, tab } => {
            let outcome = match page {
                PageKind::Docker => {
                    let mut page = DockerProjectPage::new(&data)?;
                    page.apply_all(&set)?;
                    to_json(page.submit())?
                }
                PageKind::Framework => {
                    let mut page = FrameworkAdminPage::new(&data)?;
                    page.select_tab(tab)?;
                    page.apply_all(&set)?;
                    to_json(page.submit())?
                }
                PageKind::Language => {
                    return Err(PageError::NoForm(LanguageAdminPage::NAME).into());
                }
            };

            match outcome {
                Ok(request) => {
                    info!("submission accepted");
                    println!("{request}");
                    Ok(ExitCode::SUCCESS)
                }
                Err(errors) => {
                    eprintln!("Formulário inválido!");
                    eprintln!("{errors}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

fn render(page: PageKind, data: &PageData, tab: usize) -> anyhow::Result<(&'static str, String)> {
    Ok(match page {
        PageKind::Docker => (DockerProjectPage::TITLE, DockerProjectPage::new(data)?.render()),
        PageKind::Framework => {
            let mut page = FrameworkAdminPage::new(data)?;
            page.select_tab(tab)?;
            (FrameworkAdminPage::TITLE, page.render())
        }
        PageKind::Language => (LanguageAdminPage::TITLE, LanguageAdminPage::new(data)?.render()?),
    })
}

/// Pretty JSON of an accepted request, or of the errors of a rejected one.
fn to_json<T: Serialize>(
    outcome: Result<T, ValidationErrors>,
) -> serde_json::Result<Result<String, String>> {
    Ok(match outcome {
        Ok(request) => Ok(serde_json::to_string_pretty(&request)?),
        Err(errors) => Err(serde_json::to_string_pretty(&errors)?),
    })
}
