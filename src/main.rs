//! sitekit - cached GitHub repository cards and page state for static sites

use std::error::Error;

use clap::Parser;
use tracing::{debug, info};

use sitekit::cli::{Cli, Command, ThemeAction};
use sitekit::config::Config;
use sitekit::github::RepoSlug;
use sitekit::{Page, PageEvent};

async fn run(command: Command, config: &Config) -> sitekit::Result<()> {
    let mut page = Page::from_config(config)?;

    match command {
        Command::Cards { repos } => {
            let slugs = repos
                .iter()
                .map(|r| r.parse::<RepoSlug>())
                .collect::<sitekit::Result<Vec<_>>>()?;
            let cards = page.decorate(&slugs).await?;
            for (slug, card) in slugs.iter().zip(cards) {
                if let Some(html) = card {
                    println!("<div class=\"github-repo-details\" custom=\"{}\">", slug);
                    print!("{}", html);
                    println!("</div>");
                }
            }
        }
        Command::Theme { action } => {
            if action == ThemeAction::Toggle {
                page.handle_event(PageEvent::ThemeToggled)?;
            }
            println!("{}", page.theme.as_str());
            println!("{}", page.theme.classes().join(" "));
        }
        Command::Scroll {
            top,
            height,
            client,
        } => {
            page.handle_event(PageEvent::Scrolled {
                scroll_top: top,
                scroll_height: height,
                client_height: client,
            })?;
            println!("{}", page.scroll_width);
        }
        Command::Get { url } => {
            let json = page.fetch_json(&url).await?;
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so stdout carries only command output
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;
    info!("using store at {}", config.storage_path.display());
    debug!("ttl {:?}, api {}", config.ttl, config.api_base);

    run(cli.command, &config).await?;
    Ok(())
}
