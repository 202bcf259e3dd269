//! JSON export of the site configuration for build tooling.

use color_eyre::{Section, eyre::eyre};
use tracing::info;

use crate::{
    config::{SOCIALS, site_config},
    types::Page,
};

pub const USAGE: &str = "Usage: site-config [page <home|blog|projects> | socials]";

/// Render the export selected by `args` (program name already stripped) as pretty JSON.
pub fn export(args: &[String]) -> color_eyre::Result<String> {
    let json = match args {
        [] => {
            info!(site = site_config().site.title, "exporting full site configuration");
            serde_json::to_string_pretty(&site_config())?
        }
        [cmd, name] if cmd == "page" => {
            let page: Page = name
                .parse()
                .with_note(|| "While selecting the page to export")?;
            info!(%page, "exporting page metadata");
            serde_json::to_string_pretty(&page.metadata())?
        }
        [cmd] if cmd == "socials" => {
            info!(count = SOCIALS.len(), "exporting social links");
            serde_json::to_string_pretty(SOCIALS)?
        }
        other => {
            return Err(eyre!("Unknown arguments: {other:?}")).with_note(|| USAGE);
        }
    };

    Ok(json)
}
