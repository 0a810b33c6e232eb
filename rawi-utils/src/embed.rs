use twilight_model::channel::message::embed::Embed;
use twilight_util::builder::embed::{EmbedAuthorBuilder, EmbedBuilder, EmbedFooterBuilder};

/// Embed color used for biography cards.
pub const BIOGRAPHY_EMBED_COLOR: u32 = 0x4a_a8_07;

/// Build a biography page embed with consistent styling.
///
/// The footer carries the page position and is only present for multi-page
/// content; single-page cards stay footerless.
pub fn build_biography_embed(
    title: &str,
    author: &str,
    description: impl Into<String>,
    page: usize,
    total_pages: usize,
) -> anyhow::Result<Embed> {
    let builder = EmbedBuilder::new()
        .title(title)
        .color(BIOGRAPHY_EMBED_COLOR)
        .author(EmbedAuthorBuilder::new(author).build())
        .description(description);

    let embed = if total_pages > 1 {
        let footer = EmbedFooterBuilder::new(format!("Page {page}/{total_pages}")).build();
        builder.footer(footer).validate()?.build()
    } else {
        builder.validate()?.build()
    };

    Ok(embed)
}
