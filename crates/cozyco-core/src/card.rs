//! Seasons greetings card
//!
//! An HTML page with the seed's cover art on the front and a short greeting
//! inside.

use crate::art::{CoverArtConfig, make_cover_art_with};

/// Shown in place of an empty sender or recipient
const PLACEHOLDER_NAME: &str = "...";

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn name_or_placeholder(name: &str) -> String {
    if name.is_empty() {
        PLACEHOLDER_NAME.to_owned()
    } else {
        escape_html(name)
    }
}

/// Render a greetings card with the default cover art configuration
pub fn make_greetings_card(seed: Option<&str>, from: &str, to: &str) -> String {
    make_greetings_card_with(seed, from, to, &CoverArtConfig::default())
}

pub fn make_greetings_card_with(
    seed: Option<&str>,
    from: &str,
    to: &str,
    config: &CoverArtConfig,
) -> String {
    let cover = make_cover_art_with(seed, config);
    format!(
        r#"
    <html>
      <body>
        <div class="cover">
          {cover}
        </div>
        <div class="inside">
          <p>Dear<br />{to}</p>
          <p>Season's greetings, and a happy new year!</p>
          <p>From<br />{from}</p>
        </div>
      </body>
    </html>
  "#,
        cover = cover,
        to = name_or_placeholder(to),
        from = name_or_placeholder(from),
    )
}
