// Repository card rendering.
// Turns repository details into the HTML block shown inside `.github-repo-details` elements.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::github::{EmojiMap, LanguageColors, RepoDetails};

static SHORTCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":(\w+):").expect("shortcode pattern is valid"));

const STAR_ICON: &str = r#"<svg class="svg-icon" aria-label="stars" viewBox="0 0 16 16" version="1.1" width="16" height="16" role="img"><path fill-rule="evenodd" d="M8 .25a.75.75 0 01.673.418l1.882 3.815 4.21.612a.75.75 0 01.416 1.279l-3.046 2.97.719 4.192a.75.75 0 01-1.088.791L8 12.347l-3.766 1.98a.75.75 0 01-1.088-.79l.72-4.194L.818 6.374a.75.75 0 01.416-1.28l4.21-.611L7.327.668A.75.75 0 018 .25zm0 2.445L6.615 5.5a.75.75 0 01-.564.41l-3.097.45 2.24 2.184a.75.75 0 01.216.664l-.528 3.084 2.769-1.456a.75.75 0 01.698 0l2.77 1.456-.53-3.084a.75.75 0 01.216-.664l2.24-2.183-3.096-.45a.75.75 0 01-.564-.41L8 2.694v.001z"></path></svg>"#;

const FORK_ICON: &str = r#"<svg class="svg-icon" aria-label="fork" viewBox="0 0 16 16" version="1.1" width="16" height="16" role="img"><path fill-rule="evenodd" d="M5 3.25a.75.75 0 11-1.5 0 .75.75 0 011.5 0zm0 2.122a2.25 2.25 0 10-1.5 0v.878A2.25 2.25 0 005.75 8.5h1.5v2.128a2.251 2.251 0 101.5 0V8.5h1.5a2.25 2.25 0 002.25-2.25v-.878a2.25 2.25 0 10-1.5 0v.878a.75.75 0 01-.75.75h-4.5A.75.75 0 015 6.25v-.878zm3.75 7.378a.75.75 0 11-1.5 0 .75.75 0 011.5 0zm3-8.75a.75.75 0 100-1.5.75.75 0 000 1.5z"></path></svg>"#;

/// Escape text for use in HTML content and quoted attributes.
pub fn escape_html(text: &str) -> String {
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

/// Replace known `:shortcode:` emoji with inline images. Unknown shortcodes stay as text.
pub fn emojify(text: &str, emojis: &EmojiMap) -> String {
    SHORTCODE
        .replace_all(text, |caps: &Captures| {
            let name = &caps[1];
            match emojis.get(name) {
                Some(url) => format!(
                    r#"<span><img src="{}" style="width: 1rem; height: 1rem; vertical-align: -0.2rem;" alt="{}"></span>"#,
                    escape_html(url),
                    name
                ),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn display(visible: bool, shown: &str) -> String {
    if visible {
        format!("display: {};", shown)
    } else {
        "display: none;".to_string()
    }
}

/// Render the card body for one repository.
pub fn render_card(details: &RepoDetails, emojis: &EmojiMap, colors: &LanguageColors) -> String {
    let description = emojify(
        &escape_html(details.description.as_deref().unwrap_or_default()),
        emojis,
    );

    let language = details.language.as_deref().unwrap_or_default();
    let color = colors
        .get(language)
        .and_then(|c| c.color.as_deref())
        .unwrap_or_default();

    format!(
        r#"<div style="display: flex; flex-direction: column;">
    <div>{description}</div>
    <div style="display: flex; flex-direction: row;">
        <div style="{language_display} margin-right: 16px;">
            <span style="width: 12px; height: 12px; border-radius: 100%; background-color: {color}; display: inline-block; top: 1px; position: relative;"></span>
            <span>{language}</span>
        </div>
        <div style="{stars_display} align-items: center; margin-right: 16px;">
            {STAR_ICON}
            &nbsp; <span>{stars}</span>
        </div>
        <div style="{forks_display} align-items: center;">
            {FORK_ICON}
            &nbsp; <span>{forks}</span>
        </div>
    </div>
</div>
"#,
        language_display = if language.is_empty() {
            "display: none;".to_string()
        } else {
            String::new()
        },
        color = escape_html(color),
        language = escape_html(language),
        stars_display = display(details.stargazers_count != 0, "flex"),
        stars = details.stargazers_count,
        forks_display = display(details.forks != 0, "flex"),
        forks = details.forks,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::LanguageColor;

    fn emojis() -> EmojiMap {
        EmojiMap::from([(
            "rocket".to_string(),
            "https://github.githubassets.com/images/icons/emoji/unicode/1f680.png".to_string(),
        )])
    }

    #[test]
    fn test_emojify_known_and_unknown() {
        let out = emojify("Fast :rocket: and :nope:", &emojis());

        assert!(out.starts_with("Fast <span><img src=\"https://github.githubassets.com"));
        assert!(out.contains("alt=\"rocket\""));
        assert!(out.ends_with(" and :nope:"));
    }

    #[test]
    fn test_emojify_leaves_plain_text() {
        assert_eq!(emojify("time 10:30:00", &emojis()), "time 10:30:00");
        assert_eq!(emojify("", &emojis()), "");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"R&D"</b>"#),
            "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_render_card_full() {
        let details = RepoDetails {
            full_name: Some("rust-lang/rust".to_string()),
            description: Some("Empowering :rocket:".to_string()),
            language: Some("Rust".to_string()),
            stargazers_count: 90_000,
            forks: 12_000,
        };
        let colors = LanguageColors::from([(
            "Rust".to_string(),
            LanguageColor {
                color: Some("#dea584".to_string()),
            },
        )]);

        let html = render_card(&details, &emojis(), &colors);

        assert!(html.contains("<div>Empowering <span><img"));
        assert!(html.contains("background-color: #dea584;"));
        assert!(html.contains("<span>Rust</span>"));
        assert!(html.contains("<span>90000</span>"));
        assert!(html.contains("<span>12000</span>"));
        assert!(!html.contains("display: none;"));
    }

    #[test]
    fn test_render_card_hides_empty_blocks() {
        let details = RepoDetails::default();

        let html = render_card(&details, &EmojiMap::new(), &LanguageColors::new());

        assert!(html.contains("<div></div>"));
        assert_eq!(html.matches("display: none;").count(), 3);
    }

    #[test]
    fn test_render_card_unknown_language_color() {
        let details = RepoDetails {
            language: Some("Brainfuck".to_string()),
            stargazers_count: 1,
            ..Default::default()
        };

        let html = render_card(&details, &EmojiMap::new(), &LanguageColors::new());

        assert!(html.contains("background-color: ;"));
        assert!(html.contains("<span>Brainfuck</span>"));
        assert_eq!(html.matches("display: none;").count(), 1);
    }
}
