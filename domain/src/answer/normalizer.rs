//! Lenient answer normalization.
//!
//! Canonical answers carry formatting noise (italics markup, quotes, leading
//! articles) and players type with arbitrary case and spacing. Both sides are
//! reduced to the same canonical form before comparison.

/// Markup tags removed from answers
const MARKUP_TAGS: [&str; 2] = ["<i>", "</i>"];

/// Leading articles, each stripped at most once and in this order
const LEADING_ARTICLES: [&str; 2] = ["a ", "an "];

/// Normalize an answer for comparison.
///
/// Steps, each applied to the output of the previous one:
///
/// 1. lower-case
/// 2. remove every `"`
/// 3. remove `<i>` / `</i>` tags
/// 4. strip a leading `"a "`, then a leading `"an "`
/// 5. remove every space
/// 6. remove tags again (step 5 can join `"< i>"` into `"<i>"`)
/// 7. trim surrounding whitespace
///
/// The result is idempotent: `normalize(&normalize(s)) == normalize(s)`.
///
/// # Examples
///
/// ```
/// use trivia_domain::normalize;
///
/// assert_eq!(normalize("<i>Paris</i>"), "paris");
/// assert_eq!(normalize("a Paris"), "paris");
/// assert_eq!(normalize("El e PHANT"), "elephant");
/// ```
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase().replace('"', "");
    let untagged = strip_markup(lowered);
    let without_article = strip_leading_articles(untagged.trim_start());
    let compact: String = without_article.chars().filter(|c| *c != ' ').collect();
    strip_markup(compact).trim().to_string()
}

/// Judge a player's answer against the canonical answer.
pub fn judge(input: &str, canonical: &str) -> bool {
    normalize(input) == normalize(canonical)
}

fn strip_markup(mut text: String) -> String {
    // Removing one tag can expose another ("<<i>i>"), so repeat until stable.
    while let Some(tag) = MARKUP_TAGS.iter().find(|tag| text.contains(**tag)) {
        text = text.replace(tag, "");
    }
    text
}

fn strip_leading_articles(text: &str) -> &str {
    LEADING_ARTICLES.iter().fold(text, |rest, article| {
        rest.strip_prefix(article).unwrap_or(rest)
    })
}
