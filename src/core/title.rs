use regex::{Captures, Regex};
use std::sync::OnceLock;

/// A title split into the part shared by every edition and the extras
/// (remaster notes, featured artists, live tags...) stripped from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleParts {
    pub safe_title: String,
    pub extras: Vec<String>,
}

fn bracket_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\(\[]([^\(\)\[\]]*)[\)\]]").expect("valid bracket pattern"))
}

fn suffix_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)\s+-\s+([^-]*\b(?:remaster(?:ed)?|live|acoustic|edit|version|mix|mono|stereo|demo|deluxe|bonus|instrumental)\b[^-]*)$",
        )
        .expect("valid suffix pattern")
    })
}

pub fn split_title(title: &str) -> TitleParts {
    let mut extras = Vec::new();

    let mut safe = title.to_string();

    // 每次只會拿掉最內層的括號，重複到沒有括號為止
    loop {
        let mut matched = false;
        let stripped = bracket_regex()
            .replace_all(&safe, |caps: &Captures| {
                matched = true;
                let inner = caps[1].trim();
                if !inner.is_empty() {
                    extras.push(inner.to_string());
                }
                " "
            })
            .into_owned();
        safe = stripped;
        if !matched {
            break;
        }
    }

    // " - Remastered 2009" 之類的後綴
    let suffix = suffix_regex()
        .captures(&safe)
        .and_then(|caps| Some((caps.get(0)?.start(), caps[1].trim().to_string())));
    if let Some((start, extra)) = suffix {
        extras.push(extra);
        safe.truncate(start);
    }

    let safe_title = safe.split_whitespace().collect::<Vec<_>>().join(" ");
    if safe_title.is_empty() {
        return TitleParts {
            safe_title: title.trim().to_string(),
            extras: Vec::new(),
        };
    }

    TitleParts { safe_title, extras }
}

pub fn safe_title(title: &str) -> String {
    split_title(title).safe_title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_title_is_untouched() {
        let parts = split_title("Paranoid Android");
        assert_eq!(parts.safe_title, "Paranoid Android");
        assert!(parts.extras.is_empty());
    }

    #[test]
    fn test_brackets_are_stripped() {
        let parts = split_title("Get Lucky (feat. Pharrell Williams) [Radio Edit]");
        assert_eq!(parts.safe_title, "Get Lucky");
        assert_eq!(parts.extras, vec!["feat. Pharrell Williams", "Radio Edit"]);
    }

    #[test]
    fn test_nested_brackets_are_stripped() {
        let parts = split_title("Song (Live (2009 Remaster))");
        assert_eq!(parts.safe_title, "Song");
        assert_eq!(parts.extras, vec!["2009 Remaster", "Live"]);

        assert_eq!(safe_title("Track [Deluxe (Bonus [Demo])] Edition"), "Track Edition");
    }

    #[test]
    fn test_dash_suffix_is_stripped() {
        let parts = split_title("Come Together - Remastered 2009");
        assert_eq!(parts.safe_title, "Come Together");
        assert_eq!(parts.extras, vec!["Remastered 2009"]);

        assert_eq!(safe_title("Hey Jude - 2015 Remaster"), "Hey Jude");
    }

    #[test]
    fn test_unrelated_dash_is_kept() {
        assert_eq!(safe_title("Wish You Were Here - Part One"), "Wish You Were Here - Part One");
    }

    #[test]
    fn test_title_made_only_of_extras_falls_back() {
        let parts = split_title("  (Intro)  ");
        assert_eq!(parts.safe_title, "(Intro)");
        assert!(parts.extras.is_empty());
    }
}
