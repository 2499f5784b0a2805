use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tl::ParserOptions;

use crate::model::UserEducationalUpdate;

// The profile page embeds the user's record in an inline script, roughly:
//
// <script><!--
//     window.user = $.extend(window.user || {}, {
//         ...
//         history:[{"scolaryear":2021,...}]
//     });
// //--></script>
static HISTORY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)window\.user.+?history:\s*(\[\{"scolaryear":.+?\}\])\s*\}\);"#).unwrap()
});

/// Extracts the educational history from a profile page.
pub fn parse_educational_history(html: &str) -> Result<Vec<UserEducationalUpdate>, ParseError> {
    let dom = tl::parse(html, ParserOptions::default())?;
    let parser = dom.parser();

    let from_scripts = dom.query_selector("script").and_then(|mut scripts| {
        scripts.find_map(|handle| {
            let script = handle.get(parser)?.inner_html(parser);
            capture_history(&script).map(str::to_owned)
        })
    });

    // Comments inside a script are not always kept in its inner HTML, fall back to the
    // raw page in that case.
    let history = match from_scripts {
        Some(history) => Cow::Owned(history),
        None => Cow::Borrowed(capture_history(html).ok_or(ParseError::MissingScript)?),
    };

    Ok(serde_json::from_str(&history)?)
}

fn capture_history(text: &str) -> Option<&str> {
    HISTORY_RE
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|history| history.as_str())
}

#[derive(Debug, Error)]
pub enum ParseError {
    /// HTML is not in a valid format.
    #[error("could not parse HTML due to invalid format")]
    InvalidHtmlFormat(#[from] tl::errors::ParseError),
    /// The page does not carry the script holding the history.
    /// The most likely cause of this issue is the intranet being updated.
    #[error("expected script was not found on the intranet")]
    MissingScript,
    #[error("could not decode the scraped history")]
    InvalidJson(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Jane Doe</title></head>
<body>
<div id="profil">Jane Doe</div>
<script type="text/javascript">var unrelated = [1, 2, 3];</script>
<script type="text/javascript">
<!--
    window.user = $.extend(window.user || {}, {
        login: "jane.doe@epitech.eu",
        history:[{"scolaryear":2021,"date":"2021-08-30 10:00:00","location":"FR/RUN","promo":2025,"course_code":"bachelor/classic","semester":3,"special":null,"modifier":"admin","comment":"","course_title":"Bachelor"},{"scolaryear":2020,"date":"2020-09-01 09:00:00","location":"FR/RUN","promo":2025,"course_code":"bachelor/classic","semester":1,"special":null,"modifier":"admin","comment":"first year","course_title":"Bachelor"}]
    });
//-->
</script>
</body>
</html>"#;

    #[test]
    fn scrapes_history() {
        let history = parse_educational_history(PROFILE).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].scolaryear, 2021);
        assert_eq!(history[0].course_code, "bachelor/classic");
        assert_eq!(history[1].comment, "first year");
        assert_eq!(history[1].semester, 1);
    }

    #[test]
    fn missing_script_is_reported() {
        let html = "<html><body><script>var x = 1;</script></body></html>";
        assert!(matches!(
            parse_educational_history(html),
            Err(ParseError::MissingScript)
        ));
    }

    #[test]
    fn malformed_history_is_reported() {
        let html = r#"<script>window.user = {
            history:[{"scolaryear":2021,}]
        });</script>"#;
        assert!(matches!(
            parse_educational_history(html),
            Err(ParseError::InvalidJson(_))
        ));
    }
}
