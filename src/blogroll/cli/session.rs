use blogroll::validation::PostForm;

/// One line of `blogroll session` input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SessionEvent {
    Category(String),
    Search(String),
    Submit(PostForm),
    Show,
}

/// Parses a session line. Blank lines and `#` comments yield `Ok(None)`.
pub(crate) fn parse_event(line: &str) -> Result<Option<SessionEvent>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let event = match command {
        "category" | "c" => {
            if rest.is_empty() {
                return Err("category needs a label".to_string());
            }
            SessionEvent::Category(rest.to_string())
        }
        "search" | "s" => SessionEvent::Search(rest.to_string()),
        "submit" => {
            let form: PostForm = serde_json::from_str(rest)
                .map_err(|e| format!("submit expects a JSON object: {}", e))?;
            SessionEvent::Submit(form)
        }
        "show" => SessionEvent::Show,
        other => return Err(format!("unknown event '{}'", other)),
    };
    Ok(Some(event))
}
