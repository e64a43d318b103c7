#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    New,
    Activate(Option<String>),
    Show,
    Moves(Option<String>),
    Layout(Option<String>),
    Options,
    SetOption {
        name: String,
        value: Option<String>,
    },
    Quit,
    Unknown(String),
}

pub fn parse_session_command(line: &str) -> Option<SessionCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    let arg = || parts.get(1).map(|v| (*v).to_string());

    let cmd = match parts[0] {
        "new" | "reset" => SessionCommand::New,
        "activate" | "click" => SessionCommand::Activate(arg()),
        "show" | "d" => SessionCommand::Show,
        "moves" => SessionCommand::Moves(arg()),
        "layout" => SessionCommand::Layout(arg()),
        "options" => SessionCommand::Options,
        "setoption" => match parse_setoption(&parts[1..]) {
            Some((name, value)) => SessionCommand::SetOption { name, value },
            None => SessionCommand::Unknown(trimmed.to_string()),
        },
        "quit" | "exit" => SessionCommand::Quit,
        _ => SessionCommand::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}

/// Split `name <words...> [value <words...>]`.
fn parse_setoption(parts: &[&str]) -> Option<(String, Option<String>)> {
    if parts.first() != Some(&"name") {
        return None;
    }
    let rest = &parts[1..];
    let value_at = rest.iter().position(|p| *p == "value");
    let (name, value) = match value_at {
        Some(i) => (&rest[..i], Some(rest[i + 1..].join(" "))),
        None => (rest, None),
    };
    if name.is_empty() {
        return None;
    }
    Some((name.join(" "), value.filter(|v| !v.is_empty())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_is_none() {
        assert_eq!(parse_session_command("   "), None);
    }

    #[test]
    fn test_activate_aliases() {
        assert_eq!(
            parse_session_command("activate e2"),
            Some(SessionCommand::Activate(Some("e2".to_string())))
        );
        assert_eq!(
            parse_session_command("click 52"),
            Some(SessionCommand::Activate(Some("52".to_string())))
        );
        assert_eq!(
            parse_session_command("click"),
            Some(SessionCommand::Activate(None))
        );
    }

    #[test]
    fn test_setoption_multiword_name() {
        assert_eq!(
            parse_session_command("setoption name Echo Board value true"),
            Some(SessionCommand::SetOption {
                name: "Echo Board".to_string(),
                value: Some("true".to_string()),
            })
        );
        assert_eq!(
            parse_session_command("setoption name Coordinates"),
            Some(SessionCommand::SetOption {
                name: "Coordinates".to_string(),
                value: None,
            })
        );
    }

    #[test]
    fn test_malformed_setoption_is_unknown() {
        assert!(matches!(
            parse_session_command("setoption value 3"),
            Some(SessionCommand::Unknown(_))
        ));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(
            parse_session_command("castle"),
            Some(SessionCommand::Unknown("castle".to_string()))
        );
    }
}
