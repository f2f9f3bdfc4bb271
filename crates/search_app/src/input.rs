use search_core::Msg;

/// What one line typed at the prompt asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Intents(Vec<Msg>),
    ListMethods,
    Help,
    Quit,
}

/// Maps a prompt line to user intents.
///
/// Plain text is typed into the query box and submitted with Enter. Lines starting
/// with `:` are shell commands: `:method <token>`, `:methods`, `:search`, `:help`, `:quit`.
pub fn parse_line(line: &str) -> Input {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(command) = line.trim_start().strip_prefix(':') else {
        return Input::Intents(vec![Msg::QueryChanged(line.to_string()), Msg::EnterPressed]);
    };

    let mut parts = command.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default();
    let arg = parts.next().map(str::trim).unwrap_or_default();
    match name {
        "method" | "m" if !arg.is_empty() => {
            Input::Intents(vec![Msg::MethodSelected(arg.to_string())])
        }
        "methods" | "method" | "m" => Input::ListMethods,
        "search" | "s" => Input::Intents(vec![Msg::SearchSubmitted]),
        "quit" | "q" | "exit" => Input::Quit,
        _ => Input::Help,
    }
}
