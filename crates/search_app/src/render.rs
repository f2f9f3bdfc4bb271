use std::fmt::Write;

use search_core::{MethodOption, ResultsPanel, SessionViewModel};

pub const HELP: &str = "Type a query and press Enter to search.\n\
:methods          list search methods\n\
:method <token>   select a search method\n\
:search           search again with the current query\n\
:quit             leave";

/// Renders the session as plain text for the terminal shell.
pub fn render(view: &SessionViewModel, options: &[MethodOption]) -> String {
    let method_label = options
        .iter()
        .find(|option| option.token == view.method_token)
        .map_or(view.method_token.as_str(), |option| option.label.as_str());

    let mut out = String::new();
    let _ = writeln!(out, "Method: {method_label}");

    match &view.results {
        ResultsPanel::Hidden => {}
        ResultsPanel::Loading => {
            let _ = writeln!(out, "Searching...");
        }
        ResultsPanel::Error(message) => {
            let _ = writeln!(out, "Error: {message}");
        }
        ResultsPanel::NoResults { query } => {
            let _ = writeln!(out, "No results for \"{query}\".");
        }
        ResultsPanel::Articles(articles) => {
            for (index, article) in articles.iter().enumerate() {
                let _ = writeln!(out, "{:>2}. {}", index + 1, article.title);
                if !article.summary.is_empty() {
                    let _ = writeln!(out, "    {}", article.summary);
                }
                let _ = writeln!(out, "    Read more -> {}", article.link);
            }
        }
    }
    out
}

pub fn render_methods(options: &[MethodOption], selected: &str) -> String {
    let mut out = String::new();
    for option in options {
        let marker = if option.token == selected { '*' } else { ' ' };
        let _ = writeln!(out, "{marker} {:<10} {}", option.token, option.label);
    }
    out
}
