use stories_core::{AppViewModel, ItemRowView};

pub const HEADING: &str = "My Hacker Stories";

const HELP: &[&str] = &[
    "Commands:",
    "  <text>         search for <text>",
    "  /edit <text>   change the search term without searching",
    "  /submit        search for the current term",
    "  /dismiss <n>   remove the story at row <n>",
    "  /show          print the list again",
    "  /help          show this help",
    "  /quit          exit",
];

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.items.len() + 4);
    lines.push(HEADING.to_string());
    lines.push(format!("Search: {}", view.editable_term));
    lines.push("-".repeat(40));

    if view.is_error {
        lines.push("Something went wrong ...".to_string());
    }

    if view.is_loading {
        lines.push("Loading...".to_string());
    } else if view.items.is_empty() {
        if !view.is_error {
            lines.push("No stories.".to_string());
        }
    } else {
        lines.extend(view.items.iter().map(format_row));
    }
    lines
}

pub fn help() -> impl Iterator<Item = &'static str> {
    HELP.iter().copied()
}

fn format_row(item: &ItemRowView) -> String {
    let title = if item.title.is_empty() {
        "(untitled)"
    } else {
        item.title.as_str()
    };
    let mut row = format!("[{}] {}", item.row, title);
    if !item.url.is_empty() {
        row.push_str(&format!(" <{}>", item.url));
    }
    row.push_str(&format!(
        " | {} | {} comments | {} points",
        item.author, item.comment_count, item.score
    ));
    row
}
