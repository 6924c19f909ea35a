use axum::{
    extract::State,
    response::Html,
};
use crate::core::controller::AppState;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
const CONSOLE_TEMPLATE: &str = include_str!("../../templates/console.html");

pub const PAGE_TITLE: &str = "Gestionnaire de Livres";

fn escape_html(value: &str) -> String {
    value.chars().fold(String::with_capacity(value.len()), |mut out, c| {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
        out
    })
}

// render fills the {{key}} placeholders of a page template with escaped values.
fn render(template: &str, values: &[(&str, &str)]) -> String {
    values.iter().fold(template.to_string(), |page, (key, value)| {
        page.replace(format!("{{{{{}}}}}", key).as_str(), escape_html(value).as_str())
    })
}

pub(crate) async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render(INDEX_TEMPLATE, &[
        ("page_title", PAGE_TITLE),
        ("branch_id", state.config.branch_id.as_str()),
    ]))
}

pub(crate) async fn console() -> Html<String> {
    Html(render(CONSOLE_TEMPLATE, &[("page_title", PAGE_TITLE)]))
}
