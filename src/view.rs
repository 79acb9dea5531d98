//! Landing page rendering: the lookup form plus optional error and result.
//! Used by: handlers, error.

use axum::response::{Html, IntoResponse, Response};
use serde_json::Value;

use crate::store::AnalyticsRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub error: Option<String>,
    pub result: Option<AnalyticsRecord>,
}

impl ViewState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { error: Some(message.into()), result: None }
    }

    pub fn found(record: AnalyticsRecord) -> Self {
        Self { error: None, result: Some(record) }
    }

    pub fn render(&self) -> String {
        let mut page = String::with_capacity(2048);
        page.push_str(PAGE_HEAD);
        page.push_str(FORM);

        if let Some(error) = &self.error {
            page.push_str(&format!("<p class=\"error\">{}</p>\n", escape_html(error)));
        }

        if let Some(record) = &self.result {
            let title = record.id().unwrap_or("record");
            page.push_str(&format!(
                "<h2>Analytics for {}</h2>\n<table class=\"result\">\n",
                escape_html(title)
            ));
            for (field, value) in record.fields() {
                page.push_str(&format!(
                    "<tr><th>{}</th><td>{}</td></tr>\n",
                    escape_html(field),
                    escape_html(&display_value(value))
                ));
            }
            page.push_str("</table>\n");
        }

        page.push_str(PAGE_TAIL);
        page
    }
}

impl IntoResponse for ViewState {
    fn into_response(self) -> Response {
        Html(self.render()).into_response()
    }
}

const PAGE_HEAD: &str = "<!DOCTYPE html>
<html lang=\"en\">
<head>
<meta charset=\"utf-8\">
<title>Show Results</title>
</head>
<body>
<h1>Show Results</h1>
";

const FORM: &str = "<form method=\"post\" action=\"/show\">
<label>Username <input type=\"text\" name=\"username\" required></label>
<label>Password <input type=\"password\" name=\"password\" required></label>
<label>Metric <input type=\"text\" name=\"metric\" required></label>
<button type=\"submit\">Show</button>
</form>
";

const PAGE_TAIL: &str = "</body>\n</html>\n";

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".into(),
        other => other.to_string(),
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}
