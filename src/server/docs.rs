//! Human-browsable API documentation, served at `/docs`.
//!
//! The page is rendered from the same route metadata the router registers,
//! so it stays a description of the CRUD contract rather than a separately
//! maintained document. Purely a convenience surface; the API works without
//! it.

use axum::response::Html;

/// Metadata for one documented route.
pub struct RouteDoc {
    pub method: &'static str,
    pub path: &'static str,
    pub summary: &'static str,
    /// JSON request body shape, if the route takes one
    pub request: Option<&'static str>,
    pub responses: &'static str,
}

/// The documented CRUD surface, in route-table order.
pub const ROUTES: &[RouteDoc] = &[
    RouteDoc {
        method: "GET",
        path: "/todos",
        summary: "List all todos in stored order",
        request: None,
        responses: "200 JSON array; 500 on storage error",
    },
    RouteDoc {
        method: "GET",
        path: "/todos/{id}",
        summary: "Fetch a single todo by id",
        request: None,
        responses: "200 JSON object; 404 if no such id; 500 on storage error",
    },
    RouteDoc {
        method: "POST",
        path: "/todos",
        summary: "Create a todo; id and createdAt are server-assigned",
        request: Some(r#"{"title": string, "description": string?}"#),
        responses: "201 JSON object; 500 on storage error",
    },
    RouteDoc {
        method: "PUT",
        path: "/todos/{id}",
        summary: "Partially update a todo; the stored id cannot be changed",
        request: Some(r#"{"title": string?, "description": string?, "completed": bool?}"#),
        responses: "200 JSON object; 404 if no such id; 500 on storage error",
    },
    RouteDoc {
        method: "DELETE",
        path: "/todos/{id}",
        summary: "Delete a todo",
        request: None,
        responses: "204 empty; 404 if no such id; 500 on storage error",
    },
];

/// Render the documentation page from the route table.
pub fn render_html() -> String {
    let mut rows = String::new();
    for route in ROUTES {
        rows.push_str(&format!(
            "<tr><td><code>{} {}</code></td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            route.method,
            route.path,
            route.summary,
            route
                .request
                .map(|r| format!("<code>{}</code>", escape(r)))
                .unwrap_or_else(|| "&mdash;".to_string()),
            route.responses,
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>todofile API</title>
<style>
body {{ font-family: sans-serif; max-width: 60em; margin: 2em auto; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ border: 1px solid #ccc; padding: 0.5em; text-align: left; }}
code {{ background: #f4f4f4; padding: 0.1em 0.3em; }}
</style>
</head>
<body>
<h1>todofile API</h1>
<p>CRUD over a single collection of todo records. All bodies are JSON;
errors are <code>{{"error": &lt;message&gt;}}</code>. Any origin may call
the API.</p>
<table>
<tr><th>Route</th><th>Summary</th><th>Request body</th><th>Responses</th></tr>
{rows}</table>
<h2>Todo record</h2>
<pre><code>{{
  "id": 1,
  "title": "Buy milk",
  "description": "",
  "completed": false,
  "createdAt": "2024-01-01T00:00:00Z"
}}</code></pre>
</body>
</html>
"#
    )
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// GET /docs
pub async fn serve_docs() -> Html<String> {
    Html(render_html())
}
