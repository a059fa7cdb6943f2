use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};

use iconpack_catalog::CollectionCatalog;
use iconpack_core::SelectionStore;

use crate::form::{self, SettingsFormView};
use crate::state::AppState;

pub fn routes<C: CollectionCatalog + 'static>() -> Router<AppState<C>> {
    Router::new().route("/", get(index))
}

async fn index<C: CollectionCatalog + 'static>(State(state): State<AppState<C>>) -> Response {
    let collections = match state.catalog.list_collections().await {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to fetch catalog collections: {}", e);
            return (
                StatusCode::BAD_GATEWAY,
                Html(render_error_page(&e.to_string())),
            )
                .into_response();
        }
    };

    let current = match state.selection_store.get(&state.pack_id) {
        Ok(s) => s,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_error_page(&e.to_string())),
            )
                .into_response();
        }
    };

    let view = form::render(current.as_ref(), &collections);
    Html(render_settings_page(&state.pack_id, &view)).into_response()
}

/// Escape a value for interpolation into HTML text or a double-quoted
/// attribute. Catalog names and categories come from an untrusted remote.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_error_page(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>Iconpack Settings</title></head>
<body>
    <h1>Icon Collections</h1>
    <p class="error">Could not load the collection list: {message}</p>
    <p>The remote catalog is unavailable. Reload to try again.</p>
</body>
</html>"#,
        message = escape_html(message),
    )
}

fn render_settings_page(pack_id: &str, view: &SettingsFormView) -> String {
    let checkboxes: String = view
        .collections
        .iter()
        .map(|option| {
            format!(
                r#"<li class="collection" data-label="{label}">
                    <label>
                        <input type="checkbox" name="collections" value="{id}"{checked}>
                        {label}
                    </label>
                    <a href="{href}" target="_blank">See icons</a>
                </li>"#,
                id = escape_html(&option.id),
                label = escape_html(&option.label),
                checked = if option.checked { " checked" } else { "" },
                href = escape_html(&option.href),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Iconpack Settings - {pack_id}</title>
</head>
<body>
    <h1>Icon Collections</h1>
    <p>Select the collections which are going to provide the pack of icons.</p>

    <input type="text" id="filter" placeholder="{placeholder}">

    <form id="settings-form">
        <ul id="collections">
            {checkboxes}
        </ul>
        <button type="submit">Save</button>
    </form>
    <div id="status"></div>

    <script>
    document.getElementById('filter').addEventListener('input', (e) => {{
        const needle = e.target.value.toLowerCase();
        document.querySelectorAll('#collections .collection').forEach((item) => {{
            const match = item.dataset.label.toLowerCase().includes(needle);
            item.style.display = match ? '' : 'none';
        }});
    }});

    document.getElementById('settings-form').addEventListener('submit', async (e) => {{
        e.preventDefault();
        const selected = Array.from(
            document.querySelectorAll('input[name="collections"]:checked')
        ).map((input) => input.value);
        const response = await fetch('/settings', {{
            method: 'POST',
            headers: {{'Content-Type': 'application/json'}},
            body: JSON.stringify({{collections: selected}}),
        }});
        const result = await response.json();
        document.getElementById('status').textContent =
            response.ok ? result.message : 'Save failed';
    }});
    </script>
</body>
</html>"##,
        pack_id = pack_id,
        placeholder = view.search.placeholder,
        checkboxes = checkboxes,
    )
}
