use maud::{html, Markup, PreEscaped, DOCTYPE};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

const BASE_CSS: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; color: #374151; background: #f9fafb; }
header { display: flex; align-items: center; justify-content: space-between; padding: 0.6rem 1.5rem; background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,.12); }
header h3 { margin: 0 0 0 0.5rem; color: #2563eb; }
header nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
a { color: #2563eb; }
.board { display: flex; height: calc(100vh - 52px); }
.sidebar { width: 20rem; background: #fff; border-right: 1px solid #e5e7eb; overflow-y: auto; }
.sidebar.closed { width: 3rem; }
.sidebar .toggle { display: block; padding: 0.5rem; background: #f3f4f6; text-align: center; text-decoration: none; }
.sidebar form { padding: 0.75rem; display: grid; gap: 0.5rem; }
.sidebar ul { list-style: none; margin: 0; padding: 0; }
.sidebar li a { display: block; padding: 0.5rem 0.75rem; border-bottom: 1px solid #e5e7eb; color: inherit; text-decoration: none; font-size: 0.9rem; }
.sidebar li a:hover, .sidebar li.selected a { background: #f3f4f6; }
.sidebar .meta { color: #6b7280; font-size: 0.75rem; }
#map { flex: 1; }
.form-card { max-width: 36rem; margin: 1.5rem auto; background: #fff; border-radius: 1rem; box-shadow: 0 1px 4px rgba(0,0,0,.1); padding: 1.5rem; }
.form-card h1 { text-align: center; color: #2563eb; font-size: 1.5rem; }
.field { margin-bottom: 1rem; }
.field label { display: block; font-weight: 500; }
.field input, .field textarea { width: 100%; padding: 0.5rem; border: 1px solid #d1d5db; border-radius: 0.5rem; }
.required { color: #dc2626; }
.choices { display: flex; gap: 1rem; margin-top: 0.25rem; }
.notice { padding: 0.75rem 1rem; border-radius: 0.5rem; margin-bottom: 1rem; }
.notice.error { background: #fee2e2; color: #991b1b; }
.primary { width: 100%; padding: 0.75rem; border: none; border-radius: 0.5rem; background: #2563eb; color: #fff; font-weight: 500; cursor: pointer; }
.popup img { width: 100%; height: 8rem; object-fit: cover; border-radius: 0.375rem; }
"#;

pub fn desktop_layout(title: &str, with_map: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @if with_map {
                    link rel="stylesheet" href=(LEAFLET_CSS);
                    script src=(LEAFLET_JS) {}
                }
                style { (PreEscaped(BASE_CSS)) }
            }
            body {
                header {
                    div style="display: flex; align-items: center;" {
                        svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="24"
                            height="24"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="#2563eb"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        {
                            path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                            path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                            path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                            path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                        }
                        h3 { "House Board" }
                    }
                    nav {
                        ul {
                            li { a href="/" { "Map" } }
                            li { a href="/add" { "Add listing" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
