use axum::response::Html;

use crate::views::layout;

pub fn home_page() -> Html<String> {
    layout(
        "Home",
        None,
        r#"<h1>Runmatch</h1>
<p>Find runners who run like you. Share your pace and favorite distance,
then browse the runners closest to you.</p>
<p><a href="/profiles/new">Create a profile</a> or <a href="/profiles">browse runners</a>.</p>"#,
    )
}
