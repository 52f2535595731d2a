use axum::response::Html;

use crate::flash::Notice;
use crate::models::profile::Profile;
use crate::views::{escape, layout};

pub fn profile_list_page(profiles: &[Profile], notice: Option<Notice>) -> Html<String> {
    let body = if profiles.is_empty() {
        r#"<h1>Runners</h1><p>No runners yet. <a href="/profiles/new">Be the first.</a></p>"#
            .to_string()
    } else {
        let rows: String = profiles.iter().map(profile_row).collect();
        format!(
            "<h1>Runners</h1>\n<table>\n<tr><th>Name</th><th>Age</th><th>City</th>\
<th>Pace</th><th>Favorite distance</th><th>Bio</th><th></th></tr>\n{rows}</table>"
        )
    };

    layout("Runners", notice, &body)
}

fn profile_row(p: &Profile) -> String {
    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{} /km</td><td>{}</td><td>{}</td>\
<td><a href=\"/matches?for={}\">Find matches</a></td></tr>\n",
        escape(&p.name),
        escape(&p.age),
        escape(&p.city),
        p.pace_display(),
        escape(&p.fav_distance),
        escape(&p.bio),
        p.id,
    )
}

const BIO_HELPER_SCRIPT: &str = r#"<script>
document.getElementById('suggest-bio').addEventListener('click', async () => {
  const keywords = document.getElementById('keywords').value;
  const res = await fetch('/ai/generate_bio', {
    method: 'POST',
    headers: {'Content-Type': 'application/x-www-form-urlencoded'},
    body: new URLSearchParams({keywords}),
  });
  const text = await res.text();
  if (res.ok) { document.getElementById('bio').value = text; } else { alert(text); }
});
</script>"#;

pub fn new_profile_page(notice: Option<Notice>) -> Html<String> {
    let body = format!(
        r#"<h1>Create your runner profile</h1>
<form method="post" action="/profiles/new">
<label>Name* <input name="name" required></label>
<label>Age <input name="age"></label>
<label>City <input name="city"></label>
<label>Pace* (min/km, e.g. 5:30 or 5.5) <input name="pace" required></label>
<label>Favorite distance <input name="fav_distance" placeholder="5k, 10k, half, marathon"></label>
<label>Keywords for a bio suggestion <input id="keywords" placeholder="trails, coffee"></label>
<button type="button" id="suggest-bio">Suggest bio</button>
<label>Bio <textarea id="bio" name="bio" rows="3"></textarea></label>
<p><button type="submit">Save profile</button></p>
</form>
{BIO_HELPER_SCRIPT}"#
    );

    layout("New profile", notice, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> Profile {
        Profile {
            id: 1_700_000_000_000,
            name: name.to_string(),
            age: "29".to_string(),
            city: "Oslo".to_string(),
            pace: 4.75,
            fav_distance: "10k".to_string(),
            bio: String::new(),
        }
    }

    #[test]
    fn test_list_links_to_matches() {
        let Html(page) = profile_list_page(&[profile("Ana")], None);
        assert!(page.contains("/matches?for=1700000000000"));
        assert!(page.contains("4:45 /km"));
    }

    #[test]
    fn test_list_escapes_names() {
        let Html(page) = profile_list_page(&[profile("<script>")], None);
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<td><script>"));
    }

    #[test]
    fn test_empty_list_invites_first_runner() {
        let Html(page) = profile_list_page(&[], None);
        assert!(page.contains("No runners yet"));
    }

    #[test]
    fn test_form_has_every_field() {
        let Html(page) = new_profile_page(Some(Notice::MissingFields));
        for field in ["name", "age", "city", "pace", "fav_distance", "bio"] {
            assert!(page.contains(&format!(r#"name="{field}""#)), "missing {field}");
        }
        assert!(page.contains("Name and pace are required."));
    }
}
