use axum::response::Html;

use crate::matching::scoring::Match;
use crate::models::profile::Profile;
use crate::views::{escape, layout};

pub fn matches_page(me: &Profile, matches: &[Match]) -> Html<String> {
    let heading = format!(
        "<h1>Matches for {}</h1>\n<p>Pace {} /km · favorite distance {}</p>",
        escape(&me.name),
        me.pace_display(),
        if me.fav_distance.is_empty() {
            "not set".to_string()
        } else {
            escape(&me.fav_distance)
        },
    );

    let list = if matches.is_empty() {
        "<p>No other runners yet.</p>".to_string()
    } else {
        let items: String = matches
            .iter()
            .map(|m| {
                format!(
                    "<li><strong>{}</strong> ({}) · {} /km · {} · score {:.2}</li>\n",
                    escape(&m.profile.name),
                    escape(&m.profile.city),
                    m.profile.pace_display(),
                    escape(&m.profile.fav_distance),
                    m.score,
                )
            })
            .collect();
        format!("<ol>\n{items}</ol>")
    };

    layout("Matches", None, &format!("{heading}\n{list}"))
}
