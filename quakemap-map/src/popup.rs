use quakemap_feeds::quake::EarthquakeFeature;

/// Popup body shown when an earthquake marker is clicked
pub fn popup_html(quake: &EarthquakeFeature) -> String {
    let place = quake.place.as_deref().unwrap_or("Unknown");
    format!(
        "Magnitude: <b>{}</b><br>Depth <b>{}</b><br>Location: <b>{}</b>",
        quake.magnitude,
        quake.depth_km,
        escape_html(place)
    )
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
