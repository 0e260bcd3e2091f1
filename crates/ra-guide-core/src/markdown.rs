pub fn badge_image(src: &str) -> String {
    format!("<img align=\"left\" width=\"72\" height=\"72\" src=\"{src}\">")
}

pub fn fenced(body: &str) -> String {
    format!("```\n{body}\n```")
}

pub fn points_label(points: u32) -> &'static str {
    if points == 1 {
        "Point"
    } else {
        "Points"
    }
}
