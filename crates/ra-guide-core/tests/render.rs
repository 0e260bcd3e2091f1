use std::collections::BTreeMap;

use ra_api_client::types::{Achievement, GameExtended};
use ra_guide_core::blocks::{achievement_block, render_blocks};
use ra_guide_core::GuideOutput;

fn sample_achievement(id: u32, title: &str, points: u32, badge: &str, description: &str) -> Achievement {
    Achievement {
        id,
        title: title.to_string(),
        description: description.to_string(),
        points,
        true_ratio: 0,
        author: None,
        badge_name: badge.to_string(),
        num_awarded: 0,
        num_awarded_hardcore: 0,
        display_order: 0,
        date_created: None,
        date_modified: None,
        mem_addr: None,
    }
}

fn sample_game(achievements: Vec<Achievement>) -> GameExtended {
    GameExtended {
        id: 14402,
        title: "Ratchet & Clank".to_string(),
        console_id: 21,
        console_name: "PlayStation 2".to_string(),
        forum_topic_id: None,
        image_icon: None,
        image_title: None,
        image_ingame: None,
        image_box_art: None,
        publisher: None,
        developer: None,
        genre: None,
        released: None,
        num_achievements: achievements.len() as u32,
        num_distinct_players: 0,
        achievements: achievements
            .into_iter()
            .map(|achievement| (achievement.id, achievement))
            .collect::<BTreeMap<u32, Achievement>>(),
    }
}

#[test]
fn block_renders_the_exact_guide_snippet() {
    let achievement = sample_achievement(9, "Liftoff", 5, "250341", "Leave the first planet.");

    let expected = r#"<img align="left" width="72" height="72" src="https://media.retroachievements.org/Badge/250341">

```
Liftoff [5 Points]
Leave the first planet.
```
"#;
    assert_eq!(achievement_block(&achievement), expected);
}

#[test]
fn single_point_renders_singular() {
    let achievement = sample_achievement(9, "Liftoff", 1, "250341", "Leave the first planet.");
    let block = achievement_block(&achievement);
    assert!(block.contains("Liftoff [1 Point]"), "got: {block}");
}

#[test]
fn zero_points_renders_plural() {
    let achievement = sample_achievement(9, "Liftoff", 0, "250341", "Leave the first planet.");
    let block = achievement_block(&achievement);
    assert!(block.contains("Liftoff [0 Points]"), "got: {block}");
}

#[test]
fn blocks_concatenate_in_input_order() {
    let first = sample_achievement(100, "Gadget Collector", 25, "250352", "Collect every gadget.");
    let second = sample_achievement(9, "Liftoff", 1, "250341", "Leave the first planet.");

    let expected = r#"<img align="left" width="72" height="72" src="https://media.retroachievements.org/Badge/250352">

```
Gadget Collector [25 Points]
Collect every gadget.
```

<img align="left" width="72" height="72" src="https://media.retroachievements.org/Badge/250341">

```
Liftoff [1 Point]
Leave the first planet.
```
"#;
    assert_eq!(render_blocks([&first, &second]), expected);
}

#[test]
fn empty_list_renders_nothing() {
    let none: [&Achievement; 0] = [];
    assert_eq!(render_blocks(none), "");
}

#[test]
fn output_summarizes_the_game() {
    let game = sample_game(vec![
        sample_achievement(100, "Gadget Collector", 25, "250352", "Collect every gadget."),
        sample_achievement(9, "Liftoff", 1, "250341", "Leave the first planet."),
    ]);

    let output = GuideOutput::from_game(&game);
    assert_eq!(output.game_id, 14402);
    assert_eq!(output.title, "Ratchet & Clank");
    assert_eq!(output.console_name, "PlayStation 2");
    assert_eq!(output.achievement_count, 2);
    assert_eq!(output.total_points, 26);
    // Map iteration puts achievement 9 ahead of achievement 100.
    let liftoff = output.markdown.find("Liftoff").expect("first block present");
    let gadget = output
        .markdown
        .find("Gadget Collector")
        .expect("second block present");
    assert!(liftoff < gadget);
}

#[test]
fn output_serializes_for_the_json_renderer() {
    let game = sample_game(vec![sample_achievement(
        9,
        "Liftoff",
        1,
        "250341",
        "Leave the first planet.",
    )]);

    let value = serde_json::to_value(GuideOutput::from_game(&game)).expect("output serializes");
    assert_eq!(value["achievement_count"], 1);
    assert_eq!(value["total_points"], 1);
    assert!(value["markdown"]
        .as_str()
        .expect("markdown is a string")
        .starts_with("<img"));
}
