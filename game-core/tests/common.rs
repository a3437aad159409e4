#![allow(dead_code)]

use chrono::NaiveDate;
use game_core::parse_date;
use game_types::{Golfer, UserStats};
use std::collections::BTreeMap;

/// Creates a golfer with the attributes the comparator looks at
pub fn create_test_golfer(id: &str, name: &str, age: u32, turned_pro: u32, country: &str) -> Golfer {
    Golfer {
        id: id.to_string(),
        player_id: name.to_lowercase().replace(' ', "-"),
        name: name.to_string(),
        first_name: None,
        last_name: None,
        headshot_url: None,
        age: Some(age),
        turned_pro: Some(turned_pro),
        country: Some(country.to_string()),
        height: None,
        education: None,
        is_active: Some(true),
        has_videos: true,
    }
}

pub fn tiger_woods() -> Golfer {
    Golfer {
        height: Some("6'1\"".to_string()),
        education: Some("Stanford University".to_string()),
        ..create_test_golfer("1", "Tiger Woods", 48, 1996, "USA")
    }
}

pub fn rory_mcilroy() -> Golfer {
    Golfer {
        height: Some("5'9\"".to_string()),
        ..create_test_golfer("2", "Rory McIlroy", 35, 2007, "NIR")
    }
}

pub fn jordan_spieth() -> Golfer {
    Golfer {
        height: Some("6'1\"".to_string()),
        education: Some("University of Texas".to_string()),
        ..create_test_golfer("3", "Jordan Spieth", 31, 2012, "USA")
    }
}

/// A small catalog where one golfer has no videos and can never be the target
pub fn create_test_catalog() -> Vec<Golfer> {
    let mut no_videos = create_test_golfer("4", "Fred Couples", 65, 1980, "USA");
    no_videos.has_videos = false;
    no_videos.is_active = Some(false);

    vec![tiger_woods(), rory_mcilroy(), jordan_spieth(), no_videos]
}

pub fn day(value: &str) -> NaiveDate {
    parse_date(value).expect("valid test date")
}

/// Stats of a player who has been playing for a while
pub fn create_veteran_stats(last_played: &str) -> UserStats {
    UserStats {
        user_id: "veteran".to_string(),
        games_played: 10,
        games_won: 7,
        current_streak: 3,
        max_streak: 5,
        guess_distribution: BTreeMap::from([(1, 1), (2, 2), (3, 3), (4, 1), (5, 0), (6, 0)]),
        last_played_date: Some(day(last_played)),
    }
}
