use game_types::{AttributeOutcome, Golfer, GuessComparison};

/// How far a guessed age may be from the target's and still count as close.
pub const AGE_TOLERANCE: u32 = 2;
/// How far a guessed turned-pro year may be from the target's and still count as close.
pub const TURNED_PRO_TOLERANCE: u32 = 3;

pub struct ScoringEngine;

impl ScoringEngine {
    /// Score every compared attribute of `guessed` against `target`
    pub fn compare_golfers(guessed: &Golfer, target: &Golfer) -> GuessComparison {
        GuessComparison {
            age: compare_numbers(guessed.age, target.age, AGE_TOLERANCE),
            country: compare_exact(guessed.country.as_ref(), target.country.as_ref()),
            height: compare_exact(guessed.height.as_ref(), target.height.as_ref()),
            turned_pro: compare_numbers(guessed.turned_pro, target.turned_pro, TURNED_PRO_TOLERANCE),
            education: compare_exact(guessed.education.as_ref(), target.education.as_ref()),
            is_active: compare_exact(guessed.is_active.as_ref(), target.is_active.as_ref()),
        }
    }
}

/// Compare two numeric attributes.
///
/// `Higher` and `Lower` say where the guess sits relative to the target: a
/// guessed value below the target yields `Lower` and one above it `Higher`.
pub fn compare_numbers(guessed: Option<u32>, target: Option<u32>, tolerance: u32) -> AttributeOutcome {
    let (Some(guessed), Some(target)) = (guessed, target) else {
        return AttributeOutcome::None;
    };

    if guessed == target {
        AttributeOutcome::Exact
    } else if guessed.abs_diff(target) <= tolerance {
        AttributeOutcome::Close
    } else if guessed < target {
        AttributeOutcome::Lower
    } else {
        AttributeOutcome::Higher
    }
}

/// Compare two categorical attributes; there is no partial credit.
pub fn compare_exact<T: PartialEq + ?Sized>(guessed: Option<&T>, target: Option<&T>) -> AttributeOutcome {
    match (guessed, target) {
        (Some(guessed), Some(target)) if guessed == target => AttributeOutcome::Exact,
        _ => AttributeOutcome::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn golfer(id: &str, age: Option<u32>, turned_pro: Option<u32>, country: &str) -> Golfer {
        Golfer {
            id: id.to_string(),
            player_id: format!("player-{}", id),
            name: format!("Golfer {}", id),
            first_name: None,
            last_name: None,
            headshot_url: None,
            age,
            turned_pro,
            country: Some(country.to_string()),
            height: Some("6'1\"".to_string()),
            education: None,
            is_active: Some(true),
            has_videos: true,
        }
    }

    #[test]
    fn test_equal_numbers_are_exact() {
        for value in [0, 1, 25, 48, 1996] {
            assert_eq!(compare_numbers(Some(value), Some(value), 2), AttributeOutcome::Exact);
        }
    }

    #[test]
    fn test_difference_at_tolerance_is_close() {
        assert_eq!(compare_numbers(Some(46), Some(48), AGE_TOLERANCE), AttributeOutcome::Close);
        assert_eq!(compare_numbers(Some(50), Some(48), AGE_TOLERANCE), AttributeOutcome::Close);
        assert_eq!(
            compare_numbers(Some(1993), Some(1996), TURNED_PRO_TOLERANCE),
            AttributeOutcome::Close
        );
        assert_eq!(
            compare_numbers(Some(1999), Some(1996), TURNED_PRO_TOLERANCE),
            AttributeOutcome::Close
        );
    }

    #[test]
    fn test_one_beyond_tolerance_gives_direction() {
        assert_eq!(compare_numbers(Some(45), Some(48), AGE_TOLERANCE), AttributeOutcome::Lower);
        assert_eq!(compare_numbers(Some(51), Some(48), AGE_TOLERANCE), AttributeOutcome::Higher);
        assert_eq!(
            compare_numbers(Some(1992), Some(1996), TURNED_PRO_TOLERANCE),
            AttributeOutcome::Lower
        );
        assert_eq!(
            compare_numbers(Some(2000), Some(1996), TURNED_PRO_TOLERANCE),
            AttributeOutcome::Higher
        );
    }

    #[test]
    fn test_guess_far_below_target_is_lower() {
        // Rory (35) guessed while the answer is Tiger (48)
        assert_eq!(compare_numbers(Some(35), Some(48), 2), AttributeOutcome::Lower);
    }

    #[test]
    fn test_missing_number_is_none() {
        assert_eq!(compare_numbers(None, Some(48), 2), AttributeOutcome::None);
        assert_eq!(compare_numbers(Some(48), None, 2), AttributeOutcome::None);
        assert_eq!(compare_numbers(None, None, 2), AttributeOutcome::None);
    }

    #[test]
    fn test_zero_is_a_real_value() {
        assert_eq!(compare_numbers(Some(0), Some(0), 2), AttributeOutcome::Exact);
        assert_eq!(compare_numbers(Some(0), Some(1), 2), AttributeOutcome::Close);
    }

    #[test]
    fn test_exact_match_attributes() {
        let usa = "USA".to_string();
        let nir = "NIR".to_string();
        assert_eq!(compare_exact(Some(&usa), Some(&usa)), AttributeOutcome::Exact);
        assert_eq!(compare_exact(Some(&nir), Some(&usa)), AttributeOutcome::None);
        assert_eq!(compare_exact(None, Some(&usa)), AttributeOutcome::None);
        assert_eq!(compare_exact(Some(&usa), None), AttributeOutcome::None);
    }

    #[test]
    fn test_inactive_golfers_match_each_other() {
        assert_eq!(compare_exact(Some(&false), Some(&false)), AttributeOutcome::Exact);
        assert_eq!(compare_exact(Some(&false), Some(&true)), AttributeOutcome::None);
    }

    #[test]
    fn test_compare_golfers() {
        let tiger = golfer("1", Some(48), Some(1996), "USA");
        let rory = golfer("2", Some(35), Some(2007), "NIR");
        let jordan = golfer("3", Some(31), None, "USA");

        let rory_vs_tiger = ScoringEngine::compare_golfers(&rory, &tiger);
        assert_eq!(rory_vs_tiger.age, AttributeOutcome::Lower);
        assert_eq!(rory_vs_tiger.turned_pro, AttributeOutcome::Higher);
        assert_eq!(rory_vs_tiger.country, AttributeOutcome::None);
        assert_eq!(rory_vs_tiger.height, AttributeOutcome::Exact);
        assert_eq!(rory_vs_tiger.education, AttributeOutcome::None);
        assert_eq!(rory_vs_tiger.is_active, AttributeOutcome::Exact);

        let jordan_vs_tiger = ScoringEngine::compare_golfers(&jordan, &tiger);
        assert_eq!(jordan_vs_tiger.turned_pro, AttributeOutcome::None);
        assert_eq!(jordan_vs_tiger.country, AttributeOutcome::Exact);
    }

    #[test]
    fn test_comparison_is_deterministic() {
        let tiger = golfer("1", Some(48), Some(1996), "USA");
        let rory = golfer("2", Some(35), Some(2007), "NIR");
        assert_eq!(
            ScoringEngine::compare_golfers(&rory, &tiger),
            ScoringEngine::compare_golfers(&rory, &tiger)
        );
    }
}
