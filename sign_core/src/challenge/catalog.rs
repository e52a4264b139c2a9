use sign_schema::{ChallengeRound, Difficulty, RoundKind, Vowel};

pub const CHALLENGE_MENU_SCREEN: &str = "challenges_menu";

const ORDINALS: [&str; 5] = ["first", "second", "third", "fourth", "fifth"];

/// Letter order for each tier.
pub fn sequence(difficulty: Difficulty) -> [Vowel; 5] {
    use Vowel::*;
    match difficulty {
        Difficulty::Easy => [E, U, A, I, O],
        Difficulty::Intermediate => [I, E, O, A, U],
        Difficulty::Hard => [E, A, U, I, O],
    }
}

pub fn prompt_asset(vowel: Vowel) -> String {
    format!("assets/hands/letter{}.png", vowel.letter())
}

pub fn round_screen(difficulty: Difficulty, index: usize) -> String {
    let ordinal = ORDINALS.get(index).copied().unwrap_or("extra");
    format!("{ordinal}_screen_{}", difficulty.display_name().to_lowercase())
}

/// The standard five rounds of a challenge tier.
///
/// Timed rounds confirm on the first matching frame: a 3 s hold cannot fit
/// inside a 3 s budget.
pub fn rounds(difficulty: Difficulty) -> Vec<ChallengeRound> {
    let letters = sequence(difficulty);
    let kind = if difficulty.is_typed() {
        RoundKind::Typed
    } else {
        RoundKind::Gesture
    };
    let hold_secs = if difficulty.time_budget_secs() > 0 {
        0.0
    } else {
        sign_schema::DEFAULT_HOLD_SECS
    };

    letters
        .iter()
        .enumerate()
        .map(|(i, &target)| ChallengeRound {
            target,
            kind,
            prompt_asset: prompt_asset(target),
            success_screen: if i + 1 < letters.len() {
                round_screen(difficulty, i + 1)
            } else {
                CHALLENGE_MENU_SCREEN.to_string()
            },
            time_budget_secs: difficulty.time_budget_secs(),
            hold_secs,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easy_rounds_are_typed_and_untimed() {
        let rounds = rounds(Difficulty::Easy);
        let letters: Vec<Vowel> = rounds.iter().map(|r| r.target).collect();
        assert_eq!(letters, vec![Vowel::E, Vowel::U, Vowel::A, Vowel::I, Vowel::O]);
        assert!(rounds.iter().all(|r| r.kind == RoundKind::Typed && !r.is_timed()));
        assert_eq!(rounds[0].prompt_asset, "assets/hands/letterE.png");
        assert_eq!(rounds[0].success_screen, "second_screen_easy");
        assert_eq!(rounds[4].success_screen, CHALLENGE_MENU_SCREEN);
    }

    #[test]
    fn test_timed_tiers_use_their_budget() {
        for (difficulty, budget) in [(Difficulty::Intermediate, 5), (Difficulty::Hard, 3)] {
            let rounds = rounds(difficulty);
            assert_eq!(rounds.len(), 5);
            assert!(rounds
                .iter()
                .all(|r| r.kind == RoundKind::Gesture && r.time_budget_secs == budget && r.hold_secs == 0.0));
        }
        assert_eq!(rounds(Difficulty::Hard)[0].target, Vowel::E);
        assert_eq!(rounds(Difficulty::Intermediate)[0].target, Vowel::I);
    }
}
