pub mod model;
pub mod profile;
pub mod result;

pub use model::{ChallengeRound, Difficulty, RoundKind, Vowel, DEFAULT_HOLD_SECS, VOWEL_COUNT};
pub use profile::{AccountProgress, Achievement, DEFAULT_VOLUME};
pub use result::{CompletionReport, Notification, RoundOutcome, RoundResult};

#[cfg(test)]
mod tests {
    use super::model::*;
    use super::profile::*;

    #[test]
    fn test_account_serialization_uses_record_field_names() {
        let mut account = AccountProgress::new("juan");
        account.e_status = true;
        account.hard_challenge = true;
        account.unlock(Achievement::FirstHard);

        let json = serde_json::to_string(&account).expect("Failed to serialize account");

        assert!(json.contains("\"eStatus\":true"));
        assert!(json.contains("\"hardChallenge\":true"));
        assert!(json.contains("\"introStatus\":false"));

        let restored: AccountProgress = serde_json::from_str(&json).expect("Failed to deserialize account");
        assert_eq!(restored, account);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let restored: AccountProgress =
            serde_json::from_str(r#"{"username":"maria","aStatus":true}"#).expect("Failed to deserialize");

        assert_eq!(restored.username, "maria");
        assert!(restored.a_status);
        assert!(!restored.easy_challenge);
        assert_eq!(restored.music_volume, DEFAULT_VOLUME);
        assert_eq!(restored.sfx_volume, DEFAULT_VOLUME);
        assert!(restored.achievements.is_empty());
    }

    #[test]
    fn test_vowel_index_mapping() {
        for (i, v) in Vowel::ALL.iter().enumerate() {
            assert_eq!(v.index(), i);
            assert_eq!(Vowel::from_index(i), Some(*v));
        }
        assert_eq!(Vowel::from_index(5), None);
        assert_eq!(Vowel::from_char('e'), Some(Vowel::E));
        assert_eq!(Vowel::from_char('x'), None);
    }

    #[test]
    fn test_everything_done_requires_every_flag() {
        let mut account = AccountProgress::default();
        for v in Vowel::ALL {
            account.set_letter_done(v, true);
        }
        account.intro_status = true;
        account.set_challenge_done(Difficulty::Easy, true);
        account.set_challenge_done(Difficulty::Intermediate, true);
        assert!(!account.everything_done());

        account.set_challenge_done(Difficulty::Hard, true);
        assert!(account.everything_done());
    }

    #[test]
    fn test_round_hold_defaults_when_absent() {
        let round: ChallengeRound = serde_json::from_str(
            r#"{"target":"E","kind":"gesture","prompt_asset":"letterE.jpg","success_screen":"next"}"#,
        )
        .expect("Failed to deserialize round");

        assert_eq!(round.hold_secs, DEFAULT_HOLD_SECS);
        assert_eq!(round.time_budget_secs, 0);
        assert!(!round.is_timed());
    }
}
