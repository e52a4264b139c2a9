use log::info;
use sign_schema::{AccountProgress, Achievement, CompletionReport, Difficulty, Notification};

use crate::error::StoreError;
use crate::store::SharedStore;

/// Award Completionist when every flag is set and it is not held yet.
/// Returns true if it was awarded by this call.
pub fn award_completionist(record: &mut AccountProgress) -> bool {
    if record.has_achievement(Achievement::Completionist) || !record.everything_done() {
        return false;
    }
    record.unlock(Achievement::Completionist)
}

/// Credit a finished challenge in one load-modify-save cycle.
pub fn complete_challenge(store: &SharedStore, difficulty: Difficulty) -> Result<CompletionReport, StoreError> {
    let (report, _) = store.update(|record| credit(record, difficulty))?;
    info!(
        "{} challenge complete (first={}, completionist={})",
        difficulty.display_name(),
        report.first_completion,
        report.completionist_unlocked
    );
    Ok(report)
}

fn credit(record: &mut AccountProgress, difficulty: Difficulty) -> CompletionReport {
    let first_completion = !record.challenge_done(difficulty);
    record.set_challenge_done(difficulty, true);

    let mut notifications = vec![Notification::ChallengeComplete(difficulty)];
    if first_completion {
        let achievement = Achievement::first_completion(difficulty);
        record.unlock(achievement);
        notifications.push(Notification::AchievementUnlocked(achievement));
    }

    let completionist_unlocked = award_completionist(record);
    if completionist_unlocked {
        notifications.push(Notification::AchievementUnlocked(Achievement::Completionist));
    }

    CompletionReport {
        difficulty,
        first_completion,
        completionist_unlocked,
        notifications,
    }
}

#[cfg(test)]
mod tests {
    use sign_schema::Vowel;

    use super::*;

    fn all_but(difficulty: Difficulty) -> AccountProgress {
        let mut record = AccountProgress::new("tester");
        for v in Vowel::ALL {
            record.set_letter_done(v, true);
        }
        record.intro_status = true;
        for d in Difficulty::ALL {
            record.set_challenge_done(d, d != difficulty);
        }
        record
    }

    #[test]
    fn test_repeat_completion_has_no_achievement() {
        let mut record = AccountProgress::default();
        record.easy_challenge = true;
        let report = credit(&mut record, Difficulty::Easy);
        assert!(!report.first_completion);
        assert_eq!(report.notifications, vec![Notification::ChallengeComplete(Difficulty::Easy)]);
    }

    #[test]
    fn test_last_flag_awards_completionist_after_first_completion() {
        let mut record = all_but(Difficulty::Hard);
        let report = credit(&mut record, Difficulty::Hard);
        assert!(report.first_completion);
        assert!(report.completionist_unlocked);
        assert_eq!(
            report.notifications,
            vec![
                Notification::ChallengeComplete(Difficulty::Hard),
                Notification::AchievementUnlocked(Achievement::FirstHard),
                Notification::AchievementUnlocked(Achievement::Completionist),
            ]
        );
    }

    #[test]
    fn test_completionist_awarded_once() {
        let mut record = all_but(Difficulty::Easy);
        record.unlock(Achievement::Completionist);
        let report = credit(&mut record, Difficulty::Easy);
        assert!(!report.completionist_unlocked);
        assert!(!award_completionist(&mut record));
    }
}
