use sign_schema::{AccountProgress, Difficulty};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierStatus {
    Locked,
    Open,
    Completed,
}

impl TierStatus {
    pub fn is_playable(self) -> bool {
        !matches!(self, TierStatus::Locked)
    }
}

/// Each tier opens once the one before it is done; finished tiers stay playable.
pub fn tier_status(record: &AccountProgress, difficulty: Difficulty) -> TierStatus {
    if record.challenge_done(difficulty) {
        return TierStatus::Completed;
    }
    match difficulty.prerequisite() {
        Some(required) if !record.challenge_done(required) => TierStatus::Locked,
        _ => TierStatus::Open,
    }
}

pub fn availability(record: &AccountProgress) -> [(Difficulty, TierStatus); 3] {
    Difficulty::ALL.map(|d| (d, tier_status(record, d)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_account_only_easy_open() {
        let record = AccountProgress::default();
        assert_eq!(
            availability(&record),
            [
                (Difficulty::Easy, TierStatus::Open),
                (Difficulty::Intermediate, TierStatus::Locked),
                (Difficulty::Hard, TierStatus::Locked),
            ]
        );
    }

    #[test]
    fn test_tiers_unlock_in_order() {
        let mut record = AccountProgress::default();
        record.easy_challenge = true;
        assert_eq!(tier_status(&record, Difficulty::Easy), TierStatus::Completed);
        assert_eq!(tier_status(&record, Difficulty::Intermediate), TierStatus::Open);
        assert_eq!(tier_status(&record, Difficulty::Hard), TierStatus::Locked);
        assert!(!tier_status(&record, Difficulty::Hard).is_playable());
    }
}
