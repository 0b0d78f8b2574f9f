//! Base action scoring

use common::models::ActionKind;

/// Map an action to its base point value.
///
/// Exhaustive match: a new `ActionKind` variant without a point value is a
/// compile error, never a silent zero award.
pub fn action_base_xp(kind: ActionKind) -> i64 {
    match kind {
        ActionKind::CreateThread => 100,
        ActionKind::PostReply => 20,
        ActionKind::ReceiveLike => 10,
        ActionKind::ReceiveThank => 20,
        ActionKind::ThreadPinned => 200,
        ActionKind::HotThreadBonus => 50,
        ActionKind::ViralThreadBonus => 100,
        ActionKind::FirstReplyBonus => 10,
        ActionKind::ThreadStarterBonus => 25,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_values() {
        assert_eq!(action_base_xp(ActionKind::CreateThread), 100);
        assert_eq!(action_base_xp(ActionKind::PostReply), 20);
        assert_eq!(action_base_xp(ActionKind::ReceiveLike), 10);
        assert_eq!(action_base_xp(ActionKind::ThreadPinned), 200);
        assert_eq!(action_base_xp(ActionKind::ThreadStarterBonus), 25);
    }

    #[test]
    fn test_all_actions_award_positive_xp() {
        let kinds = [
            ActionKind::CreateThread,
            ActionKind::PostReply,
            ActionKind::ReceiveLike,
            ActionKind::ReceiveThank,
            ActionKind::ThreadPinned,
            ActionKind::HotThreadBonus,
            ActionKind::ViralThreadBonus,
            ActionKind::FirstReplyBonus,
            ActionKind::ThreadStarterBonus,
        ];
        for kind in kinds {
            assert!(action_base_xp(kind) > 0, "{:?} must award XP", kind);
        }
    }
}
