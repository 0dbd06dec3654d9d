//! Message formatting for console output.

use cursorsync_shared::protocol::PresenceEntry;

/// Format the users of a presence-update for display.
///
/// Users without a position yet are shown with `-`.
pub fn format_presence_update(users: &[PresenceEntry]) -> String {
    if users.is_empty() {
        return "(nobody)".to_string();
    }

    users
        .iter()
        .map(|entry| match entry.position {
            Some(position) => format!("{} ({}, {})", entry.user, position.x, position.y),
            None => format!("{} (-)", entry.user),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cursorsync_shared::protocol::PositionDto;

    #[test]
    fn test_format_presence_update_with_and_without_position() {
        // テスト項目: 位置のあるユーザーとないユーザーが区別して表示される
        // given (前提条件):
        let users = vec![
            PresenceEntry {
                user: "u1".to_string(),
                position: Some(PositionDto { x: 10.0, y: 20.5 }),
            },
            PresenceEntry {
                user: "u2".to_string(),
                position: None,
            },
        ];

        // when (操作):
        let formatted = format_presence_update(&users);

        // then (期待する結果):
        assert_eq!(formatted, "u1 (10, 20.5), u2 (-)");
    }

    #[test]
    fn test_format_presence_update_empty() {
        // テスト項目: 誰もいない場合の表示
        // given (前提条件):

        // when (操作):
        let formatted = format_presence_update(&[]);

        // then (期待する結果):
        assert_eq!(formatted, "(nobody)");
    }
}
