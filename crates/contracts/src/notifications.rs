use serde::{Deserialize, Serialize};

/// Number of notifications the page embeds, newest first
pub const NOTIFICATIONS_LIMIT: usize = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationDto {
    pub id: i64,
    pub message: String,
    /// ISO datetime
    pub created_at: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub link: Option<String>,
}

/// Notifications embedded in the page for the signed-in user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationsData {
    #[serde(default)]
    pub notifications: Vec<NotificationDto>,
    /// Server-side unread count; may exceed what is embedded
    #[serde(default)]
    pub unread_count: Option<usize>,
}

impl NotificationsData {
    pub fn visible(&self) -> &[NotificationDto] {
        let end = self.notifications.len().min(NOTIFICATIONS_LIMIT);
        &self.notifications[..end]
    }

    pub fn unread(&self) -> usize {
        self.unread_count
            .unwrap_or_else(|| self.notifications.iter().filter(|n| !n.is_read).count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: i64, is_read: bool) -> NotificationDto {
        NotificationDto {
            id,
            message: format!("Notification {}", id),
            created_at: "2024-03-15T09:00:00Z".into(),
            is_read,
            link: None,
        }
    }

    #[test]
    fn test_unread_falls_back_to_embedded_list() {
        let data = NotificationsData {
            notifications: vec![note(1, false), note(2, true), note(3, false)],
            unread_count: None,
        };
        assert_eq!(data.unread(), 2);

        let data = NotificationsData {
            unread_count: Some(40),
            ..data
        };
        assert_eq!(data.unread(), 40);
    }

    #[test]
    fn test_visible_is_capped() {
        let data = NotificationsData {
            notifications: (0..20).map(|i| note(i, true)).collect(),
            unread_count: None,
        };
        assert_eq!(data.visible().len(), NOTIFICATIONS_LIMIT);
        assert_eq!(data.visible()[0].id, 0);
    }

    #[test]
    fn test_parse_minimal_island() {
        let data: NotificationsData = serde_json::from_str(
            r#"{"notifications":[{"id":1,"message":"Kai liked your artwork","created_at":"2024-03-15T09:00:00Z"}]}"#,
        )
        .unwrap();
        assert_eq!(data.notifications.len(), 1);
        assert!(!data.notifications[0].is_read);
        assert_eq!(data.unread(), 1);
    }
}
