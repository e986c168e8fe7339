use std::sync::Arc;

use uuid::Uuid;

use crate::dto::notification_dto::NotificationQuery;
use crate::dto::ApiResponse;
use crate::models::notification::Notification;
use crate::repositories::NotificationRepository;
use crate::utils::errors::{not_found_error, AppResult};

pub struct NotificationController {
    notifications: Arc<dyn NotificationRepository>,
}

impl NotificationController {
    pub fn new(notifications: Arc<dyn NotificationRepository>) -> Self {
        Self { notifications }
    }

    pub async fn list(&self, user_id: Uuid, query: NotificationQuery) -> AppResult<ApiResponse<Vec<Notification>>> {
        let items = self.notifications.list_for_user(user_id, query.unread_only).await?;
        Ok(ApiResponse::success(items))
    }

    pub async fn mark_read(&self, id: Uuid, user_id: Uuid) -> AppResult<ApiResponse<Notification>> {
        let notification = self
            .notifications
            .mark_read(id, user_id)
            .await?
            .ok_or_else(|| not_found_error("Notification", &id.to_string()))?;
        Ok(ApiResponse::success(notification))
    }

    pub async fn mark_all_read(&self, user_id: Uuid) -> AppResult<ApiResponse<u64>> {
        let updated = self.notifications.mark_all_read(user_id).await?;
        Ok(ApiResponse::success_with_message(
            updated,
            format!("{} notificaciones marcadas como leídas", updated),
        ))
    }
}
