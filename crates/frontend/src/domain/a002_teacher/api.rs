use contracts::domain::a002_teacher::aggregate::{CreateTeacherDto, Teacher, TeacherListQuery};
use contracts::domain::common::{MessageResponse, PaginatedResponse, Pagination};

use crate::shared::api_client::{ApiClient, ApiError};

pub const TEACHERS_PATH: &str = "/teachers";
pub const CREATE_TEACHER_PATH: &str = "/teachers/newTeacher";

/// Fetch one page of teachers together with the server's paging metadata
pub async fn fetch_teachers(
    api: &ApiClient,
    page: u32,
    limit: u32,
) -> Result<(Vec<Teacher>, Pagination), ApiError> {
    let query = serde_qs::to_string(&TeacherListQuery { page, limit })
        .map_err(|e| ApiError::Decode(format!("Failed to build query: {}", e)))?;
    let path = format!("{}?{}", TEACHERS_PATH, query);

    let response: PaginatedResponse<Teacher> = api.get_json(&path).await?;
    Ok(response.into_parts())
}

/// Create a new teacher
pub async fn create_teacher(
    api: &ApiClient,
    dto: &CreateTeacherDto,
) -> Result<MessageResponse, ApiError> {
    api.post_create(CREATE_TEACHER_PATH, dto).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{mock_client, MockTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_teachers_sends_page_and_limit() {
        let mock = MockTransport::new();
        mock.on_json(
            "GET",
            TEACHERS_PATH,
            200,
            json!({
                "data": [{"_id": "t-1", "code": "GV01"}],
                "pagination": {"currentPage": 3, "totalPages": 4, "totalTeachers": 31, "limit": 10}
            }),
        );
        let client = mock_client(mock.clone());

        let (teachers, pagination) = fetch_teachers(&client, 3, 10).await.unwrap();

        assert_eq!(teachers.len(), 1);
        assert_eq!(pagination.current_page, 3);
        assert_eq!(pagination.total_teachers, 31);
        assert_eq!(
            mock.requests()[0].url,
            "http://api.test/teachers?page=3&limit=10"
        );
    }

    #[tokio::test]
    async fn test_fetch_teachers_defaults_missing_envelope_parts() {
        let mock = MockTransport::new();
        mock.on_json("GET", TEACHERS_PATH, 200, json!({}));
        let client = mock_client(mock);

        let (teachers, pagination) = fetch_teachers(&client, 1, 10).await.unwrap();
        assert!(teachers.is_empty());
        assert_eq!(pagination, Pagination::default());
    }
}
