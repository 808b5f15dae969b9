use contracts::domain::a001_teacher_position::aggregate::{
    CreateTeacherPositionDto, TeacherPosition,
};
use contracts::domain::common::{ListResponse, MessageResponse};

use crate::shared::api_client::{ApiClient, ApiError};

pub const POSITIONS_PATH: &str = "/teacherPosition";
pub const CREATE_POSITION_PATH: &str = "/teacherPosition/newTeacherPosition";

/// Fetch all teacher positions
pub async fn fetch_positions(api: &ApiClient) -> Result<Vec<TeacherPosition>, ApiError> {
    let response: ListResponse<TeacherPosition> = api.get_json(POSITIONS_PATH).await?;
    Ok(response.into_items())
}

/// Create a new teacher position
pub async fn create_position(
    api: &ApiClient,
    dto: &CreateTeacherPositionDto,
) -> Result<MessageResponse, ApiError> {
    api.post_create(CREATE_POSITION_PATH, dto).await
}
