use poem_openapi::{payload::Json, ApiResponse, Enum, Object};
use serde::Deserialize;

use super::common::{
    BadRequestResponse, InternalServerErrorResponse, MessageResponse, NotFoundResponse,
};
use crate::{core::utils::datetime_to_string, model::user::User};

#[derive(Object, Deserialize, Debug)]
pub struct DetailUser {
    pub user_id: String,
    pub full_name: String,
    pub mob_num: String,
    pub pan_num: String,
    pub manager_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub is_active: bool,
}

impl From<User> for DetailUser {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            full_name: user.full_name,
            mob_num: user.mob_num,
            pan_num: user.pan_num,
            manager_id: user.manager_id,
            created_at: datetime_to_string(user.created_at),
            updated_at: datetime_to_string(user.updated_at),
            is_active: user.is_active,
        }
    }
}

#[derive(Object, Deserialize, Debug)]
pub struct CreateUserRequest {
    pub full_name: Option<String>,
    pub mob_num: Option<String>,
    pub pan_num: Option<String>,
    pub manager_id: Option<String>,
}

#[derive(Object, Deserialize, Debug)]
pub struct CreateUserResponse {
    pub message: String,
    pub user_id: String,
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "create_user_bad_request")]
pub enum CreateUserResponses {
    #[oai(status = 201)]
    Created(Json<CreateUserResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

fn create_user_bad_request(err: poem::Error) -> CreateUserResponses {
    CreateUserResponses::BadRequest(Json(BadRequestResponse::new(err)))
}

#[derive(Object, Deserialize, Debug)]
pub struct GetUsersRequest {
    pub user_id: Option<String>,
    pub mob_num: Option<String>,
    pub manager_id: Option<String>,
}

#[derive(Object, Deserialize, Debug)]
pub struct GetUsersResponse {
    pub users: Vec<DetailUser>,
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "get_users_bad_request")]
pub enum GetUsersResponses {
    #[oai(status = 200)]
    Ok(Json<GetUsersResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

fn get_users_bad_request(err: poem::Error) -> GetUsersResponses {
    GetUsersResponses::BadRequest(Json(BadRequestResponse::new(err)))
}

#[derive(Object, Deserialize, Debug)]
pub struct DeleteUserRequest {
    pub user_id: Option<String>,
    pub mob_num: Option<String>,
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "delete_user_bad_request")]
pub enum DeleteUserResponses {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

fn delete_user_bad_request(err: poem::Error) -> DeleteUserResponses {
    DeleteUserResponses::BadRequest(Json(BadRequestResponse::new(err)))
}

#[derive(Object, Deserialize, Debug, Default)]
pub struct UpdateUserData {
    pub full_name: Option<String>,
    pub mob_num: Option<String>,
    pub pan_num: Option<String>,
    pub manager_id: Option<String>,
}

#[derive(Object, Deserialize, Debug)]
pub struct UpdateUserRequest {
    pub user_ids: Option<Vec<String>>,
    pub update_data: Option<UpdateUserData>,
}

#[derive(Enum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[oai(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UpdateStatus {
    /// Manager reassigned on the existing row.
    Updated,
    /// Existing row retired and a new row inserted.
    Replaced,
    /// No active user with this id.
    NotFound,
}

#[derive(Object, Deserialize, Debug)]
pub struct UpdateUserResult {
    pub user_id: String,
    pub status: UpdateStatus,
    pub new_user_id: Option<String>,
}

#[derive(Object, Deserialize, Debug)]
pub struct UpdateUserResponse {
    pub message: String,
    pub results: Vec<UpdateUserResult>,
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "update_user_bad_request")]
pub enum UpdateUserResponses {
    #[oai(status = 200)]
    Ok(Json<UpdateUserResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

fn update_user_bad_request(err: poem::Error) -> UpdateUserResponses {
    UpdateUserResponses::BadRequest(Json(BadRequestResponse::new(err)))
}
