use std::sync::Arc;

use chrono::Utc;
use poem::web::Data;
use poem_openapi::{payload::Json, OpenApi, Tags};
use tracing::debug;
use uuid::Uuid;

use crate::{
    core::{
        db::begin_write,
        utils::non_empty,
        validation::{normalize_mobile, normalize_pan, ValidationError},
    },
    model::user::User,
    repository::{
        manager::get_active_manager_by_id,
        user::{
            create_user, get_active_user_by_id, get_all_user, soft_delete_user,
            update_user_manager, UserSelector,
        },
    },
    schema::{
        common::{
            BadRequestResponse, InternalServerErrorResponse, MessageResponse, NotFoundResponse,
        },
        user::{
            CreateUserRequest, CreateUserResponse, CreateUserResponses, DeleteUserRequest,
            DeleteUserResponses, DetailUser, GetUsersRequest, GetUsersResponse, GetUsersResponses,
            UpdateStatus, UpdateUserRequest, UpdateUserResponse, UpdateUserResponses,
            UpdateUserResult,
        },
    },
    AppState,
};

#[derive(Tags)]
enum ApiUserTags {
    User,
}

pub struct ApiUser;

#[OpenApi]
impl ApiUser {
    #[oai(path = "/create_user", method = "post", tag = "ApiUserTags::User")]
    async fn create_user_api(
        &self,
        Json(json): Json<CreateUserRequest>,
        state: Data<&Arc<AppState>>,
    ) -> CreateUserResponses {
        // Validate request body
        let (full_name, mob_num, pan_num, manager_id) = match (
            non_empty(json.full_name),
            non_empty(json.mob_num),
            non_empty(json.pan_num),
            non_empty(json.manager_id),
        ) {
            (Some(a), Some(b), Some(c), Some(d)) => (a, b, c, d),
            _ => {
                return CreateUserResponses::BadRequest(Json(BadRequestResponse::new(
                    ValidationError::MissingFields,
                )))
            }
        };
        let mob_num = match normalize_mobile(&mob_num) {
            Ok(val) => val,
            Err(err) => {
                return CreateUserResponses::BadRequest(Json(BadRequestResponse::new(err)))
            }
        };
        let pan_num = match normalize_pan(&pan_num) {
            Ok(val) => val,
            Err(err) => {
                return CreateUserResponses::BadRequest(Json(BadRequestResponse::new(err)))
            }
        };

        // Begin db transaction
        let mut tx = match begin_write(&state.db).await {
            Ok(val) => val,
            Err(err) => {
                return CreateUserResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user",
                        "create_user_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        // Check manager
        let manager = match get_active_manager_by_id(&mut tx, &manager_id).await {
            Ok(val) => val,
            Err(err) => {
                return CreateUserResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user",
                        "create_user_api",
                        "get_active_manager_by_id",
                        &err.to_string(),
                    ),
                ));
            }
        };
        if manager.is_none() {
            return CreateUserResponses::BadRequest(Json(BadRequestResponse::new(
                ValidationError::InactiveManager,
            )));
        }

        // Insert user
        let now = Utc::now();
        let new_user = User {
            user_id: Uuid::now_v7().to_string(),
            full_name,
            mob_num,
            pan_num,
            manager_id,
            created_at: now,
            updated_at: now,
            is_active: true,
        };
        if let Err(err) = create_user(&mut tx, &new_user).await {
            return CreateUserResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.user",
                    "create_user_api",
                    "create_user",
                    &err.to_string(),
                ),
            ));
        }

        if let Err(err) = tx.commit().await {
            return CreateUserResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.user",
                    "create_user_api",
                    "commit to database",
                    &err.to_string(),
                ),
            ));
        }
        debug!(user_id = %new_user.user_id, "user created");

        CreateUserResponses::Created(Json(CreateUserResponse {
            message: "User created successfully".to_string(),
            user_id: new_user.user_id,
        }))
    }

    #[oai(path = "/get_users", method = "post", tag = "ApiUserTags::User")]
    async fn get_users_api(
        &self,
        Json(json): Json<GetUsersRequest>,
        state: Data<&Arc<AppState>>,
    ) -> GetUsersResponses {
        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return GetUsersResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user",
                        "get_users_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_all_user(
            &mut tx,
            non_empty(json.user_id),
            non_empty(json.mob_num),
            non_empty(json.manager_id),
        )
        .await
        {
            Ok(val) => val,
            Err(err) => {
                return GetUsersResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user",
                        "get_users_api",
                        "get_all_user",
                        &err.to_string(),
                    ),
                ))
            }
        };

        GetUsersResponses::Ok(Json(GetUsersResponse {
            users: data.into_iter().map(DetailUser::from).collect(),
        }))
    }

    #[oai(path = "/delete_user", method = "post", tag = "ApiUserTags::User")]
    async fn delete_user_api(
        &self,
        Json(json): Json<DeleteUserRequest>,
        state: Data<&Arc<AppState>>,
    ) -> DeleteUserResponses {
        // user_id wins over mob_num
        let selector = match (non_empty(json.user_id), non_empty(json.mob_num)) {
            (Some(user_id), _) => UserSelector::UserId(user_id),
            (None, Some(mob_num)) => UserSelector::MobNum(mob_num),
            (None, None) => {
                return DeleteUserResponses::BadRequest(Json(BadRequestResponse::new(
                    ValidationError::MissingSelector,
                )))
            }
        };

        // Begin db transaction
        let mut tx = match begin_write(&state.db).await {
            Ok(val) => val,
            Err(err) => {
                return DeleteUserResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user",
                        "delete_user_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        // soft delete user
        let now = Utc::now();
        let changes = match soft_delete_user(&mut tx, &selector, &now).await {
            Ok(val) => val,
            Err(err) => {
                return DeleteUserResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user",
                        "delete_user_api",
                        "soft_delete_user",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if changes == 0 {
            return DeleteUserResponses::NotFound(Json(NotFoundResponse::default()));
        }
        if let Err(err) = tx.commit().await {
            return DeleteUserResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.user",
                    "delete_user_api",
                    "commit to database",
                    &err.to_string(),
                ),
            ));
        }
        debug!(?selector, changes, "user soft deleted");

        DeleteUserResponses::Ok(Json(MessageResponse {
            message: "User deleted successfully".to_string(),
        }))
    }

    #[oai(path = "/update_user", method = "post", tag = "ApiUserTags::User")]
    async fn update_user_api(
        &self,
        Json(json): Json<UpdateUserRequest>,
        state: Data<&Arc<AppState>>,
    ) -> UpdateUserResponses {
        // Validate request body
        let user_ids = match json.user_ids {
            Some(val) if !val.is_empty() => val,
            _ => {
                return UpdateUserResponses::BadRequest(Json(BadRequestResponse::new(
                    ValidationError::EmptyUserIds,
                )))
            }
        };
        let update_data = json.update_data.unwrap_or_default();
        let full_name = non_empty(update_data.full_name);
        let mob_num = non_empty(update_data.mob_num);
        let pan_num = non_empty(update_data.pan_num);
        let manager_id = non_empty(update_data.manager_id);
        if full_name.is_none() && mob_num.is_none() && pan_num.is_none() && manager_id.is_none() {
            return UpdateUserResponses::BadRequest(Json(BadRequestResponse::new(
                ValidationError::EmptyUpdateData,
            )));
        }
        let mob_num = match mob_num.as_deref().map(normalize_mobile).transpose() {
            Ok(val) => val,
            Err(err) => {
                return UpdateUserResponses::BadRequest(Json(BadRequestResponse::new(err)))
            }
        };
        let pan_num = match pan_num.as_deref().map(normalize_pan).transpose() {
            Ok(val) => val,
            Err(err) => {
                return UpdateUserResponses::BadRequest(Json(BadRequestResponse::new(err)))
            }
        };

        // Begin db transaction
        let mut tx = match begin_write(&state.db).await {
            Ok(val) => val,
            Err(err) => {
                return UpdateUserResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user",
                        "update_user_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        // Check manager once for the whole batch
        if let Some(manager_id) = &manager_id {
            let manager = match get_active_manager_by_id(&mut tx, manager_id).await {
                Ok(val) => val,
                Err(err) => {
                    return UpdateUserResponses::InternalServerError(Json(
                        InternalServerErrorResponse::new(
                            "route.user",
                            "update_user_api",
                            "get_active_manager_by_id",
                            &err.to_string(),
                        ),
                    ));
                }
            };
            if manager.is_none() {
                return UpdateUserResponses::BadRequest(Json(BadRequestResponse::new(
                    ValidationError::InactiveManager,
                )));
            }
        }

        let manager_only = full_name.is_none() && mob_num.is_none() && pan_num.is_none();
        let mut results: Vec<UpdateUserResult> = vec![];
        for user_id in user_ids {
            let user = match get_active_user_by_id(&mut tx, &user_id).await {
                Ok(val) => val,
                Err(err) => {
                    return UpdateUserResponses::InternalServerError(Json(
                        InternalServerErrorResponse::new(
                            "route.user",
                            "update_user_api",
                            "get_active_user_by_id",
                            &err.to_string(),
                        ),
                    ))
                }
            };
            let Some(mut user) = user else {
                results.push(UpdateUserResult {
                    user_id,
                    status: UpdateStatus::NotFound,
                    new_user_id: None,
                });
                continue;
            };
            let now = Utc::now();

            // manager only, update the row in place
            if let Some(manager_id) = manager_id.as_ref().filter(|_| manager_only) {
                if let Err(err) = update_user_manager(&mut tx, &mut user, manager_id, &now).await
                {
                    return UpdateUserResponses::InternalServerError(Json(
                        InternalServerErrorResponse::new(
                            "route.user",
                            "update_user_api",
                            "update_user_manager",
                            &err.to_string(),
                        ),
                    ));
                }
                results.push(UpdateUserResult {
                    user_id,
                    status: UpdateStatus::Updated,
                    new_user_id: None,
                });
                continue;
            }

            // otherwise retire the row and insert its replacement
            if let Err(err) =
                soft_delete_user(&mut tx, &UserSelector::UserId(user.user_id.clone()), &now).await
            {
                return UpdateUserResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user",
                        "update_user_api",
                        "soft_delete_user",
                        &err.to_string(),
                    ),
                ));
            }
            let new_user = User {
                user_id: Uuid::now_v7().to_string(),
                full_name: full_name.clone().unwrap_or(user.full_name),
                mob_num: mob_num.clone().unwrap_or(user.mob_num),
                pan_num: pan_num.clone().unwrap_or(user.pan_num),
                manager_id: manager_id.clone().unwrap_or(user.manager_id),
                created_at: now,
                updated_at: now,
                is_active: true,
            };
            if let Err(err) = create_user(&mut tx, &new_user).await {
                return UpdateUserResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user",
                        "update_user_api",
                        "create_user",
                        &err.to_string(),
                    ),
                ));
            }
            results.push(UpdateUserResult {
                user_id,
                status: UpdateStatus::Replaced,
                new_user_id: Some(new_user.user_id),
            });
        }

        if let Err(err) = tx.commit().await {
            return UpdateUserResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.user",
                    "update_user_api",
                    "commit to database",
                    &err.to_string(),
                ),
            ));
        }
        debug!(count = results.len(), "user batch updated");

        UpdateUserResponses::Ok(Json(UpdateUserResponse {
            message: "User(s) updated successfully".to_string(),
            results,
        }))
    }
}
