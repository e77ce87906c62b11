use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    database::MongoDB,
    models::{EmailRequest, UpdateUserRequest, User},
    services::user_service,
    utils::AppError,
};

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// GET /api/users/allusers - Lists every user document
#[utoipa::path(
    get,
    path = "/api/users/allusers",
    tag = "Users",
    responses(
        (status = 200, description = "All user documents", body = [User]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn all_users(db: web::Data<MongoDB>) -> Result<HttpResponse, AppError> {
    log::info!("📋 GET /api/users/allusers");

    let users = user_service::list_users(&db).await?;

    log::info!("✅ Listed {} users", users.len());
    Ok(HttpResponse::Ok().json(users))
}

/// POST /api/users/getuser - Looks up a single user by email
#[utoipa::path(
    post,
    path = "/api/users/getuser",
    tag = "Users",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "The matching user", body = User),
        (status = 400, description = "Email missing from payload", body = ErrorResponse),
        (status = 404, description = "No user with that email", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_user(
    db: web::Data<MongoDB>,
    request: web::Json<EmailRequest>,
) -> Result<HttpResponse, AppError> {
    let email = request
        .into_inner()
        .email
        .ok_or(AppError::MissingField("email"))?;

    log::info!("🔍 POST /api/users/getuser - {}", email);

    let user = user_service::get_user(&db, &email).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// POST /api/users/adduser - Creates a new user
#[utoipa::path(
    post,
    path = "/api/users/adduser",
    tag = "Users",
    request_body = User,
    responses(
        (status = 201, description = "The created user", body = User),
        (status = 400, description = "Payload rejected by the store", body = ErrorResponse),
        (status = 409, description = "A user with that email already exists", body = ErrorResponse)
    )
)]
pub async fn add_user(
    db: web::Data<MongoDB>,
    request: web::Json<User>,
) -> Result<HttpResponse, AppError> {
    let user = request.into_inner();

    log::info!("📝 POST /api/users/adduser - {}", user.email);

    let created = user_service::create_user(&db, user).await?;

    log::info!("✅ User created: {}", created.email);
    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/users/updateuser - Merge-updates a user located by email
#[utoipa::path(
    put,
    path = "/api/users/updateuser",
    tag = "Users",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "The user after the update", body = User),
        (status = 400, description = "Email missing or payload rejected", body = ErrorResponse),
        (status = 404, description = "No user with that email", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn update_user(
    db: web::Data<MongoDB>,
    request: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let email = request.email.ok_or(AppError::MissingField("email"))?;

    log::info!("🔧 PUT /api/users/updateuser - {}", email);

    let updated = user_service::update_user(&db, &email, request.fields).await?;

    log::info!("✅ User updated: {}", updated.email);
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/users/deleteuser - Removes a user by email
#[utoipa::path(
    delete,
    path = "/api/users/deleteuser",
    tag = "Users",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Deletion acknowledged", body = MessageResponse),
        (status = 400, description = "Email missing from payload", body = ErrorResponse),
        (status = 404, description = "No user with that email", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    db: web::Data<MongoDB>,
    request: web::Json<EmailRequest>,
) -> Result<HttpResponse, AppError> {
    let email = request
        .into_inner()
        .email
        .ok_or(AppError::MissingField("email"))?;

    log::info!("🗑️  DELETE /api/users/deleteuser - {}", email);

    user_service::delete_user(&db, &email).await?;

    log::info!("✅ User deleted: {}", email);
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}

/// Fallback for every unmatched method/path combination.
pub async fn route_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "Route not found"
    }))
}
