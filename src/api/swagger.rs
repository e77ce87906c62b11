use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Directory Service API",
        version = "1.0.0",
        description = "CRUD API over a single user collection keyed by email.\n\n**Schema:** `email` is the only required field; any additional fields supplied at create/update time are stored verbatim.",
        contact(
            name = "User Directory Service Team"
        )
    ),
    paths(
        // Users
        crate::api::users::all_users,
        crate::api::users::get_user,
        crate::api::users::add_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::User,
            crate::models::EmailRequest,
            crate::models::UpdateUserRequest,
            crate::api::users::MessageResponse,
            crate::api::users::ErrorResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "User directory CRUD endpoints, keyed by email."),
        (name = "Health", description = "Health check endpoint for monitoring service status.")
    )
)]
pub struct ApiDoc;
