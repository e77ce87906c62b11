// ==================== USER DIRECTORY OPERATIONS ====================
// All five operations run against the `users` collection. Uniqueness of
// `email` is enforced by the collection's unique index, so create has no
// lookup-before-insert step and cannot race with itself.

use crate::database::{MongoDB, USERS_COLLECTION};
use crate::models::User;
use crate::utils::AppError;
use futures::stream::StreamExt;
use mongodb::bson::{doc, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::ReturnDocument;

/// GET /allusers - Every user document, store-native order.
pub async fn list_users(db: &MongoDB) -> Result<Vec<User>, AppError> {
    let collection = db.collection::<User>(USERS_COLLECTION);

    let mut cursor = collection
        .find(doc! {})
        .projection(doc! { "_id": 0 })
        .await
        .map_err(|e| AppError::Internal(format!("Failed to list users: {}", e)))?;

    let mut users = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(user) => users.push(user),
            Err(e) => {
                return Err(AppError::Internal(format!("Failed to read user: {}", e)));
            }
        }
    }

    Ok(users)
}

/// POST /getuser - Single document lookup by email.
pub async fn get_user(db: &MongoDB, email: &str) -> Result<User, AppError> {
    let collection = db.collection::<User>(USERS_COLLECTION);

    collection
        .find_one(doc! { "email": email })
        .projection(doc! { "_id": 0 })
        .await
        .map_err(|e| AppError::Internal(format!("Failed to fetch user: {}", e)))?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

/// POST /adduser - Insert the payload as-is. A duplicate-key rejection from
/// the unique email index is the conflict signal; any other insert failure is
/// a payload problem and its message goes back to the client.
pub async fn create_user(db: &MongoDB, user: User) -> Result<User, AppError> {
    let collection = db.collection::<User>(USERS_COLLECTION);

    collection.insert_one(&user).await.map_err(|e| {
        if is_duplicate_key_error(&e) {
            AppError::Conflict("User already exists".to_string())
        } else {
            AppError::BadRequest(e.to_string())
        }
    })?;

    Ok(user)
}

/// PUT /updateuser - Merge-update located by email. Only fields present in
/// the payload are overwritten; `email` itself is only the lookup key.
pub async fn update_user(
    db: &MongoDB,
    email: &str,
    fields: Document,
) -> Result<User, AppError> {
    let fields = sanitize_update_fields(fields);

    // An empty $set is a server error, so a payload carrying nothing but the
    // email degrades to a plain lookup.
    if fields.is_empty() {
        return get_user(db, email).await;
    }

    let collection = db.collection::<User>(USERS_COLLECTION);

    collection
        .find_one_and_update(doc! { "email": email }, doc! { "$set": fields })
        .return_document(ReturnDocument::After)
        .projection(doc! { "_id": 0 })
        .await
        .map_err(|e| match *e.kind {
            ErrorKind::Write(_) => AppError::BadRequest(e.to_string()),
            _ => AppError::Internal(format!("Failed to update user: {}", e)),
        })?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

/// DELETE /deleteuser - Remove the single matching document.
pub async fn delete_user(db: &MongoDB, email: &str) -> Result<(), AppError> {
    let collection = db.collection::<User>(USERS_COLLECTION);

    let result = collection
        .delete_one(doc! { "email": email })
        .await
        .map_err(|e| AppError::Internal(format!("Failed to delete user: {}", e)))?;

    if result.deleted_count == 0 {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok(())
}

/// Strips the keys that must never land in an update set: the lookup key and
/// the store's own id.
pub(crate) fn sanitize_update_fields(mut fields: Document) -> Document {
    fields.remove("email");
    fields.remove("_id");
    fields
}

fn is_duplicate_key_error(error: &mongodb::error::Error) -> bool {
    match *error.kind {
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) => {
            write_error.code == 11000
        }
        ErrorKind::Command(ref command_error) => command_error.code == 11000,
        _ => false,
    }
}
