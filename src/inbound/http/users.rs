//! User registration handlers.
//!
//! ```text
//! POST /user {"firstName":"Ada","lastName":"Lovelace","email":"ada@example.com","password":"secret-pw","age":36}
//! GET /user
//! GET /user/{userId}
//! ```

use actix_web::{get, post, web, HttpResponse};
use tracing::info;

use crate::domain::{
    generate_uid, validate_user, UserCreateRequest, UserListResponse, UserRecord, UserStore,
};
use crate::inbound::http::{ApiError, ApiResult};

/// Create a user: validate the payload, assign an identifier, append the
/// record to the store, and return it with the password dropped.
#[post("")]
pub async fn create_user(
    store: web::Data<dyn UserStore>,
    payload: web::Json<UserCreateRequest>,
) -> ApiResult<HttpResponse> {
    let request = payload.into_inner();

    let violations = validate_user(&request);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    // Validation guarantees every field is present.
    let record = UserRecord {
        uid: generate_uid(),
        first_name: request.first_name.unwrap_or_default(),
        last_name: request.last_name.unwrap_or_default(),
        email: request.email.unwrap_or_default(),
        age: request.age.unwrap_or_default(),
    };

    store.append(record.clone())?;
    info!(first_name = %record.first_name, uid = %record.uid, "user created");
    Ok(HttpResponse::Ok().json(record))
}

/// List every registered user with a record count; 404 while none exist.
#[get("")]
pub async fn list_users(
    store: web::Data<dyn UserStore>,
) -> ApiResult<web::Json<UserListResponse>> {
    let data = store.list()?;
    if data.is_empty() {
        return Err(ApiError::NoUsers);
    }
    let count = data.len();
    Ok(web::Json(UserListResponse { data, count }))
}

/// Echo the `userId` path parameter.
///
/// No lookup is performed against the store; the id is returned as received.
#[get("/{user_id}")]
pub async fn echo_user_id(path: web::Path<String>) -> HttpResponse {
    let user_id = path.into_inner();
    info!(%user_id, "user id echoed");
    HttpResponse::Ok().body(format!("User id is {user_id}"))
}
