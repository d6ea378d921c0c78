use actix_multipart::Multipart;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{FromRequest, HttpRequest, HttpResponse, web};
use futures_util::StreamExt;
use sea_orm::DatabaseConnection;

use crate::db::professionals as professional_db;
use crate::error::ApiError;
use crate::models::professionals::{
    CreateProfessional, MAX_CREDENTIAL_BYTES, UpdateProfessional, credential_data_uri,
};

const CREDENTIAL_FIELD: &str = "credential_image";

/// Cap for each plain text part of the form.
const MAX_FORM_TEXT_BYTES: usize = 1024;

/// GET /api/professionals — list all professionals.
pub async fn get_professionals(
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let professionals = professional_db::get_all_professionals(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(professionals))
}

/// GET /api/professionals/{id} — get a single professional.
pub async fn get_professional(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    match professional_db::get_professional_by_id(db.get_ref(), id).await? {
        Some(professional) => Ok(HttpResponse::Ok().json(professional)),
        None => Err(ApiError::not_found(format!("Professional {id} not found"))),
    }
}

/// GET /api/professionals/service/{service_id} — the professional offering a service.
pub async fn get_professional_by_service(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let service_id = path.into_inner();
    match professional_db::get_first_professional_for_service(db.get_ref(), service_id).await? {
        Some(professional) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "professional_id": professional.professional_id,
        }))),
        None => Err(ApiError::not_found("No professional found for this service")),
    }
}

/// POST /api/professionals — register a user as a professional for a service.
pub async fn create_professional(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateProfessional>,
) -> Result<HttpResponse, ApiError> {
    let professional = professional_db::insert_professional(db.get_ref(), body.into_inner()).await?;
    tracing::info!(professional_id = professional.professional_id, "professional created");

    Ok(HttpResponse::Created().json(serde_json::json!({
        "professional_id": professional.professional_id,
    })))
}

/// PUT /api/professionals/{id} — patch a professional from JSON or multipart form-data.
///
/// The body is picked by `Content-Type`. Multipart bodies are streamed, so a
/// `credential_image` file part up to [`MAX_CREDENTIAL_BYTES`] is accepted and
/// stored as a base64 `data:` URI. `money_earned` is added to the running total.
pub async fn update_professional(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    req: HttpRequest,
    payload: web::Payload,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let input = if is_multipart(&req) {
        read_form(Multipart::new(req.headers(), payload)).await?
    } else {
        web::Json::<UpdateProfessional>::from_request(&req, &mut payload.into_inner())
            .await
            .map_err(|e| ApiError::validation(format!("Invalid request body: {e}")))?
            .into_inner()
    };
    input.validate().map_err(ApiError::Validation)?;

    let updated = professional_db::update_professional(db.get_ref(), id, input).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/professionals/{id} — delete a professional.
pub async fn delete_professional(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let result = professional_db::delete_professional(db.get_ref(), id).await?;
    if result.rows_affected == 0 {
        return Err(ApiError::not_found(format!("Professional {id} not found")));
    }
    tracing::info!(professional_id = id, "professional deleted");
    Ok(HttpResponse::NoContent().finish())
}

async fn read_form(mut form: Multipart) -> Result<UpdateProfessional, ApiError> {
    let mut input = UpdateProfessional::default();

    while let Some(item) = form.next().await {
        let mut field =
            item.map_err(|e| ApiError::validation(format!("Invalid multipart body: {e}")))?;
        let name = field.name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(|mime| mime.to_string());

        let limit = if name == CREDENTIAL_FIELD {
            MAX_CREDENTIAL_BYTES
        } else {
            MAX_FORM_TEXT_BYTES
        };

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk =
                chunk.map_err(|e| ApiError::Internal(format!("Failed to read upload: {e}")))?;
            if data.len() + chunk.len() > limit {
                return Err(ApiError::validation(format!(
                    "{name} exceeds the {limit} byte limit"
                )));
            }
            data.extend_from_slice(&chunk);
        }

        if name == CREDENTIAL_FIELD {
            if !data.is_empty() {
                input.credential_image = Some(credential_data_uri(content_type.as_deref(), &data));
            }
            continue;
        }

        let value = String::from_utf8(data)
            .map_err(|_| ApiError::validation(format!("{name} must be valid UTF-8 text")))?;
        input
            .apply_form_field(&name, &value)
            .map_err(ApiError::Validation)?;
    }

    Ok(input)
}

fn is_multipart(req: &HttpRequest) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| {
            value
                .trim_start()
                .to_ascii_lowercase()
                .starts_with("multipart/form-data")
        })
}
