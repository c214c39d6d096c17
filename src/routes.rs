use actix_web::http::header;
use actix_web::{delete, error, get, post, web, HttpResponse};
use serde_json::json;

use crate::csv_export::CSV_FILENAME;
use crate::error::ServiceError;
use crate::filter::DateRange;
use crate::model::{DeletedRecord, PostDieselRecord, RecordQuery};
use crate::service::RecordService;

pub struct AppState {
    pub records: RecordService,
}

fn date_range(query: &RecordQuery) -> Result<DateRange, ServiceError> {
    DateRange::from_params(query.start_date.as_deref(), query.end_date.as_deref())
        .map_err(ServiceError::Validation)
}

#[post("/api/records")]
async fn post_record(
    data: web::Data<AppState>,
    request: web::Json<PostDieselRecord>,
) -> Result<HttpResponse, ServiceError> {
    let record = data.records.create(&request).await?;
    Ok(HttpResponse::Created().json(record))
}

#[get("/api/records")]
async fn get_records(
    data: web::Data<AppState>,
    query: web::Query<RecordQuery>,
) -> Result<HttpResponse, ServiceError> {
    let records = data.records.list(&date_range(&query)?).await?;
    Ok(HttpResponse::Ok().json(records))
}

#[get("/api/records/csv")]
async fn get_records_csv(
    data: web::Data<AppState>,
    query: web::Query<RecordQuery>,
) -> Result<HttpResponse, ServiceError> {
    let csv = data.records.export_csv(&date_range(&query)?).await?;
    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", CSV_FILENAME),
        ))
        .body(csv))
}

#[delete("/api/records/{id}")]
async fn delete_record_by_id(
    data: web::Data<AppState>,
    path: web::Path<(String,)>,
) -> Result<HttpResponse, ServiceError> {
    let id = data.records.remove(&path.into_inner().0).await?;
    Ok(HttpResponse::Ok().json(DeletedRecord { success: true, id }))
}

fn bad_request<E>(err: E) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let response = HttpResponse::BadRequest().json(json!({ "errors": [err.to_string()] }));
    error::InternalError::from_response(err, response).into()
}

/// Registers the record API. Unparseable JSON bodies and query strings get
/// the same `{errors: [...]}` shape as validation failures.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| bad_request(err));
    let query_config = web::QueryConfig::default().error_handler(|err, _req| bad_request(err));

    cfg.app_data(json_config)
        .app_data(query_config)
        .service(post_record)
        .service(get_records_csv)
        .service(get_records)
        .service(delete_record_by_id);
}
