use actix_web::{web, HttpResponse, Responder};
use common::requests::{PreviewRequest, PreviewResponse};
use common::sample::synthesize;
use log::info;

use super::rejected;

pub async fn process(payload: web::Json<PreviewRequest>) -> impl Responder {
    if let Err(err) = payload.columns.validate() {
        info!("Preview request rejected: {}", err);
        return rejected(&err);
    }

    let rows = synthesize(&payload.columns, payload.effective_row_count());
    HttpResponse::Ok().json(PreviewResponse { rows })
}

#[cfg(test)]
mod tests {
    use crate::services::tables::configure_routes;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn returns_requested_rows() {
        let app = test::init_service(App::new().service(configure_routes())).await;
        let req = test::TestRequest::post()
            .uri("/api/tables/preview")
            .set_json(json!({
                "rowCount": 4,
                "columns": [
                    {"id": "column-0", "label": "Tier", "dataType": "enum",
                     "options": ["Gold", "Silver"], "renderAsBadge": true},
                    {"id": "column-1", "label": "Go", "dataType": "action",
                     "actionType": "view", "actionStyle": "link"}
                ]
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let rows = body["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0]["id"], "row-1");
        assert_eq!(rows[2]["values"]["column-0"], "Gold");
        assert!(rows[0]["values"].get("column-1").is_none());
    }

    #[actix_web::test]
    async fn rejects_blank_label() {
        let app = test::init_service(App::new().service(configure_routes())).await;
        let req = test::TestRequest::post()
            .uri("/api/tables/preview")
            .set_json(json!({"columns": [{"id": "column-0", "label": " ", "dataType": "text"}]}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
