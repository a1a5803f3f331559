use actix_web::{web, HttpResponse, Responder};
use common::codegen::compile;
use common::requests::{CompileRequest, SnippetResponse};
use log::{debug, info};

use super::rejected;

pub async fn process(payload: web::Json<CompileRequest>) -> impl Responder {
    let columns = &payload.columns;
    if let Err(err) = columns.validate() {
        info!("Snippet request rejected: {}", err);
        return rejected(&err);
    }

    let code = compile(columns.columns());
    debug!("Generated {} bytes for {} columns", code.len(), columns.len());
    HttpResponse::Ok().json(SnippetResponse { code })
}

#[cfg(test)]
mod tests {
    use crate::services::tables::configure_routes;
    use actix_web::{http::StatusCode, test, App};
    use common::requests::SnippetResponse;
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn returns_generated_listing() {
        let app = test::init_service(App::new().service(configure_routes())).await;
        let req = test::TestRequest::post()
            .uri("/api/tables/snippet")
            .set_json(json!({
                "columns": [
                    {"id": "column-0", "label": "User Name", "dataType": "text"},
                    {"id": "column-1", "label": "Remove", "dataType": "action",
                     "actionType": "delete", "actionStyle": "icon"}
                ]
            }))
            .to_request();
        let body: SnippetResponse = test::call_and_read_body_json(&app, req).await;
        assert!(body.code.contains("  username: string;"));
        assert!(body.code.contains("function handleDelete(data: Data)"));
        assert!(body.code.contains(r#"import { Trash2 } from "lucide-react""#));
    }

    #[actix_web::test]
    async fn rejects_enum_without_options() {
        let app = test::init_service(App::new().service(configure_routes())).await;
        let req = test::TestRequest::post()
            .uri("/api/tables/snippet")
            .set_json(json!({
                "columns": [{"id": "column-0", "label": "Status", "dataType": "enum"}]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["title"], "Missing enum options");
    }
}
