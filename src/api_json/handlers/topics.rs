use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::warn;

use crate::api_json::{AssignTopicsRequest, EventInput, parse_json_input, run_assign_request};

/// POST /topics/assign
/// Recibe temas, eventos y votos; devuelve el tema elegido por evento y el desglose.
pub async fn assign_topics_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let body_value = body.into_inner();
    let json_str = match serde_json::to_string(&body_value) {
        Ok(s) => s,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("invalid JSON body: {}", e)})),
    };

    let request = match parse_json_input(&json_str) {
        Ok(r) => r,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("failed to parse input: {}", e)})),
    };

    match run_assign_request(&request) {
        Ok(resp) => HttpResponse::Ok().json(resp),
        Err(e) => {
            warn!(error = %e, "topic assignment rejected");
            HttpResponse::BadRequest().json(json!({"error": format!("topic assignment failed: {}", e)}))
        }
    }
}

/// GET /help
pub async fn help_handler() -> impl Responder {
    let example = AssignTopicsRequest {
        topics: vec!["Topic A".to_string(), "Topic C".to_string()],
        events: vec![
            EventInput { id: 1, attendees: vec!["p1".to_string(), "p2".to_string()], alternates: vec![] },
            EventInput { id: 2, attendees: vec!["p2".to_string(), "p3".to_string()], alternates: vec![] },
        ],
        votes: [
            ("p1".to_string(), vec!["Topic A".to_string()]),
            ("p2".to_string(), vec!["Topic A".to_string()]),
            ("p3".to_string(), vec!["Topic A".to_string(), "Topic C".to_string()]),
        ]
        .into_iter()
        .collect(),
    };

    let help = json!({
        "description": "API para asignar temas a eventos ya agendados. Un tema no se repite entre eventos que comparten asistentes.",
        "endpoints": ["POST /topics/assign", "GET /help"],
        "post_example": example,
        "note": "Sólo 'attendees' cuenta para el puntaje; 'alternates' se ignora."
    });

    HttpResponse::Ok().json(help)
}
