use std::sync::{Arc, Mutex};
use std::thread;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};

pub struct FormServer {
    pub base_url: String,
    pub posted: Arc<Mutex<Vec<String>>>,
}

impl FormServer {
    /// `formResponse` URL for a form id on this server.
    pub fn response_url(&self, form_id: &str) -> String {
        format!("{}/forms/d/e/{}/formResponse", self.base_url, form_id)
    }
}

/// Serves `page` at `.../viewform` and answers POSTs to `.../formResponse`
/// with `status`, recording each body.
pub fn spawn_form_server(page: String, status: u16) -> FormServer {
    let posted = Arc::new(Mutex::new(Vec::new()));
    let seen = posted.clone();
    let (tx, rx) = std::sync::mpsc::channel();

    thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind");
            tx.send(listener.local_addr().expect("local addr"))
                .expect("send addr");

            let app = Router::new()
                .route(
                    "/forms/d/e/:id/viewform",
                    get(move || async move { Html(page) }),
                )
                .route(
                    "/forms/d/e/:id/formResponse",
                    post(move |body: String| async move {
                        seen.lock().expect("posted lock").push(body);
                        StatusCode::from_u16(status).expect("status code")
                    }),
                );
            axum::serve(listener, app).await.expect("serve");
        });
    });

    let addr = rx.recv().expect("server address");
    FormServer {
        base_url: format!("http://{}", addr),
        posted,
    }
}

pub fn form_page(question_ids: &[u64]) -> String {
    let questions = question_ids
        .iter()
        .enumerate()
        .map(|(i, id)| format!(r#"[{},"Question {}",null,0,[[{},null,1]]]"#, id + 7, i, id))
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "<!DOCTYPE html><html><head><script type=\"text/javascript\">var FB_PUBLIC_LOAD_DATA_ = [null,[\"Daily\",[{}],null,null,null,null,null,null,\"Daily\"],\"/forms\",\"Daily report\"];</script></head><body></body></html>",
        questions
    )
}
