use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use whisper_notify::{Dispatcher, PairDirectory, PushChannel};
use whisper_types::api::DispatchReport;
use whisper_types::models::Message;

pub fn router<D: PairDirectory, P: PushChannel>(
    dispatcher: Dispatcher<D, P>,
    event_secret: Option<String>,
) -> Router {
    let secret: Option<Arc<str>> = event_secret.map(Into::into);

    let trigger_routes = Router::new()
        .route("/events/whisper-created", post(whisper_created::<D, P>))
        .layer(middleware::from_fn_with_state(secret, require_event_secret))
        .with_state(dispatcher);

    Router::new()
        .route("/health", get(health))
        .merge(trigger_routes)
        .layer(TraceLayer::new_for_http())
}

/// Trigger for a newly created whisper. Always acknowledged: the whisper is
/// already stored, so a failed notification must not make the event source
/// retry it.
async fn whisper_created<D: PairDirectory, P: PushChannel>(
    State(dispatcher): State<Dispatcher<D, P>>,
    Json(message): Json<Message>,
) -> Json<DispatchReport> {
    let outcome = dispatcher.dispatch(&message).await;
    Json(outcome.report())
}

async fn health() -> &'static str {
    "ok"
}

/// Check the shared event secret, if one is configured.
async fn require_event_secret(
    State(secret): State<Option<Arc<str>>>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if let Some(secret) = secret {
        let presented = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or(StatusCode::UNAUTHORIZED)?;

        if presented != &*secret {
            return Err(StatusCode::UNAUTHORIZED);
        }
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use axum::body::Body;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use whisper_notify::{DirectoryError, PushError};
    use whisper_types::models::Pair;
    use whisper_types::notification::NotificationPayload;

    struct OnePair(Pair);

    impl PairDirectory for OnePair {
        async fn get(&self, pair_id: &str) -> Result<Option<Pair>, DirectoryError> {
            Ok((pair_id == "p1").then(|| self.0.clone()))
        }
    }

    #[derive(Clone, Default)]
    struct FakePush {
        tokens: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    impl PushChannel for FakePush {
        async fn send(&self, token: &str, _payload: &NotificationPayload) -> Result<String, PushError> {
            self.tokens.lock().unwrap().push(token.to_string());
            if self.fail {
                Err(PushError::Auth("token exchange returned 401".into()))
            } else {
                Ok("projects/test/messages/1".into())
            }
        }
    }

    fn app(push: FakePush, secret: Option<&str>) -> Router {
        let pair = Pair {
            user_a: "u1".into(),
            user_b: "u2".into(),
            nickname_a: "Al".into(),
            nickname_b: "Bo".into(),
            token_a: Some("tA".into()),
            token_b: Some("tB".into()),
        };
        router(Dispatcher::new(OnePair(pair), push), secret.map(String::from))
    }

    fn trigger(body: &str, auth: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder()
            .method("POST")
            .uri("/events/whisper-created")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(auth) = auth {
            builder = builder.header(header::AUTHORIZATION, auth);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn report(resp: Response) -> DispatchReport {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn delivered_whisper_is_acknowledged() {
        let push = FakePush::default();
        let resp = app(push.clone(), None)
            .oneshot(trigger(r#"{"pairId":"p1","senderId":"u1","text":"hi"}"#, None))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let report = report(resp).await;
        assert_eq!(report.outcome, "delivered");
        assert_eq!(report.message_id.as_deref(), Some("projects/test/messages/1"));
        assert_eq!(*push.tokens.lock().unwrap(), vec!["tB".to_string()]);
    }

    #[tokio::test]
    async fn failures_are_still_acknowledged() {
        let push = FakePush {
            fail: true,
            ..FakePush::default()
        };
        let resp = app(push, None)
            .oneshot(trigger(r#"{"pairId":"p1","senderId":"u2","text":"hi"}"#, None))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(report(resp).await.outcome, "failed");
    }

    #[tokio::test]
    async fn unknown_pair_is_skipped() {
        let push = FakePush::default();
        let resp = app(push.clone(), None)
            .oneshot(trigger(r#"{"pairId":"p404","senderId":"u1","text":"hi"}"#, None))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let report = report(resp).await;
        assert_eq!(report.outcome, "skipped");
        assert_eq!(report.detail.as_deref(), Some("pair_not_found"));
        assert!(push.tokens.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let push = FakePush::default();

        for body in ["{", r#"{"pairId":"p1"}"#] {
            let resp = app(push.clone(), None)
                .oneshot(trigger(body, None))
                .await
                .unwrap();
            assert!(resp.status().is_client_error(), "{} -> {}", body, resp.status());
        }

        assert!(push.tokens.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn event_secret_is_enforced() {
        let body = r#"{"pairId":"p1","senderId":"u1","text":"hi"}"#;

        let resp = app(FakePush::default(), Some("s3cret"))
            .oneshot(trigger(body, None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = app(FakePush::default(), Some("s3cret"))
            .oneshot(trigger(body, Some("Bearer wrong")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = app(FakePush::default(), Some("s3cret"))
            .oneshot(trigger(body, Some("Bearer s3cret")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_needs_no_secret() {
        let resp = app(FakePush::default(), Some("s3cret"))
            .oneshot(axum::http::Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
