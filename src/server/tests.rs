//! Router tests
//!
//! These run against a pool that never connects: every request here is
//! answered by auth, body validation or the query builders before a
//! statement would be sent.

#[cfg(test)]
mod tests {
    use crate::core::Jobly;
    use crate::server::auth::{authenticate, create_token, ensure_logged_in};
    use crate::server::build_router;
    use crate::server::state::AppState;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::middleware::{from_fn, from_fn_with_state};
    use axum::routing::get;
    use axum::Router;
    use config::{AuthConfig, DatabaseConfig};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt; // for `oneshot`

    fn test_state() -> AppState {
        let database = DatabaseConfig::new(
            "localhost".to_string(),
            5432,
            "jobly_test".to_string(),
            "postgres".to_string(),
            "postgres".to_string(),
            0,
            1,
            1,
            60,
            0,
        );
        let jobly = Jobly::connect_lazy(&database).expect("lazy pool should build");
        AppState::new(jobly, AuthConfig::new("test_secret".to_string(), 3600))
    }

    fn token(state: &AppState, is_admin: bool) -> String {
        let username = if is_admin { "admin" } else { "u1" };
        create_token(username, is_admin, &state.auth).expect("token should sign")
    }

    async fn send(
        state: AppState,
        method: Method,
        uri: &str,
        bearer: Option<String>,
        body: Option<Value>,
    ) -> Result<(StatusCode, Value), String> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .map_err(|e| e.to_string())?;

        let response = build_router(state)
            .oneshot(request)
            .await
            .map_err(|e| format!("Request failed: {:?}", e))?;

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .map_err(|e| e.to_string())?
            .to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).map_err(|e| e.to_string())?
        };
        Ok((status, value))
    }

    fn error_message(body: &Value) -> &str {
        body["error"]["message"].as_str().unwrap_or_default()
    }

    // ========================================
    // Probes
    // ========================================

    #[tokio::test]
    async fn test_livez() -> Result<(), String> {
        let (status, _) = send(test_state(), Method::GET, "/livez", None, None).await?;
        assert_eq!(status, StatusCode::OK);
        Ok(())
    }

    // ========================================
    // Authorization
    // ========================================

    #[tokio::test]
    async fn test_create_company_requires_token() -> Result<(), String> {
        let body = json!({"handle": "new", "name": "New", "description": "D"});
        let (status, value) =
            send(test_state(), Method::POST, "/companies", None, Some(body)).await?;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(value["error"]["status"], json!(401));
        assert_eq!(error_message(&value), "Unauthorized");
        Ok(())
    }

    #[tokio::test]
    async fn test_create_company_rejects_non_admin() -> Result<(), String> {
        let state = test_state();
        let bearer = Some(token(&state, false));
        let body = json!({"handle": "new", "name": "New", "description": "D"});
        let (status, _) = send(state, Method::POST, "/companies", bearer, Some(body)).await?;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_token_is_treated_as_anonymous() -> Result<(), String> {
        let bearer = Some("not-a-jwt".to_string());
        let (status, _) = send(test_state(), Method::DELETE, "/jobs/1", bearer, None).await?;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        Ok(())
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret_is_rejected() -> Result<(), String> {
        let forged = create_token("admin", true, &AuthConfig::new("other".to_string(), 3600))
            .map_err(|e| e.to_string())?;
        let (status, _) = send(
            test_state(),
            Method::PATCH,
            "/companies/c1",
            Some(forged),
            Some(json!({"name": "x"})),
        )
        .await?;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        Ok(())
    }

    #[tokio::test]
    async fn test_ensure_logged_in() -> Result<(), String> {
        let state = test_state();
        let app = Router::new()
            .route("/me", get(|| async { "ok" }))
            .route_layer(from_fn(ensure_logged_in))
            .layer(from_fn_with_state(state.clone(), authenticate))
            .with_state(state.clone());

        let anonymous = Request::builder()
            .uri("/me")
            .body(Body::empty())
            .map_err(|e| e.to_string())?;
        let response = app
            .clone()
            .oneshot(anonymous)
            .await
            .map_err(|e| format!("Request failed: {:?}", e))?;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let logged_in = Request::builder()
            .uri("/me")
            .header(header::AUTHORIZATION, format!("bearer {}", token(&state, false)))
            .body(Body::empty())
            .map_err(|e| e.to_string())?;
        let response = app
            .oneshot(logged_in)
            .await
            .map_err(|e| format!("Request failed: {:?}", e))?;
        assert_eq!(response.status(), StatusCode::OK);
        Ok(())
    }

    // ========================================
    // Request validation
    // ========================================

    #[tokio::test]
    async fn test_create_company_rejects_unknown_field() -> Result<(), String> {
        let state = test_state();
        let bearer = Some(token(&state, true));
        let body = json!({"handle": "new", "name": "New", "description": "D", "color": "red"});
        let (status, value) = send(state, Method::POST, "/companies", bearer, Some(body)).await?;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["error"]["status"], json!(400));
        Ok(())
    }

    #[tokio::test]
    async fn test_create_company_rejects_negative_employees() -> Result<(), String> {
        let state = test_state();
        let bearer = Some(token(&state, true));
        let body = json!({"handle": "new", "name": "New", "description": "D", "numEmployees": -1});
        let (status, value) = send(state, Method::POST, "/companies", bearer, Some(body)).await?;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_message(&value), "numEmployees must be greater than or equal to 0");
        Ok(())
    }

    #[tokio::test]
    async fn test_create_company_rejects_uppercase_handle() -> Result<(), String> {
        let state = test_state();
        let bearer = Some(token(&state, true));
        let body = json!({"handle": "Acme", "name": "Acme", "description": "D"});
        let (status, value) = send(state, Method::POST, "/companies", bearer, Some(body)).await?;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_message(&value), "handle must be lowercase");
        Ok(())
    }

    #[tokio::test]
    async fn test_create_job_rejects_uppercase_company_handle() -> Result<(), String> {
        let state = test_state();
        let bearer = Some(token(&state, true));
        let body = json!({"title": "J", "company_handle": "C1"});
        let (status, value) = send(state, Method::POST, "/jobs", bearer, Some(body)).await?;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_message(&value), "company_handle must be lowercase");
        Ok(())
    }

    #[tokio::test]
    async fn test_update_company_rejects_null_name() -> Result<(), String> {
        let state = test_state();
        let bearer = Some(token(&state, true));
        let body = json!({"name": null});
        let (status, value) =
            send(state, Method::PATCH, "/companies/c1", bearer, Some(body)).await?;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_message(&value), "name cannot be null");
        Ok(())
    }

    #[tokio::test]
    async fn test_update_company_cannot_change_handle() -> Result<(), String> {
        let state = test_state();
        let bearer = Some(token(&state, true));
        let body = json!({"handle": "c1-new"});
        let (status, _) = send(state, Method::PATCH, "/companies/c1", bearer, Some(body)).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_job_with_no_fields() -> Result<(), String> {
        let state = test_state();
        let bearer = Some(token(&state, true));
        let (status, value) =
            send(state, Method::PATCH, "/jobs/1", bearer, Some(json!({}))).await?;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_message(&value), "No data supplied");
        Ok(())
    }

    #[tokio::test]
    async fn test_create_job_rejects_equity_above_one() -> Result<(), String> {
        let state = test_state();
        let bearer = Some(token(&state, true));
        let body = json!({"title": "J", "salary": 10, "equity": 1.5, "company_handle": "c1"});
        let (status, value) = send(state, Method::POST, "/jobs", bearer, Some(body)).await?;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_message(&value), "equity must be between 0 and 1");
        Ok(())
    }

    #[tokio::test]
    async fn test_job_id_must_be_integer() -> Result<(), String> {
        let (status, _) = send(test_state(), Method::GET, "/jobs/abc", None, None).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        Ok(())
    }

    // ========================================
    // Search filters
    // ========================================

    #[tokio::test]
    async fn test_company_min_greater_than_max() -> Result<(), String> {
        let (status, value) = send(
            test_state(),
            Method::GET,
            "/companies?minEmployees=10&maxEmployees=2",
            None,
            None,
        )
        .await?;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            error_message(&value),
            "minEmployees cannot be greater than maxEmployees"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_company_non_numeric_bound() -> Result<(), String> {
        let (status, value) = send(
            test_state(),
            Method::GET,
            "/companies?maxEmployees=lots",
            None,
            None,
        )
        .await?;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_message(&value), "maxEmployees must be a number");
        Ok(())
    }

    #[tokio::test]
    async fn test_job_non_numeric_salary_and_bad_flag() -> Result<(), String> {
        let (status, value) =
            send(test_state(), Method::GET, "/jobs?minSalary=abc", None, None).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_message(&value), "minSalary must be a number");

        let (status, value) =
            send(test_state(), Method::GET, "/jobs?hasEquity=maybe", None, None).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_message(&value), "hasEquity must be true or false");
        Ok(())
    }
}
