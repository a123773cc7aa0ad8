//! Router-level tests for the auth crate
//! In-memory repository, requests driven through `tower::ServiceExt::oneshot`.

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
    use crate::config::AuthConfig;
    use crate::domain::User;
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::{CredentialError, login::Login};
    use crate::error::{AuthError, AuthResult};
    use crate::infra::InMemoryAuthRepository;
    use platform::token::verify_token;

    /// A concurrent registration committed the login between the existence
    /// check and the insert, so storage reports the unique violation.
    #[derive(Clone)]
    pub(super) struct LostRaceRepository;

    impl UserRepository for LostRaceRepository {
        async fn create(&self, _user: &User) -> AuthResult<()> {
            Err(AuthError::UserExists)
        }

        async fn find_by_login(&self, _login: &str) -> AuthResult<Option<User>> {
            Ok(None)
        }

        async fn exists_by_login(&self, _login: &Login) -> AuthResult<bool> {
            Ok(false)
        }
    }

    fn setup() -> (Arc<InMemoryAuthRepository>, Arc<AuthConfig>) {
        (
            Arc::new(InMemoryAuthRepository::new()),
            Arc::new(AuthConfig::new("use-case-secret").with_pepper(Some(b"pepper".to_vec()))),
        )
    }

    fn creds(login: &str, password: &str) -> RegisterInput {
        RegisterInput {
            login: login.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let (repo, config) = setup();

        let out = RegisterUseCase::new(repo.clone(), config.clone())
            .execute(creds("user1", "password1"))
            .await
            .unwrap();
        assert_eq!(out.login, "user1");

        let login = LoginUseCase::new(repo, config.clone())
            .execute(LoginInput {
                login: "user1".into(),
                password: "password1".into(),
            })
            .await
            .unwrap();

        let claims = verify_token(&login.token, config.secret()).unwrap();
        assert_eq!(claims.login, "user1");
        assert_eq!(claims.exp - claims.iat, 300);
    }

    #[tokio::test]
    async fn test_register_validation_error_before_storage() {
        let (repo, config) = setup();
        let err = RegisterUseCase::new(repo.clone(), config)
            .execute(creds("u", "password1"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Credential(CredentialError::ShortLogin)));
        assert!(repo.find_by_login_for_test("u").await.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_login() {
        let (repo, config) = setup();
        let use_case = RegisterUseCase::new(repo, config);

        use_case.execute(creds("user1", "password1")).await.unwrap();
        let err = use_case
            .execute(creds("user1", "otherpassword"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UserExists));
    }

    #[tokio::test]
    async fn test_concurrent_registration_loses_at_insert() {
        let (_, config) = setup();
        let err = RegisterUseCase::new(Arc::new(LostRaceRepository), config)
            .execute(creds("user1", "password1"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::UserExists));
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "USER_EXISTS");
    }

    #[tokio::test]
    async fn test_unknown_login_and_wrong_password_are_distinct() {
        let (repo, config) = setup();
        RegisterUseCase::new(repo.clone(), config.clone())
            .execute(creds("user1", "password1"))
            .await
            .unwrap();

        let use_case = LoginUseCase::new(repo, config);

        let err = use_case
            .execute(LoginInput {
                login: "nobody".into(),
                password: "password1".into(),
            })
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AuthError::UserLoginWrong));

        let err = use_case
            .execute(LoginInput {
                login: "user1".into(),
                password: "password2".into(),
            })
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AuthError::UserWrongPassword));
    }

    impl InMemoryAuthRepository {
        async fn find_by_login_for_test(&self, login: &str) -> Option<User> {
            self.find_by_login(login).await.unwrap()
        }
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::config::AuthConfig;
    use crate::infra::InMemoryAuthRepository;
    use crate::presentation::router::auth_router_generic;

    fn app() -> Router {
        auth_router_generic(
            InMemoryAuthRepository::new(),
            Arc::new(AuthConfig::new("router-secret")),
        )
    }

    fn post_json(uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, token);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    async fn register_and_login(app: &Router) -> String {
        let creds = json!({ "login": "user1", "password": "password1" });
        send(app, post_json("/register", creds.clone(), None)).await;
        let (status, body) = send(app, post_json("/login", creds, None)).await;
        assert_eq!(status, StatusCode::OK);
        body.as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_register_race_reported_as_user_exists() {
        let app = auth_router_generic(
            super::use_case_tests::LostRaceRepository,
            Arc::new(AuthConfig::new("router-secret")),
        );
        let (status, body) = send(
            &app,
            post_json("/register", json!({ "login": "user1", "password": "password1" }), None),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "USER_EXISTS");
    }

    #[tokio::test]
    async fn test_register_created() {
        let app = app();
        let (status, body) = send(
            &app,
            post_json("/register", json!({ "login": "user1", "password": "password1" }), None),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["login"], "user1");
        assert!(body["created_at"].is_string());
        assert!(body.get("password").is_none());
    }

    #[tokio::test]
    async fn test_register_twice_is_user_exists() {
        let app = app();
        let creds = json!({ "login": "user1", "password": "password1" });
        send(&app, post_json("/register", creds.clone(), None)).await;

        let (status, body) = send(&app, post_json("/register", creds, None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "USER_EXISTS");
        assert_eq!(body["detail"], "user with this login already exists");
    }

    #[tokio::test]
    async fn test_register_validation_codes() {
        let app = app();
        let cases = [
            (json!({ "login": "ab", "password": "password1" }), "SHORT_LOGIN"),
            (json!({ "login": "user 1", "password": "password1" }), "WRONG_LOGIN_SYMBOLS"),
            (json!({ "login": "user1", "password": "pass" }), "SHORT_PASSWORD"),
            (json!({ "login": "user1", "password": "password-1" }), "WRONG_PASSWORD_SYMBOLS"),
        ];
        for (body, code) in cases {
            let (status, resp) = send(&app, post_json("/register", body, None)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(resp["code"], code);
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let app = app();
        let req = Request::builder()
            .method("POST")
            .uri("/register")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"login\":"))
            .unwrap();

        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_DATA_FORMAT");
    }

    #[tokio::test]
    async fn test_login_returns_token_string() {
        let app = app();
        let token = register_and_login(&app).await;
        assert_eq!(token.split('.').count(), 3);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let app = app();
        register_and_login(&app).await;

        let (status, body) = send(
            &app,
            post_json("/login", json!({ "login": "user1", "password": "password2" }), None),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "USER_WRONG_PASSWORD");
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let app = app();
        let (status, body) = send(
            &app,
            post_json("/login", json!({ "login": "ghost", "password": "password1" }), None),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "USER_LOGIN_WRONG");
    }

    #[tokio::test]
    async fn test_login_with_valid_token_is_already_reported() {
        let app = app();
        let token = register_and_login(&app).await;

        let (status, body) = send(
            &app,
            post_json(
                "/login",
                json!({ "login": "user1", "password": "password1" }),
                Some(&token),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::ALREADY_REPORTED);
        assert_eq!(body, json!("already authorized"));
    }

    #[tokio::test]
    async fn test_login_with_invalid_token_is_rejected() {
        let app = app();
        register_and_login(&app).await;

        let (status, body) = send(
            &app,
            post_json(
                "/login",
                json!({ "login": "user1", "password": "password1" }),
                Some("not.a.token"),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_TOKEN");
    }

    #[tokio::test]
    async fn test_login_with_empty_header_proceeds() {
        let app = app();
        register_and_login(&app).await;

        let (status, _) = send(
            &app,
            post_json(
                "/login",
                json!({ "login": "user1", "password": "password1" }),
                Some(""),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[cfg(test)]
mod extractor_tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::routing::get;
    use axum::{Router, middleware};
    use tower::ServiceExt;

    use crate::config::AuthConfig;
    use crate::presentation::extract::{CurrentUser, MaybeUser};
    use crate::presentation::middleware::{optional_authenticated, require_authenticated};
    use platform::token::{DEFAULT_TOKEN_TTL, issue_token};

    async fn whoami(CurrentUser(identity): CurrentUser) -> String {
        identity.login
    }

    async fn maybe(user: MaybeUser) -> String {
        user.login().unwrap_or("anonymous").to_string()
    }

    fn app(config: Arc<AuthConfig>) -> Router {
        Router::new()
            .route(
                "/strict",
                get(whoami).layer(middleware::from_fn_with_state(
                    config.clone(),
                    require_authenticated,
                )),
            )
            .route(
                "/optional",
                get(maybe).layer(middleware::from_fn_with_state(config, optional_authenticated)),
            )
            .route("/ungated", get(whoami))
    }

    async fn call(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, String) {
        let mut req = Request::builder().uri(uri);
        if let Some(token) = token {
            req = req.header(header::AUTHORIZATION, token);
        }
        let resp = app
            .clone()
            .oneshot(req.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_strict_route() {
        let config = Arc::new(AuthConfig::new("extract-secret"));
        let app = app(config.clone());
        let token = issue_token("user1", config.secret(), DEFAULT_TOKEN_TTL).unwrap();

        assert_eq!(call(&app, "/strict", None).await.0, StatusCode::UNAUTHORIZED);
        assert_eq!(
            call(&app, "/strict", Some("forged")).await.0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            call(&app, "/strict", Some(&token)).await,
            (StatusCode::OK, "user1".to_string())
        );
    }

    #[tokio::test]
    async fn test_optional_route() {
        let config = Arc::new(AuthConfig::new("extract-secret"));
        let app = app(config.clone());
        let token = issue_token("user1", config.secret(), DEFAULT_TOKEN_TTL).unwrap();

        assert_eq!(
            call(&app, "/optional", None).await,
            (StatusCode::OK, "anonymous".to_string())
        );
        assert_eq!(
            call(&app, "/optional", Some(&token)).await,
            (StatusCode::OK, "user1".to_string())
        );
        assert_eq!(
            call(&app, "/optional", Some("forged")).await.0,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_current_user_without_gate_is_unauthorized() {
        let config = Arc::new(AuthConfig::new("extract-secret"));
        let app = app(config.clone());
        let token = issue_token("user1", config.secret(), DEFAULT_TOKEN_TTL).unwrap();

        // No middleware ran, so nothing was put in extensions
        assert_eq!(
            call(&app, "/ungated", Some(&token)).await.0,
            StatusCode::UNAUTHORIZED
        );
    }
}
