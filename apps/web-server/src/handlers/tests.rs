use actix_session::{Session, SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::http::header;
use actix_web::{App, HttpResponse, test, web};
use chrono::NaiveDate;
use sea_orm::{DatabaseBackend, DbConn, DbErr, MockDatabase, MockExecResult};

use scribe_core::ports::PasswordService;
use scribe_infra::Argon2PasswordService;
use scribe_infra::database::entity::{post, user};

use crate::handlers::configure_routes;
use crate::session;
use crate::state::AppState;

const TEST_SECRET: &[u8] = b"test-secret-key-of-sufficient-length-1234";

fn empty_db() -> DbConn {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

fn stored_user(id: i32, email: &str, password_hash: &str) -> user::Model {
    user::Model {
        id,
        email: email.to_owned(),
        password_hash: password_hash.to_owned(),
        name: "Ada".to_owned(),
        joined_on: NaiveDate::from_ymd_opt(2026, 8, 29).unwrap(),
    }
}

fn stored_post(id: i32, title: &str) -> post::Model {
    post::Model {
        id,
        author_id: 1,
        title: title.to_owned(),
        subtitle: "A subtitle".to_owned(),
        body: "<p>Content</p>".to_owned(),
        img_url: "https://example.com/header.jpg".to_owned(),
        published_on: NaiveDate::from_ymd_opt(2026, 8, 29).unwrap(),
    }
}

/// Test-only route that stamps a session as user `{id}`, standing in for a
/// completed login so guard behavior can be exercised in isolation.
async fn login_stub(http_session: Session, path: web::Path<i32>) -> HttpResponse {
    let id = path.into_inner();
    http_session.insert(session::USER_ID_KEY, id).unwrap();
    http_session
        .insert(session::USER_NAME_KEY, "Visitor")
        .unwrap();
    http_session
        .insert(session::USER_EMAIL_KEY, "visitor@example.com")
        .unwrap();
    HttpResponse::Ok().finish()
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .wrap(
                    SessionMiddleware::builder(
                        CookieSessionStore::default(),
                        Key::derive_from(TEST_SECRET),
                    )
                    .cookie_secure(false)
                    .build(),
                )
                .app_data(web::Data::new($state))
                .route("/test-login/{id}", web::get().to(login_stub))
                .configure(configure_routes),
        )
        .await
    };
}

fn location_of(resp: &actix_web::dev::ServiceResponse) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .expect("redirect should carry a Location header")
        .to_str()
        .unwrap()
}

macro_rules! session_cookie_for {
    ($app:expr, $user_id:expr) => {{
        let resp = test::call_service(
            &$app,
            test::TestRequest::get()
                .uri(&format!("/test-login/{}", $user_id))
                .to_request(),
        )
        .await;

        resp.response()
            .cookies()
            .next()
            .expect("login stub should set the session cookie")
            .into_owned()
    }};
}

#[actix_web::test]
async fn admin_routes_redirect_anonymous_users_to_login() {
    // The empty mock would fail any query, so reaching the redirect also
    // proves the guard never touched the database.
    let app = test_app!(AppState::new(empty_db()));

    for uri in ["/new-post", "/edit-post/3", "/delete/3"] {
        let resp =
            test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

        assert_eq!(resp.status(), 303, "{uri}");
        assert_eq!(location_of(&resp), "/login", "{uri}");
    }
}

#[actix_web::test]
async fn admin_routes_forbid_other_users() {
    let app = test_app!(AppState::new(empty_db()));
    let cookie = session_cookie_for!(app, 2);

    for uri in ["/new-post", "/edit-post/1", "/delete/1"] {
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(uri)
                .cookie(cookie.clone())
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), 403, "{uri}");
    }
}

#[actix_web::test]
async fn admin_reaches_the_new_post_form() {
    let app = test_app!(AppState::new(empty_db()));
    let cookie = session_cookie_for!(app, 1);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/new-post")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn admin_delete_redirects_to_listing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();
    let app = test_app!(AppState::new(db));
    let cookie = session_cookie_for!(app, 1);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/delete/7")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), 303);
    assert_eq!(location_of(&resp), "/");
}

#[actix_web::test]
async fn deleted_post_disappears_from_the_listing() {
    // One exec for the delete, then the listing query returns only the
    // surviving post.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .append_query_results(vec![vec![(
            stored_post(1, "Keeper"),
            stored_user(1, "admin@example.com", "$argon2id$x"),
        )]])
        .into_connection();
    let app = test_app!(AppState::new(db));
    let cookie = session_cookie_for!(app, 1);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/delete/7")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 303);
    assert_eq!(location_of(&resp), "/");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), 200);

    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("Keeper"));
    assert!(!html.contains("Vanished"), "deleted post still listed");
}

#[actix_web::test]
async fn comment_on_missing_post_renders_a_clean_conflict_page() {
    // The post was deleted between render and submit; the insert trips the
    // post foreign key.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors(vec![DbErr::Custom(
            "insert or update on table \"comments\" violates foreign key constraint \
             \"fk_comments_post\""
                .to_owned(),
        )])
        .into_connection();
    let app = test_app!(AppState::new(db));
    let cookie = session_cookie_for!(app, 2);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/post/999")
            .cookie(cookie)
            .set_form([("body", "first!")])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 409);

    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(
        !html.contains("foreign key") && !html.contains("fk_comments_post"),
        "database internals leaked into the page"
    );
    assert!(html.contains("conflicts with content that already exists"));
}

#[actix_web::test]
async fn concurrent_duplicate_registration_redirects_to_login() {
    // The email lookup sees nothing, then the unique index rejects the
    // insert, as when two registrations race.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<user::Model>::new()])
        .append_query_errors(vec![DbErr::Custom(
            "duplicate key value violates unique constraint \"users_email_key\"".to_owned(),
        )])
        .into_connection();
    let app = test_app!(AppState::new(db));

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/register")
            .set_form([
                ("name", "Ada"),
                ("email", "ada@example.com"),
                ("password", "password123"),
            ])
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), 303);
    assert_eq!(location_of(&resp), "/login");
}

#[actix_web::test]
async fn duplicate_email_registration_redirects_to_login() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![stored_user(1, "ada@example.com", "$argon2id$x")]])
        .into_connection();
    let app = test_app!(AppState::new(db));

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/register")
            .set_form([
                ("name", "Ada"),
                ("email", "ada@example.com"),
                ("password", "password123"),
            ])
            .to_request(),
    )
    .await;

    // No insert was mocked: the redirect proves no second record was written.
    assert_eq!(resp.status(), 303);
    assert_eq!(location_of(&resp), "/login");
}

#[actix_web::test]
async fn login_with_unknown_email_redirects_back() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<user::Model>::new()])
        .into_connection();
    let app = test_app!(AppState::new(db));

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/login")
            .set_form([("email", "ghost@example.com"), ("password", "whatever1")])
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), 303);
    assert_eq!(location_of(&resp), "/login");
}

#[actix_web::test]
async fn login_with_wrong_password_does_not_authenticate() {
    let hash = Argon2PasswordService::new().hash("right-password").unwrap();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![stored_user(2, "ada@example.com", &hash)]])
        .into_connection();
    let app = test_app!(AppState::new(db));

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/login")
            .set_form([("email", "ada@example.com"), ("password", "wrong-password")])
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), 303);
    assert_eq!(location_of(&resp), "/login");
}

#[actix_web::test]
async fn login_with_correct_password_establishes_session() {
    let hash = Argon2PasswordService::new().hash("right-password").unwrap();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![stored_user(2, "ada@example.com", &hash)]])
        .into_connection();
    let app = test_app!(AppState::new(db));

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/login")
            .set_form([("email", "ada@example.com"), ("password", "right-password")])
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), 303);
    assert_eq!(location_of(&resp), "/");
    assert!(
        resp.response().cookies().next().is_some(),
        "login should set the session cookie"
    );
}

#[actix_web::test]
async fn anonymous_comment_is_rejected_without_touching_the_database() {
    // Any repository call would error against the empty mock, so the clean
    // redirect doubles as proof that no Comment row was created.
    let app = test_app!(AppState::new(empty_db()));

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/post/1")
            .set_form([("body", "first!")])
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), 303);
    assert_eq!(location_of(&resp), "/login");
}
