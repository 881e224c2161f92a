//! Page tests for the Events domain
//!
//! Form submissions against the HTML router, backed by the in-memory
//! repository.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::NaiveDate;
use domain_events::*;
use http_body_util::BodyExt;
use tower::ServiceExt; // For oneshot()

async fn html_body(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn setup() -> (Router, EventService<InMemoryEventRepository>) {
    let service = EventService::new(InMemoryEventRepository::new());
    let app = pages::router(service.clone()).unwrap();
    (app, service)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn create_lunch(service: &EventService<InMemoryEventRepository>) -> Event {
    let day = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
    service
        .create_event(EventInput {
            title: Some("Lunch with Sam".to_string()),
            start_date: day.and_hms_opt(12, 0, 0),
            end_date: day.and_hms_opt(13, 0, 0),
            location: Some("Cafe".to_string()),
            category: Some("Personal".to_string()),
            ..EventInput::default()
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn test_root_redirects_to_list() {
    let (app, _) = setup();
    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/events");
}

#[tokio::test]
async fn test_list_page_shows_events_and_notice() {
    let (app, service) = setup();
    create_lunch(&service).await;

    let response = app.oneshot(get("/events?notice=created")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = html_body(response.into_body()).await;
    assert!(html.contains("Lunch with Sam"));
    assert!(html.contains("#10b981"));
    assert!(html.contains("Event created successfully."));
}

#[tokio::test]
async fn test_unknown_notice_is_ignored() {
    let (app, _) = setup();
    let response = app.oneshot(get("/events?notice=whatever")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = html_body(response.into_body()).await;
    assert!(html.contains("No events yet."));
}

#[tokio::test]
async fn test_create_submit_redirects() {
    let (app, service) = setup();

    let response = app
        .oneshot(form_post(
            "/events/create",
            "title=Dentist&description=&startDate=2025-04-03T08%3A30&endDate=2025-04-03T09%3A00&location=&category=Personal",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/events?notice=created");

    let events = service.list_events(EventFilter::default()).await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "Dentist");
    assert_eq!(events[0].location, None);
}

#[tokio::test]
async fn test_create_submit_redisplays_errors() {
    let (app, service) = setup();

    let response = app
        .oneshot(form_post(
            "/events/create",
            "title=Team+%3Cb%3Eparty%3C%2Fb%3E&startDate=2025-04-03T09%3A00&endDate=2025-04-05T09%3A00&category=Work",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = html_body(response.into_body()).await;
    assert!(html.contains("Non-all-day events cannot exceed 24 hours"));
    assert!(html.contains("Team &lt;b&gt;party&lt;/b&gt;"));
    assert!(html.contains(r#"value="2025-04-03T09:00""#));

    assert_eq!(service.repository().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_edit_form_prefills_values() {
    let (app, service) = setup();
    let event = create_lunch(&service).await;

    let response = app
        .oneshot(get(&format!("/events/{}/edit", event.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = html_body(response.into_body()).await;
    assert!(html.contains(r#"value="Lunch with Sam""#));
    assert!(html.contains(r#"value="2025-04-02T12:00""#));
    assert!(html.contains(r#"<option value="Personal" selected>"#));
}

#[tokio::test]
async fn test_edit_missing_or_invalid_id_is_not_found() {
    let (app, _) = setup();

    for uri in ["/events/77/edit", "/events/abc/edit"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "uri {}", uri);
    }
}

#[tokio::test]
async fn test_edit_submit_updates() {
    let (app, service) = setup();
    let event = create_lunch(&service).await;

    let body = format!(
        "id={}&title=Long+lunch&startDate=2025-04-02T12%3A00&endDate=2025-04-02T14%3A00&location=Cafe&category=Personal",
        event.id
    );
    let response = app
        .oneshot(form_post(&format!("/events/{}/edit", event.id), &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/events?notice=updated");

    let updated = service.get_event(event.id).await.unwrap();
    assert_eq!(updated.title, "Long lunch");
}

#[tokio::test]
async fn test_edit_submit_with_foreign_id_is_not_found() {
    let (app, service) = setup();
    let event = create_lunch(&service).await;

    let body = format!(
        "id={}&title=Moved&startDate=2025-04-02T12%3A00&endDate=2025-04-02T13%3A00&category=Work",
        event.id + 1
    );
    let response = app
        .oneshot(form_post(&format!("/events/{}/edit", event.id), &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(service.get_event(event.id).await.unwrap().title, "Lunch with Sam");
}

#[tokio::test]
async fn test_delete_submit() {
    let (app, service) = setup();
    let event = create_lunch(&service).await;

    let response = app
        .clone()
        .oneshot(form_post(&format!("/events/{}/delete", event.id), ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/events?notice=deleted");
    assert_eq!(service.repository().count().await.unwrap(), 0);

    let response = app
        .oneshot(form_post(&format!("/events/{}/delete", event.id), ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unreadable_submission_renders_page() {
    let (app, service) = setup();
    let lunch = create_lunch(&service).await;

    for uri in ["/events/create".to_string(), format!("/events/{}/edit", lunch.id)] {
        let request = Request::builder()
            .method("POST")
            .uri(&uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
        assert!(html_body(response.into_body()).await.contains("Form could not be read"));
    }

    assert_eq!(service.list_events(EventFilter::default()).await.unwrap().len(), 1);
}
