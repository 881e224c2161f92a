use utoipa::OpenApi;

/// Root OpenAPI document; paths are relative to the `/api` prefix.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calendar API",
        description = "Create, list, update and delete calendar events"
    ),
    servers((url = "/api")),
    nest(
        (path = "/events", api = domain_events::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_paths_are_nested() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/events"), "{:?}", paths);
        assert!(paths.iter().any(|p| p.as_str() == "/events/{id}"), "{:?}", paths);
    }
}
