//! HTTP span helpers.

use uuid::Uuid;

/// Placeholder for the client-chosen session segment.
const SESSION_PLACEHOLDER: &str = "{session}";

/// Placeholder for product and other UUID segments.
const UUID_PLACEHOLDER: &str = "{uuid}";

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    /// Path with identifiers replaced, bounded in cardinality.
    pub(super) route: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let route = normalise_route(path);
    let otel_span_name = format!("{method} {route}");

    RequestSpanName {
        route,
        otel_span_name,
    }
}

/// Replace identifiers in a request path so spans and metric labels stay
/// low-cardinality. Session ids are arbitrary strings and are recognised by
/// position, directly after a `sessions` segment.
fn normalise_route(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut normalised = String::from("/");
    let mut session_follows = false;

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            normalised.push('/');
        }

        if session_follows {
            normalised.push_str(SESSION_PLACEHOLDER);
            session_follows = false;

            continue;
        }

        if Uuid::parse_str(segment).is_ok() {
            normalised.push_str(UUID_PLACEHOLDER);
        } else {
            normalised.push_str(segment);
        }

        session_follows = segment == "sessions";
    }

    normalised
}
