//! Route labels for logs and metrics.

use uuid::Uuid;

/// Replace UUID path segments with `{uuid}` to keep label cardinality bounded.
pub(super) fn normalise_route(path: &str) -> String {
    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if Uuid::parse_str(segment).is_ok() {
                "{uuid}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_segments_are_replaced() {
        assert_eq!(
            normalise_route("/products/0190a8f4-8ad4-7c4e-9d3a-1b2c3d4e5f60"),
            "/products/{uuid}"
        );
    }

    #[test]
    fn plain_paths_are_unchanged() {
        assert_eq!(normalise_route("/products"), "/products");
        assert_eq!(normalise_route("/"), "/");
    }
}
