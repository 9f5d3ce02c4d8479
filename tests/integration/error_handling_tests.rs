//! Error handling integration tests
//!
//! Verify that gateway errors map to the HTTP statuses callers see:
//! empty reads are 204, rejected writes are 400, everything else is 500.

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;
    use batch_gateway::GatewayError;

    #[test]
    fn test_not_found_is_no_content() {
        let err = GatewayError::not_found("no batches for trainer 7");

        let response = err.error_response();
        assert_eq!(response.status().as_u16(), 204);
    }

    #[test]
    fn test_bad_request_is_400() {
        let err = GatewayError::bad_request("batch was not accepted by the store");

        let response = err.error_response();
        assert_eq!(response.status().as_u16(), 400);
    }

    #[test]
    fn test_storage_error_is_500() {
        let err = GatewayError::storage("store offline");

        let response = err.error_response();
        assert_eq!(response.status().as_u16(), 500);
    }

    #[test]
    fn test_config_error_is_500() {
        let err = GatewayError::config("bad yaml");

        let response = err.error_response();
        assert_eq!(response.status().as_u16(), 500);
    }

    #[test]
    fn test_io_errors_convert_and_map_to_500() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing seed file");
        let err: GatewayError = io.into();

        assert!(matches!(err, GatewayError::Io(_)));
        assert_eq!(err.error_response().status().as_u16(), 500);
    }

    #[test]
    fn test_error_messages_are_human_readable() {
        let err = GatewayError::not_found("no batch in progress for dana@example.com");
        assert_eq!(
            err.to_string(),
            "Not found: no batch in progress for dana@example.com"
        );

        let err = GatewayError::bad_request("unknown batch id 99");
        assert_eq!(err.to_string(), "Bad request: unknown batch id 99");
    }
}
