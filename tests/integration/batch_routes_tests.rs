//! Batch route integration tests
//!
//! Drives the `/api/v2/Batch` surface end-to-end: seeded store, real
//! routing, JSON bodies, and the documented status codes.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test, web};

    use crate::common::fixtures::{BatchFactory, seeded_store};
    use batch_gateway::server::AppState;
    use batch_gateway::server::routes::batch::configure_batch_routes;
    use batch_gateway::storage::MemoryStore;
    use batch_gateway::{Batch, Config};

    fn app_state(store: Arc<MemoryStore>) -> web::Data<AppState> {
        web::Data::new(AppState::new(Config::default(), store.clone(), store))
    }

    macro_rules! service {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .app_data(app_state($store))
                    .configure(configure_batch_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_trainer_window_queries_end_to_end() {
        let app = service!(Arc::new(seeded_store()));

        // Dana owns one batch per window; each filter returns exactly it.
        for (path, expected) in [
            ("/api/v2/Batch/past/dana@example.com", "ended"),
            ("/api/v2/Batch/future/dana@example.com", "upcoming"),
            ("/api/v2/Batch/allinprogress/dana@example.com", "running"),
        ] {
            let resp =
                test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
            assert_eq!(resp.status().as_u16(), 200, "{}", path);

            let batches: Vec<Batch> = test::read_body_json(resp).await;
            assert_eq!(batches.len(), 1, "{}", path);
            assert_eq!(batches[0].name, expected, "{}", path);
        }

        // The single-result endpoint returns one record, not a list.
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v2/Batch/inprogress/dana@example.com")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status().as_u16(), 200);
        let batch: Batch = test::read_body_json(resp).await;
        assert_eq!(batch.name, "running");
    }

    #[actix_web::test]
    async fn test_empty_results_are_204_across_the_surface() {
        let app = service!(Arc::new(seeded_store()));

        // Lee exists but owns nothing; the unknown address resolves nowhere.
        for path in [
            "/api/v2/Batch/past/lee@example.com",
            "/api/v2/Batch/future/lee@example.com",
            "/api/v2/Batch/inprogress/lee@example.com",
            "/api/v2/Batch/allinprogress/lee@example.com",
            "/api/v2/Batch/inprogress/nobody@example.com",
            "/api/v2/Batch/byid/999",
        ] {
            let resp =
                test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
            assert_eq!(resp.status().as_u16(), 204, "{}", path);

            let body = test::read_body(resp).await;
            assert!(body.is_empty(), "{}", path);
        }
    }

    #[actix_web::test]
    async fn test_create_then_read_back_round_trip() {
        let app = service!(Arc::new(seeded_store()));

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v2/Batch/updatebatch")
                .set_json(BatchFactory::future("brand-new", 2))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status().as_u16(), 202);
        let stored: Batch = test::read_body_json(resp).await;
        let id = stored.id.expect("store assigns an id on create");

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/api/v2/Batch/byid/{}", id))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status().as_u16(), 200);
        let fetched: Batch = test::read_body_json(resp).await;
        assert_eq!(fetched, stored);
    }

    #[actix_web::test]
    async fn test_update_echoes_the_stored_record() {
        let store = Arc::new(seeded_store());
        let app = service!(store.clone());

        let mut renamed = BatchFactory::in_progress("running-renamed", 1);
        renamed.id = Some(2); // "running" seeded second

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v2/Batch/updatebatch")
                .set_json(renamed.clone())
                .to_request(),
        )
        .await;
        assert_eq!(resp.status().as_u16(), 202);
        let stored: Batch = test::read_body_json(resp).await;
        assert_eq!(stored, renamed);
    }

    #[actix_web::test]
    async fn test_rejected_write_is_400_with_error_body() {
        let app = service!(Arc::new(seeded_store()));

        let mut ghost = BatchFactory::past("ghost", 1);
        ghost.id = Some(404);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v2/Batch/updatebatch")
                .set_json(ghost)
                .to_request(),
        )
        .await;
        assert_eq!(resp.status().as_u16(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
        assert!(
            body["error"]["message"]
                .as_str()
                .unwrap()
                .contains("not accepted")
        );
    }

    #[actix_web::test]
    async fn test_global_listings() {
        let store = Arc::new(seeded_store());
        let app = service!(store.clone());

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v2/Batch/all")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status().as_u16(), 200);
        let all: Vec<Batch> = test::read_body_json(resp).await;
        assert_eq!(all.len(), 3);

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v2/Batch/currentbatches")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status().as_u16(), 200);
        let current: Vec<Batch> = test::read_body_json(resp).await;
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].name, "running");

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v2/Batch/batchtypes")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status().as_u16(), 200);
    }
}
