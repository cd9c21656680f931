//! HTTP handlers for Beers API

use axum::{extract::State, routing::get, Json, Router};
use axum_helpers::{
    errors::responses::{
        BadRequestQueryResponse, BadRequestUuidResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
    pagination::{Pageable, PagedResult},
    UuidPath, ValidatedQuery,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::BeerResult;
use crate::models::{Beer, BeerListQuery, BeerStyle};
use crate::service::BeerService;

/// OpenAPI documentation for Beers API
#[derive(OpenApi)]
#[openapi(
    paths(list_beers, get_beer_by_id),
    components(
        schemas(Beer, BeerStyle, Pageable, PagedResult<Beer>),
        responses(
            NotFoundResponse,
            BadRequestQueryResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Beers", description = "Beer catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the beers router with all HTTP endpoints
pub fn router<S: BeerService + 'static>(service: S) -> Router {
    let shared_service: Arc<dyn BeerService> = Arc::new(service);

    Router::new()
        .route("/", get(list_beers))
        .route("/{id}", get(get_beer_by_id))
        .with_state(shared_service)
}

/// List beers, optionally filtered by name and style, one page at a time
#[utoipa::path(
    get,
    path = "",
    tag = "Beers",
    params(BeerListQuery),
    responses(
        (status = 200, description = "One page of beers", body = PagedResult<Beer>),
        (status = 400, response = BadRequestQueryResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_beers(
    State(service): State<Arc<dyn BeerService>>,
    ValidatedQuery(query): ValidatedQuery<BeerListQuery>,
) -> BeerResult<Json<PagedResult<Beer>>> {
    let page = query.page_request()?;
    let beers = service
        .list_beers(query.beer_name, query.beer_style, page)
        .await?;
    Ok(Json(beers))
}

/// Get a beer by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Beers",
    params(
        ("id" = Uuid, Path, description = "Beer ID")
    ),
    responses(
        (status = 200, description = "Beer found", body = Beer),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_beer_by_id(
    State(service): State<Arc<dyn BeerService>>,
    UuidPath(id): UuidPath,
) -> BeerResult<Json<Beer>> {
    let beer = service.get_beer_by_id(id).await?;
    Ok(Json(beer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BeerError;
    use crate::service::MockBeerService;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_helpers::pagination::PageRequest;
    use chrono::DateTime;
    use http_body_util::BodyExt;
    use rust_decimal::Decimal;
    use serde_json::Value;
    use tower::ServiceExt;
    use uuid::Uuid;

    async fn send(app: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn valid_beer() -> Beer {
        Beer {
            id: Uuid::now_v7(),
            version: 1,
            beer_name: "Beer1".to_string(),
            beer_style: BeerStyle::PaleAle,
            price: Decimal::new(1299, 2),
            quantity_on_hand: 4,
            upc: 123_456_789_012,
            created_date: Some(DateTime::parse_from_rfc3339("2019-05-12T10:20:30+00:00").unwrap()),
            last_modified_date: Some(
                DateTime::parse_from_rfc3339("2019-05-13T08:00:00+00:00").unwrap(),
            ),
        }
    }

    #[tokio::test]
    async fn test_get_beer_by_id() {
        let beer = valid_beer();
        let id = beer.id;
        let mut service = MockBeerService::new();
        service
            .expect_get_beer_by_id()
            .withf(move |requested| *requested == id)
            .times(1)
            .returning(move |_| Ok(beer.clone()));

        let (status, body) = send(router(service), &format!("/{}", id)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], id.to_string());
        assert_eq!(body["beerName"], "Beer1");
        assert_eq!(body["beerStyle"], "PALE_ALE");
        assert_eq!(body["price"], 12.99);
        assert_eq!(body["quantityOnHand"], 4);
        assert_eq!(body["upc"], 123_456_789_012_i64);
        assert_eq!(body["createdDate"], "2019-05-12T10:20:30+0000");
        assert_eq!(body["lastModifiedDate"], "2019-05-13T08:00:00+0000");
    }

    #[tokio::test]
    async fn test_get_beer_by_id_not_found() {
        let mut service = MockBeerService::new();
        service
            .expect_get_beer_by_id()
            .returning(|id| Err(BeerError::NotFound(id)));

        let (status, body) = send(router(service), &format!("/{}", Uuid::now_v7())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_get_beer_by_id_malformed_id() {
        let mut service = MockBeerService::new();
        service.expect_get_beer_by_id().never();

        let (status, body) = send(router(service), "/not-a-uuid").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "INVALID_UUID");
    }

    #[tokio::test]
    async fn test_service_failure_is_500() {
        let mut service = MockBeerService::new();
        service
            .expect_get_beer_by_id()
            .returning(|_| Err(BeerError::Repository("disk on fire".into())));

        let (status, body) = send(router(service), &format!("/{}", Uuid::now_v7())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "INTERNAL_ERROR");
        assert!(!body["message"].as_str().unwrap().contains("disk"));
    }

    mod list_operations {
        use super::*;

        struct Fixture {
            beers: Vec<Beer>,
        }

        impl Fixture {
            fn new() -> Self {
                let mut beer4 = valid_beer();
                beer4.id = Uuid::now_v7();
                beer4.beer_name = "Beer4".to_string();

                Self {
                    beers: vec![valid_beer(), beer4],
                }
            }

            /// A service that answers every listing with `page` of the fixture
            /// beers, after checking the arguments the controller passed.
            fn service(
                &self,
                name: Option<&'static str>,
                style: Option<BeerStyle>,
                page: PageRequest,
            ) -> MockBeerService {
                let beers = self.beers.clone();
                let mut service = MockBeerService::new();
                service
                    .expect_list_beers()
                    .withf(move |n, s, p| n.as_deref() == name && *s == style && *p == page)
                    .times(1)
                    .returning(move |_, _, page| {
                        let total = beers.len() as u64;
                        let start = usize::try_from(page.offset()).unwrap().min(beers.len());
                        let content = beers
                            .iter()
                            .skip(start)
                            .take(page.page_size() as usize)
                            .cloned()
                            .collect();
                        Ok(PagedResult::new(content, page, total))
                    });
                service
            }
        }

        #[tokio::test]
        async fn test_list_beers_defaults() {
            let fixture = Fixture::new();
            let service = fixture.service(None, None, PageRequest::default());

            let (status, body) = send(router(service), "/").await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["content"].as_array().unwrap().len(), 2);
            assert_eq!(body["totalElements"], 2);
            assert_eq!(body["size"], 25);
            assert_eq!(body["number"], 0);
            assert_eq!(body["first"], true);
            assert_eq!(body["last"], true);
        }

        #[tokio::test]
        async fn test_list_beers_second_page_of_one() {
            let fixture = Fixture::new();
            let service = fixture.service(None, None, PageRequest::new(1, 1).unwrap());

            let (status, body) = send(router(service), "/?pageNumber=1&pageSize=1").await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["content"].as_array().unwrap().len(), 1);
            assert_eq!(body["content"][0]["beerName"], "Beer4");
            assert_eq!(body["totalElements"], 2);
            assert_eq!(body["totalPages"], 2);
            assert_eq!(
                body["pageable"],
                serde_json::json!({"pageNumber": 1, "pageSize": 1, "offset": 1})
            );
        }

        #[tokio::test]
        async fn test_list_beers_passes_filters_unchanged() {
            let fixture = Fixture::new();
            let service = fixture.service(
                Some("Beer1"),
                Some(BeerStyle::PaleAle),
                PageRequest::new(0, 10).unwrap(),
            );

            let (status, _) = send(
                router(service),
                "/?beerName=Beer1&beerStyle=PALE_ALE&pageNumber=0&pageSize=10",
            )
            .await;

            assert_eq!(status, StatusCode::OK);
        }

        #[tokio::test]
        async fn test_list_beers_rejects_unknown_style() {
            let mut service = MockBeerService::new();
            service.expect_list_beers().never();

            let (status, body) = send(router(service), "/?beerStyle=DUNKEL").await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "INVALID_QUERY");
        }

        #[tokio::test]
        async fn test_list_beers_renders_service_page_unchanged() {
            let fixture = Fixture::new();
            let beers = fixture.beers.clone();
            let page = PageRequest::new(1, 1).unwrap();
            let mut service = MockBeerService::new();
            service
                .expect_list_beers()
                .withf(move |_, _, p| *p == page)
                .times(1)
                .returning(move |_, _, page| Ok(PagedResult::new(beers.clone(), page, 2)));

            let (status, body) = send(router(service), "/?pageNumber=1&pageSize=1").await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["content"].as_array().unwrap().len(), 2);
            assert_eq!(body["content"][0]["beerName"], "Beer1");
            assert_eq!(body["content"][1]["beerName"], "Beer4");
            assert_eq!(body["totalElements"], 2);
            assert_eq!(body["numberOfElements"], 2);
            assert_eq!(body["pageable"]["pageNumber"], 1);
            assert_eq!(body["pageable"]["pageSize"], 1);
        }

        #[tokio::test]
        async fn test_list_beers_empty_filters_mean_no_filter() {
            let fixture = Fixture::new();
            let service = fixture.service(None, None, PageRequest::default());

            let (status, body) = send(router(service), "/?beerName=&beerStyle=").await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["totalElements"], 2);
        }

        #[tokio::test]
        async fn test_list_beers_caps_large_page_size() {
            let fixture = Fixture::new();
            let service = fixture.service(None, None, PageRequest::new(0, 1000).unwrap());

            let (status, body) = send(router(service), "/?pageSize=2000").await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["size"], 1000);
            assert_eq!(body["pageable"]["pageSize"], 1000);
            assert_eq!(body["content"].as_array().unwrap().len(), 2);
        }

        #[tokio::test]
        async fn test_list_beers_rejects_zero_page_size() {
            let mut service = MockBeerService::new();
            service.expect_list_beers().never();

            let (status, body) = send(router(service), "/?pageSize=0").await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "VALIDATION_ERROR");
            assert_eq!(body["details"]["pageSize"][0]["code"], "range");
        }

        #[tokio::test]
        async fn test_list_beers_rejects_non_numeric_page() {
            let mut service = MockBeerService::new();
            service.expect_list_beers().never();

            let (status, body) = send(router(service), "/?pageNumber=first").await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "INVALID_QUERY");
        }
    }
}
