//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Brewery API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Brewery API",
        version = "0.1.0",
        description = "Read API for the brewery beer catalog",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/v1/beer", api = domain_beers::ApiDoc)
    ),
    tags(
        (name = "Beers", description = "Beer catalog endpoints")
    )
)]
pub struct ApiDoc;
