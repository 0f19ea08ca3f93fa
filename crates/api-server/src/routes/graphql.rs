//! GraphQL endpoint
//!
//! `POST /graphql` executes operations; `GET /graphql` serves GraphiQL when
//! enabled.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};

use crate::state::AppState;

const ENDPOINT: &str = "/graphql";

async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema().execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(ENDPOINT).finish())
}

pub fn router(graphiql_enabled: bool) -> Router<AppState> {
    let route = if graphiql_enabled {
        get(graphiql).post(graphql_handler)
    } else {
        post(graphql_handler)
    };
    Router::new().route(ENDPOINT, route)
}
