//! Static home page describing the API.

use askama::Template;
use axum::response::{Html, IntoResponse, Response};

/// One row of the endpoint table.
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: "GET",
        path: "/api/random",
        description: "A single cafe picked at random.",
    },
    Endpoint {
        method: "GET",
        path: "/api/all",
        description: "Every cafe, ordered by name.",
    },
    Endpoint {
        method: "GET",
        path: "/api/search?loc=<location>",
        description: "Cafes whose location matches exactly.",
    },
    Endpoint {
        method: "POST",
        path: "/api/add",
        description: "Add a cafe from form fields: name, map_url, img_url, loc, sockets, toilet, wifi, calls, seats, coffee_price.",
    },
    Endpoint {
        method: "PATCH",
        path: "/api/update-price/<id>?new_price=<price>",
        description: "Change the coffee price of a cafe.",
    },
    Endpoint {
        method: "DELETE",
        path: "/api/report-closed/<id>?api-key=<key>",
        description: "Remove a closed cafe. Requires the API key.",
    },
];

/// Home page template.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    title: &'static str,
    endpoints: &'static [Endpoint],
}

impl IntoResponse for IndexTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /`: static overview of the API.
pub async fn index() -> IndexTemplate {
    IndexTemplate {
        title: "Cafe & Wifi API",
        endpoints: ENDPOINTS,
    }
}
