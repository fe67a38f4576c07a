use maud::{html, Markup};

use crate::templates::layouts::{base, PageConfig};

pub const API_TITLE: &str = "Hawaii Weather Station API";

/// One row of the endpoint listing on the home page
pub struct Endpoint {
    /// Route as documented, with `$start`/`$end` placeholders
    pub route: &'static str,
    /// Concrete link that can be followed as-is
    pub example: &'static str,
    pub description: &'static str,
}

pub fn endpoint_listing() -> Vec<Endpoint> {
    vec![
        Endpoint {
            route: "/api/v1.0/precipitation",
            example: "/api/v1.0/precipitation",
            description: "returns consolidated precipitation data",
        },
        Endpoint {
            route: "/api/v1.0/stations",
            example: "/api/v1.0/stations",
            description: "returns a list of weather stations",
        },
        Endpoint {
            route: "/api/v1.0/tobs",
            example: "/api/v1.0/tobs",
            description: "returns temperature observations from the prior year",
        },
        Endpoint {
            route: "/api/v1.0/$start",
            example: "/api/v1.0/2017-08-10",
            description:
                "returns temperature min, mean, and max for all dates on or after $start",
        },
        Endpoint {
            route: "/api/v1.0/$start/$end",
            example: "/api/v1.0/2017-08-10/2017-08-20",
            description:
                "returns temperature min, mean, and max for all dates between $start and $end",
        },
    ]
}

pub fn home_page() -> Markup {
    let config = PageConfig { title: API_TITLE };

    base(&config, content())
}

fn content() -> Markup {
    html! {
        div class="content" {
            h2 class="subtitle" { "Available endpoints:" }
            ul {
                @for endpoint in endpoint_listing() {
                    li {
                        code {
                            a href=(endpoint.example) { (endpoint.route) }
                        }
                        " - " (endpoint.description)
                    }
                }
                li {
                    i { "(please supply dates in ISO 8601 format, i.e. '2017-08-10')" }
                }
            }
        }
    }
}
