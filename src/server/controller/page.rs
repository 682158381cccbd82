//! Server-rendered HTML pages.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use dioxus::prelude::*;

use crate::server::{
    controller::param::MAX_ENTRIES,
    error::AppError,
    model::business::{Business, BusinessDetail},
    service::business::BusinessService,
    state::AppState,
    util::html::format_price,
};

/// Landing page listing the businesses that take bookings.
pub async fn landing(State(state): State<AppState>) -> Result<Response, AppError> {
    let businesses = BusinessService::new(&state.db)
        .get_paginated(0, MAX_ENTRIES)
        .await?
        .businesses;

    let body = rsx! {
        h1 { "BarberBook" }
        p { "Book your next cut online." }
        if businesses.is_empty() {
            p { "No businesses are taking bookings yet." }
        } else {
            ul { class: "businesses",
                for business in businesses.iter() {
                    {business_list_item(business)}
                }
            }
        }
    };

    Ok(Html(render_page("BarberBook", body)).into_response())
}

/// Public page of a business with its services and prices.
pub async fn business_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    match BusinessService::new(&state.db).get_detail(id).await {
        Ok(detail) => {
            let page = render_page(&detail.business.name, business_body(&detail));
            Ok(Html(page).into_response())
        }
        Err(AppError::NotFound(_)) => Ok(not_found()),
        Err(err) => Err(err),
    }
}

fn business_list_item(business: &Business) -> Element {
    let href = format!("/businesses/{}", business.id);
    let name = business.name.as_str();

    rsx! {
        li {
            a { href: "{href}", "{name}" }
            if let Some(address) = business.address.as_deref() {
                " "
                small { "{address}" }
            }
        }
    }
}

fn business_body(detail: &BusinessDetail) -> Element {
    let business = &detail.business;
    let name = business.name.as_str();
    let services = detail
        .services
        .iter()
        .map(|s| {
            let price = format_price(s.price_cents, &business.settings.currency);
            (s.name.as_str(), s.duration_minutes, price)
        })
        .collect::<Vec<_>>();
    let hours = format!(
        "Open {:02}:00 to {:02}:00 UTC",
        business.settings.opening_hour, business.settings.closing_hour
    );
    let team = detail
        .workers
        .iter()
        .map(|w| w.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    rsx! {
        h1 { "{name}" }
        if let Some(description) = business.description.as_deref() {
            p { "{description}" }
        }
        if let Some(address) = business.address.as_deref() {
            p { class: "address", "{address}" }
        }
        if let Some(phone) = business.phone.as_deref() {
            p { class: "phone", "{phone}" }
        }
        p { class: "hours", "{hours}" }

        h2 { "Services" }
        if services.is_empty() {
            p { "No services are offered yet." }
        } else {
            table { class: "services",
                for (service, minutes, price) in services {
                    tr {
                        td { "{service}" }
                        td { "{minutes} min" }
                        td { "{price}" }
                    }
                }
            }
        }

        if !team.is_empty() {
            h2 { "Our team" }
            p { "{team}" }
        }
        p { a { href: "/", "All businesses" } }
    }
}

fn not_found() -> Response {
    let body = rsx! {
        h1 { "Not found" }
        p { "This business does not exist." }
        p { a { href: "/", "All businesses" } }
    };

    (StatusCode::NOT_FOUND, Html(render_page("Not found", body))).into_response()
}

/// Wraps `content` in the shared document shell and renders it to a string.
fn render_page(title: &str, content: Element) -> String {
    let document = rsx! {
        html { lang: "en",
            head {
                meta { charset: "utf-8" }
                meta { name: "viewport", content: "width=device-width, initial-scale=1" }
                title { "{title}" }
            }
            body {
                main { {content} }
            }
        }
    };

    format!("<!DOCTYPE html>\n{}", dioxus_ssr::render_element(document))
}
