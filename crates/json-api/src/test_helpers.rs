//! Test helpers.

use std::sync::Arc;

use jiff::civil::date;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use catalog_app::{
    context::AppContext,
    domain::products::{MockProductsService, models::ProductRepresentation},
};

use crate::state::State;

pub(crate) fn make_product(name: &str) -> ProductRepresentation {
    ProductRepresentation {
        name: Some(name.to_string()),
        description: Some("test".to_string()),
        price: Some(Decimal::TEN),
        created_at: Some(date(2026, 1, 1)),
        updated_at: None,
    }
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
    })
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}
