//! [`ActorEntity`] implementation for [`Product`].
//!
//! The catalog is flat, so the default `find`/`find_mut` are kept. Products have no custom
//! actions (`Action = Infallible`); everything goes through insert, update and delete.

use super::error::ProductError;
use crate::model::{is_valid_price, Product, ProductId, ProductUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Update = ProductUpdate;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = ProductError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Rejects a record whose price is negative or not finite.
    async fn on_create(&mut self, _ctx: &()) -> Result<(), ProductError> {
        if !is_valid_price(self.price) {
            return Err(ProductError::InvalidPrice(self.price));
        }
        Ok(())
    }

    /// Merges the present fields. An invalid price rejects the whole update.
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), ProductError> {
        if let Some(price) = update.price.filter(|p| !is_valid_price(*p)) {
            return Err(ProductError::InvalidPrice(price));
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), ProductError> {
        match action {}
    }
}
