//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes catalog operations.
use crate::model::{Product, ProductFilter, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::DuplicateId(id) => ProductError::DuplicateId(id),
            other => other
                .into_entity_error::<ProductError>()
                .unwrap_or_else(|e| ProductError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl ProductClient {
    /// All products, in insertion order.
    pub async fn products(&self) -> Result<Vec<Product>, ProductError> {
        self.list().await
    }

    /// Appends a complete record. Fails when the id is taken or the price is invalid.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub async fn add_product(&self, product: Product) -> Result<ProductId, ProductError> {
        debug!(?product, "add_product called");
        self.inner.insert(product).await.map_err(Self::map_error)
    }

    /// Merges `update` into the product and returns the result.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Returns `false` when there was no such product.
    pub async fn delete_product(&self, id: ProductId) -> Result<bool, ProductError> {
        self.delete(id).await
    }

    #[instrument(skip(self, products), fields(count = products.len()))]
    pub async fn replace_all(&self, products: Vec<Product>) -> Result<(), ProductError> {
        self.inner
            .replace_all(products)
            .await
            .map_err(Self::map_error)
    }

    pub async fn search(&self, filter: &ProductFilter) -> Result<Vec<Product>, ProductError> {
        let products = self.list().await?;
        Ok(products.into_iter().filter(|p| filter.matches(p)).collect())
    }

    /// Products in the notebook category, the ones with material consumption.
    pub async fn notebooks(&self) -> Result<Vec<Product>, ProductError> {
        let products = self.list().await?;
        Ok(products.into_iter().filter(Product::is_notebook).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_insert, expect_update, MockClient};

    fn tn() -> Product {
        Product::new("5", "TN收纳册", "收纳册", 75.0, 60)
    }

    #[tokio::test]
    async fn test_add_product_sends_whole_record() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let add_task = tokio::spawn(async move { product_client.add_product(tn()).await });

        let (item, responder) = expect_insert(&mut receiver)
            .await
            .expect("Expected Insert request");
        assert_eq!(item.name, "TN收纳册");
        responder.send(Ok(item.id)).unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(result.unwrap(), ProductId::from("5"));
    }

    #[tokio::test]
    async fn test_update_maps_entity_errors_back() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let update_task = tokio::spawn(async move {
            let update = ProductUpdate {
                price: Some(-1.0),
                ..Default::default()
            };
            product_client.update_product("5".into(), update).await
        });

        let (id, update, responder) = expect_update(&mut receiver).await.unwrap();
        assert_eq!(id, ProductId::from("5"));
        assert_eq!(update.price, Some(-1.0));
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                ProductError::InvalidPrice(-1.0),
            ))))
            .unwrap();

        let result = update_task.await.unwrap();
        assert_eq!(result, Err(ProductError::InvalidPrice(-1.0)));
    }

    #[tokio::test]
    async fn test_framework_errors_become_product_errors() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_insert()
            .return_err(FrameworkError::DuplicateId("5".into()));
        mock.expect_list().return_err(FrameworkError::ActorClosed);

        let client = ProductClient::new(mock.client());
        assert_eq!(
            client.add_product(tn()).await,
            Err(ProductError::DuplicateId("5".into()))
        );
        assert!(matches!(
            client.products().await,
            Err(ProductError::ActorCommunicationError(_))
        ));
        mock.verify();
    }

    #[tokio::test]
    async fn test_notebooks_and_search_filter_the_list() {
        let mut mock = MockClient::<Product>::new();
        let sticker =
            Product::new("9", "贴纸", "配件", 5.0, 300).with_description("TN配套贴纸");
        mock.expect_list().return_ok(vec![tn(), sticker.clone()]);
        mock.expect_list().return_ok(vec![tn(), sticker]);

        let client = ProductClient::new(mock.client());
        let notebooks = client.notebooks().await.unwrap();
        assert_eq!(notebooks.len(), 1);
        assert_eq!(notebooks[0].id, ProductId::from("5"));

        let hits = client.search(&ProductFilter::text("tn")).await.unwrap();
        assert_eq!(hits.len(), 2);
        mock.verify();
    }
}
