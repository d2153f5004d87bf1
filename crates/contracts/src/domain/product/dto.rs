use serde::{Deserialize, Serialize};

/// A buffalo listed in the product catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Product {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub breed: String,

    #[serde(default)]
    pub age: f64,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub price: f64,

    #[serde(default)]
    pub insurance: f64,

    #[serde(rename = "inStock", default)]
    pub in_stock: bool,

    #[serde(default)]
    pub buffalo_images: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductsResponse {
    #[serde(default)]
    pub products: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_defaults_to_empty() {
        let empty: ProductsResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(empty.products.is_empty());
    }

    #[test]
    fn test_partial_product_decodes() {
        let product: Product =
            serde_json::from_str(r#"{"id": "BUF-7", "breed": "Murrah", "price": 185000}"#).unwrap();
        assert_eq!(product.breed, "Murrah");
        assert!(!product.in_stock);
        assert!(product.buffalo_images.is_empty());
    }
}
