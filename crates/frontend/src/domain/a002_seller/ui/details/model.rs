use contracts::domain::a002_seller::Seller;

use crate::shared::api::{fetch_record, ApiClient, ApiError, ApiRequest};

pub async fn fetch_by_id(client: &dyn ApiClient, id: &str) -> Result<Seller, ApiError> {
    fetch_record(client, ApiRequest::get(format!("/admin/sellers/{}", id)), Some("seller")).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::ScriptedClient;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_fetch_by_id() {
        let client = ScriptedClient::new().respond(Ok(json!({
            "status": true,
            "data": { "seller": { "_id": "s1", "name": "Acme", "email": "a@shop.io", "isActive": true } }
        })));
        let seller = block_on(fetch_by_id(&client, "s1")).unwrap();
        assert_eq!(seller.name, "Acme");
        assert!(seller.is_active);
        assert_eq!(client.requests()[0].path, "/admin/sellers/s1");
    }
}
