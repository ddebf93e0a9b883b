use contracts::domain::a008_support_ticket::SupportTicket;
use contracts::shared::{decode_mutation, ApiResponse};
use serde_json::json;

use crate::shared::api::{fetch_record, ApiClient, ApiError, ApiRequest};

pub async fn fetch_by_id(client: &dyn ApiClient, id: &str) -> Result<SupportTicket, ApiError> {
    fetch_record(client, ApiRequest::get(format!("/admin/support/{}", id)), Some("ticket")).await
}

/// Flip open / closed; returns the ticket as the server has it now
pub async fn toggle_status(client: &dyn ApiClient, ticket: &SupportTicket) -> Result<SupportTicket, ApiError> {
    let next = ticket.status.toggled();
    let request = ApiRequest::patch(format!("/admin/support/{}/status", ticket.id))
        .with_json(&json!({ "status": next }))?;
    let body = client.send(request).await?;
    match decode_mutation::<SupportTicket>(body, Some("ticket")).map_err(ApiError::Shape)? {
        ApiResponse::Success(echoed) => Ok(echoed.unwrap_or_else(|| SupportTicket {
            status: next,
            ..ticket.clone()
        })),
        ApiResponse::Failure { message } => Err(ApiError::Rejected(message)),
    }
}
