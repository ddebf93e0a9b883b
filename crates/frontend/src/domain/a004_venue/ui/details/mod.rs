use contracts::domain::a004_venue::{Venue, VenueDto};
use contracts::shared::validation::{FieldSpec, ValidationRules};
use serde_json::json;

use crate::shared::api::{ApiError, ApiRequest};
use crate::shared::crud::{Attachment, FormModel};

impl FormModel for VenueDto {
    type Record = Venue;

    const NOUN: &'static str = "venue";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name", "Name", ValidationRules::required().length(2, 100)),
        FieldSpec::text("city", "City", ValidationRules::required().length(2, 60)),
        FieldSpec::text("address", "Address", ValidationRules::required().length(5, 200)),
        FieldSpec::number(
            "capacity",
            "Capacity",
            ValidationRules::required()
                .range(1.0, 200_000.0)
                .pattern(r"^[0-9]+$", "Capacity must be a whole number"),
        ),
    ];

    fn from_record(record: &Venue) -> Self {
        VenueDto::from(record)
    }

    fn value(&self, field: &str) -> String {
        match field {
            "name" => self.name.clone(),
            "city" => self.city.clone(),
            "address" => self.address.clone(),
            "capacity" => self.capacity.clone(),
            _ => String::new(),
        }
    }

    fn set_value(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "city" => self.city = value,
            "address" => self.address = value,
            "capacity" => self.capacity = value,
            _ => {}
        }
    }

    fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Capacity is validated as a whole number before this runs
    fn request(&self, _attachments: &[Attachment]) -> Result<ApiRequest, ApiError> {
        let capacity: u32 = self
            .capacity
            .trim()
            .parse()
            .map_err(|_| ApiError::Request(format!("invalid capacity `{}`", self.capacity)))?;
        let body = json!({
            "name": self.name.trim(),
            "city": self.city.trim(),
            "address": self.address.trim(),
            "capacity": capacity,
        });
        match &self.id {
            Some(id) => ApiRequest::put(format!("/admin/venues/{}", id)).with_json(&body),
            None => ApiRequest::post("/admin/venues").with_json(&body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::Method;

    #[test]
    fn test_capacity_is_sent_as_number() {
        let form = VenueDto {
            id: None,
            name: "Hall A".to_string(),
            city: "Kyiv".to_string(),
            address: "1 Main street".to_string(),
            capacity: " 350 ".to_string(),
        };
        assert!(form.validate(&[]).is_empty());
        let request = form.request(&[]).unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.body.as_json().unwrap()["capacity"], 350);
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let mut form = VenueDto::default();
        form.set_value("capacity", "0".to_string());
        let errors = form.validate(&[]);
        assert_eq!(errors.get("capacity"), Some("Capacity must be at least 1"));
        assert_eq!(errors.get("name"), Some("Name is required"));
    }

    #[test]
    fn test_fractional_capacity_is_a_field_error() {
        let mut form = VenueDto {
            id: None,
            name: "Hall A".to_string(),
            city: "Kyiv".to_string(),
            address: "1 Main street".to_string(),
            capacity: String::new(),
        };
        form.set_value("capacity", "1.5".to_string());
        let errors = form.validate(&[]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("capacity"), Some("Capacity must be a whole number"));
    }
}
