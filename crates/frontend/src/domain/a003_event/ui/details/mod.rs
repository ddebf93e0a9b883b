//! Create / edit form of an event. Sent as multipart so the banner image
//! travels with the fields; the banner is mandatory for new events only.

use contracts::domain::a003_event::{Event, EventDto};
use contracts::shared::validation::{FieldKind, FieldSpec, ValidationRules};

use crate::shared::api::{ApiError, ApiRequest, RequestBody};
use crate::shared::crud::{multipart_parts, Attachment, AttachmentSpec, FormModel};
use crate::shared::date_utils::input_datetime_value;

impl FormModel for EventDto {
    type Record = Event;

    const NOUN: &'static str = "event";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name", "Name", ValidationRules::required().length(2, 120)),
        FieldSpec::text("description", "Description", ValidationRules::none().length(0, 2000))
            .kind(FieldKind::LongText),
        FieldSpec::text("category", "Category", ValidationRules::none().length(0, 60)),
        FieldSpec::text("venueId", "Venue ID", ValidationRules::required()),
        FieldSpec::text("date", "Starts at", ValidationRules::required()).kind(FieldKind::DateTime),
        FieldSpec::number("price", "Price", ValidationRules::required().range(0.0, 1_000_000.0)),
    ];
    const ATTACHMENTS: &'static [AttachmentSpec] = &[AttachmentSpec::image("banner", "Banner image")];

    fn from_record(record: &Event) -> Self {
        EventDto {
            date: input_datetime_value(&record.date),
            ..EventDto::from(record)
        }
    }

    fn value(&self, field: &str) -> String {
        match field {
            "name" => self.name.clone(),
            "description" => self.description.clone(),
            "category" => self.category.clone(),
            "venueId" => self.venue_id.clone(),
            "date" => self.date.clone(),
            "price" => self.price.clone(),
            _ => String::new(),
        }
    }

    fn set_value(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "description" => self.description = value,
            "category" => self.category = value,
            "venueId" => self.venue_id = value,
            "date" => self.date = value,
            "price" => self.price = value,
            _ => {}
        }
    }

    fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    fn request(&self, attachments: &[Attachment]) -> Result<ApiRequest, ApiError> {
        let body = RequestBody::Multipart(multipart_parts(self, attachments));
        let request = match &self.id {
            Some(id) => ApiRequest::put(format!("/admin/events/{}", id)),
            None => ApiRequest::post("/admin/events"),
        };
        Ok(request.with_body(body))
    }
}
