//! Banner upload form. Banners are created, never edited.

use contracts::domain::a005_banner::{Banner, BannerDto};
use contracts::shared::validation::{FieldSpec, ValidationRules};

use crate::shared::api::{ApiError, ApiRequest, RequestBody};
use crate::shared::crud::{multipart_parts, Attachment, AttachmentSpec, FormModel};

const URL_PATTERN: &str = r"^https?://\S+$";

impl FormModel for BannerDto {
    type Record = Banner;

    const NOUN: &'static str = "banner";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("title", "Title", ValidationRules::required().length(2, 80)),
        FieldSpec::text(
            "link",
            "Link",
            ValidationRules::none().pattern(URL_PATTERN, "Link must start with http:// or https://"),
        ),
    ];
    const ATTACHMENTS: &'static [AttachmentSpec] = &[AttachmentSpec::image("image", "Image")];

    fn from_record(record: &Banner) -> Self {
        BannerDto {
            title: record.title.clone(),
            link: record.link.clone().unwrap_or_default(),
        }
    }

    fn value(&self, field: &str) -> String {
        match field {
            "title" => self.title.clone(),
            "link" => self.link.clone(),
            _ => String::new(),
        }
    }

    fn set_value(&mut self, field: &str, value: String) {
        match field {
            "title" => self.title = value,
            "link" => self.link = value,
            _ => {}
        }
    }

    fn is_edit(&self) -> bool {
        false
    }

    fn request(&self, attachments: &[Attachment]) -> Result<ApiRequest, ApiError> {
        Ok(ApiRequest::post("/admin/banners")
            .with_body(RequestBody::Multipart(multipart_parts(self, attachments))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_requires_image_and_valid_link() {
        let form = BannerDto {
            title: "Summer sale".to_string(),
            link: "example.com/sale".to_string(),
        };
        let errors = form.validate(&[]);
        assert_eq!(errors.get("image"), Some("Image is required"));
        assert_eq!(errors.get("link"), Some("Link must start with http:// or https://"));
    }
}
