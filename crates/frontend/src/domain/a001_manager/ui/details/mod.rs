//! Create / edit form of a manager account.
//!
//! The password is asked for on create only; edits keep the current one.

use contracts::domain::a001_manager::{Manager, ManagerDto};
use contracts::shared::validation::{
    FieldKind, FieldSpec, ValidationRules, EMAIL_PATTERN, PHONE_PATTERN,
};
use std::borrow::Cow;

use crate::shared::api::{ApiError, ApiRequest};
use crate::shared::crud::{Attachment, FormModel};

const PASSWORD: &str = "password";

fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

impl FormModel for ManagerDto {
    type Record = Manager;

    const NOUN: &'static str = "manager";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name", "Name", ValidationRules::required().length(2, 60)),
        FieldSpec::text(
            "email",
            "Email",
            ValidationRules::required().pattern(EMAIL_PATTERN, "Enter a valid e-mail address"),
        )
        .kind(FieldKind::Email),
        FieldSpec::text(
            "phone",
            "Phone",
            ValidationRules::none().pattern(PHONE_PATTERN, "Phone must be 10 to 15 digits"),
        ),
        FieldSpec::text(PASSWORD, "Password", ValidationRules::required().length(8, 64))
            .kind(FieldKind::Password),
    ];

    fn from_record(record: &Manager) -> Self {
        ManagerDto::from(record)
    }

    fn value(&self, field: &str) -> String {
        match field {
            "name" => self.name.clone(),
            "email" => self.email.clone(),
            "phone" => self.phone.clone(),
            PASSWORD => self.password.clone().unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn set_value(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "email" => self.email = value,
            "phone" => self.phone = value,
            PASSWORD => self.password = (!value.is_empty()).then_some(value),
            _ => {}
        }
    }

    fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    fn field_specs(&self) -> Cow<'static, [FieldSpec]> {
        if self.is_edit() {
            Cow::Owned(
                Self::FIELDS
                    .iter()
                    .filter(|spec| spec.name != PASSWORD)
                    .copied()
                    .collect(),
            )
        } else {
            Cow::Borrowed(Self::FIELDS)
        }
    }

    fn request(&self, _attachments: &[Attachment]) -> Result<ApiRequest, ApiError> {
        let payload = ManagerDto {
            id: None,
            name: trimmed(&self.name),
            email: trimmed(&self.email),
            phone: trimmed(&self.phone),
            password: match &self.id {
                Some(_) => None,
                None => self.password.clone(),
            },
        };
        match &self.id {
            Some(id) => ApiRequest::put(format!("/admin/managers/{}", id)).with_json(&payload),
            None => ApiRequest::post("/admin/managers").with_json(&payload),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::Method;

    fn filled() -> ManagerDto {
        ManagerDto {
            id: None,
            name: " Ann Lee ".to_string(),
            email: "ann@example.com".to_string(),
            phone: "+380501234567".to_string(),
            password: Some("s3cret-pass".to_string()),
        }
    }

    #[test]
    fn test_create_requires_password() {
        let mut form = filled();
        form.set_value(PASSWORD, String::new());
        let errors = form.validate(&[]);
        assert_eq!(errors.get(PASSWORD), Some("Password is required"));
    }

    #[test]
    fn test_edit_skips_password() {
        let form = ManagerDto {
            id: Some("m1".to_string()),
            password: None,
            ..filled()
        };
        assert!(form.validate(&[]).is_empty());
        let request = form.request(&[]).unwrap();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.path, "/admin/managers/m1");
        let body = request.body.as_json().unwrap();
        assert!(body.get("password").is_none());
        assert!(body.get("id").is_none());
    }

    #[test]
    fn test_create_posts_trimmed_payload() {
        let request = filled().request(&[]).unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/admin/managers");
        let body = request.body.as_json().unwrap();
        assert_eq!(body["name"], "Ann Lee");
        assert_eq!(body["password"], "s3cret-pass");
    }

    #[test]
    fn test_bad_phone_is_reported() {
        let mut form = filled();
        form.set_value("phone", "12-34".to_string());
        assert_eq!(form.validate(&[]).get("phone"), Some("Phone must be 10 to 15 digits"));
    }
}
