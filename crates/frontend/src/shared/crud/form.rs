//! Form description shared by every create / edit modal.

use contracts::shared::validation::{validate_fields, FieldErrors, FieldSpec};
use std::borrow::Cow;

use crate::shared::api::{ApiError, ApiRequest, FormPart};
use crate::shared::list::ListEntity;

/// File input of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub accept: &'static str,
    pub required_on_create: bool,
}

impl AttachmentSpec {
    pub const fn image(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            accept: "image/*",
            required_on_create: true,
        }
    }
}

/// A file picked for one attachment field
#[derive(Debug, Clone)]
pub struct Attachment {
    pub field: &'static str,
    pub file: web_sys::File,
}

/// Editable form data of one entity. Implemented on the create / update
/// DTOs, so the form holds exactly what is sent.
pub trait FormModel: Clone + Default + PartialEq + 'static {
    type Record: ListEntity;

    /// Lower-case name used in titles, e.g. "venue"
    const NOUN: &'static str;
    const FIELDS: &'static [FieldSpec];
    const ATTACHMENTS: &'static [AttachmentSpec] = &[];

    fn from_record(record: &Self::Record) -> Self;

    fn value(&self, field: &str) -> String;

    fn set_value(&mut self, field: &str, value: String);

    fn is_edit(&self) -> bool;

    /// Field rules in the current mode; edit forms may relax some
    fn field_specs(&self) -> Cow<'static, [FieldSpec]> {
        Cow::Borrowed(Self::FIELDS)
    }

    fn request(&self, attachments: &[Attachment]) -> Result<ApiRequest, ApiError>;

    fn validate(&self, attachments: &[Attachment]) -> FieldErrors {
        let specs = self.field_specs();
        let mut errors = validate_fields(&specs, |field| Cow::Owned(self.value(field)));
        if !self.is_edit() {
            for spec in Self::ATTACHMENTS.iter().filter(|a| a.required_on_create) {
                if !attachments.iter().any(|a| a.field == spec.name) {
                    errors.insert(spec.name, format!("{} is required", spec.label));
                }
            }
        }
        errors
    }
}

/// Multipart parts for `form`, then the files. A create skips blank fields;
/// an edit sends every field so a cleared value reaches the server.
pub fn multipart_parts<F: FormModel>(form: &F, attachments: &[Attachment]) -> Vec<FormPart> {
    let send_blank = form.is_edit();
    let mut parts: Vec<FormPart> = F::FIELDS
        .iter()
        .filter_map(|spec| {
            let value = form.value(spec.name);
            let value = value.trim();
            (send_blank || !value.is_empty()).then(|| FormPart::text(spec.name, value))
        })
        .collect();
    parts.extend(attachments.iter().map(|a| FormPart::File {
        name: a.field.to_string(),
        file: a.file.clone(),
    }));
    parts
}
