//! Create / edit modals: form description, state machine, view model and
//! the generic dialog component.

pub mod form;
pub mod form_modal;
pub mod model;
pub mod view_model;

pub use form::{multipart_parts, Attachment, AttachmentSpec, FormModel};
pub use form_modal::FormModal;
pub use model::{CrudModal, ModalPhase};
pub use view_model::CrudViewModel;
