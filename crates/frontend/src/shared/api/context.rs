use leptos::prelude::*;
use std::rc::Rc;

use super::client::ApiClient;

/// Handle to the app-wide [`ApiClient`]; the client itself stays on the
/// UI thread
#[derive(Clone, Copy)]
pub struct ApiClientContext(StoredValue<Rc<dyn ApiClient>, LocalStorage>);

pub fn provide_api_client(client: Rc<dyn ApiClient>) {
    provide_context(ApiClientContext(StoredValue::new_local(client)));
}

pub fn use_api_client() -> Rc<dyn ApiClient> {
    let ctx = use_context::<ApiClientContext>().expect("ApiClient not provided in context");
    ctx.0.get_value()
}
