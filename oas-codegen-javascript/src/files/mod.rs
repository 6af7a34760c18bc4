//! JavaScript file generators.

mod api_client_js;
mod client_base_js;
mod client_js;
mod enum_js;
mod model_base_js;
mod model_js;
mod model_proxy_js;
mod runtime;

pub use api_client_js::ApiClientJs;
pub use client_base_js::ClientBaseJs;
pub use client_js::ClientJs;
pub use enum_js::EnumJs;
pub use model_base_js::ModelBaseJs;
pub use model_js::ModelJs;
pub use model_proxy_js::ModelProxyJs;
pub use runtime::{CLIENT_BASE_CLASS, MODEL_BASE_CLASS, RuntimeFile};
