pub mod assets;
pub mod errors;
pub mod html;
pub mod json;

pub use errors::{html_error_response, ResultResp};

pub use assets::stylesheet_response;
pub use html::{html_response, html_response_with_status};
pub use json::json_response;
