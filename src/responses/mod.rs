pub mod errors;
pub mod html;
pub mod json;
pub mod redirect;
pub mod xlsx;

pub use errors::{error_to_response, ResultResp};

pub use html::{html_response, html_response_with_status};
pub use json::json_response;
pub use redirect::see_other;
pub use xlsx::xlsx_response;
