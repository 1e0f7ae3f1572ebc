pub mod request;
pub mod response;
pub mod validation;

pub use request::ContactRequest;
pub use response::ContactResponse;
pub use validation::{validate_phone, PhoneError, PHONE_ERROR_MESSAGE};
