mod form;
mod gateway;
mod validate;

pub use form::{ContactForm, DismissTicket, SubmitAttempt, SubmissionStatus, SubmitFailure, SUCCESS_DISPLAY};
pub use gateway::{GatewayError, RelayRequest, SimulatedGateway, SubmissionGateway, TemplateParams};
pub use validate::{validate, validate_named, Field, FormErrors, FormState, UnknownField};
