mod draft;
mod error_map;
mod field;
mod phone_rule;

pub use draft::UserDraft;
pub use error_map::ErrorMap;
pub use field::Field;
pub use phone_rule::PhoneRule;
