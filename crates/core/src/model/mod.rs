pub mod booking;
pub mod request;

pub use booking::Booking;
pub use request::{NewRequest, RequestStatus, RequestUpdate, ServiceRequest};
