pub mod error;
pub mod merge;
pub mod model;
pub mod store;

pub use error::{CoreError, Result};
pub use merge::{merge_bookings, merge_pairs};
pub use model::{Booking, NewRequest, RequestStatus, RequestUpdate, ServiceRequest};
pub use store::{RequestStore, StoreError};
