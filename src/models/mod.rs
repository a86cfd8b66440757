pub mod activity;
pub mod itinerary;
pub mod request;
