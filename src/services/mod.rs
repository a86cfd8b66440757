pub mod activity_scoring;
pub mod itinerary_generation_service;
