mod routes;

pub use routes::get_event_routes;
