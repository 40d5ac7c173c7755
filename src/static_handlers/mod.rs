mod routes;

pub use routes::get_static_routes;
