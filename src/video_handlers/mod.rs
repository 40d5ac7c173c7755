mod routes;

pub use routes::get_video_routes;
