//! Generic CRUD service shared by every resource

mod service;


pub use service::ResourceService;
