// Library for tests to access modules

pub mod config;
pub mod csv_repo;
pub mod models;
pub mod routes;
pub mod seed;
pub mod series;
pub mod store_repo;
pub mod version;
