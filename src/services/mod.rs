pub mod csv_service;
pub mod import_service;
