pub mod category_dto;
pub mod import_dto;
