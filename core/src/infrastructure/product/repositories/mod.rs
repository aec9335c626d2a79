pub mod in_memory_product_repository;
pub mod postgres_product_repository;
pub mod product_store;
