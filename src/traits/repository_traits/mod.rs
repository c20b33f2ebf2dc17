pub mod warehouse_repository;
