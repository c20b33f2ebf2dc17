pub mod warehouse_repository_impl;
