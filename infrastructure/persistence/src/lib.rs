pub mod collection;
pub mod db;
pub mod kv {
    pub mod memory;
    pub mod postgres;
    pub mod store;
}
pub mod ingredient {
    pub mod entity;
    pub mod repository;
}
pub mod consumption {
    pub mod entity;
    pub mod repository;
}
pub mod daily_status {
    pub mod entity;
    pub mod repository;
}
