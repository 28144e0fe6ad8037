pub mod category_repo;
pub mod task_repo;

pub use category_repo::CategoryRepo;
pub use task_repo::TaskRepo;
