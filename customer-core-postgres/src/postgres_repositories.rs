use sqlx::PgPool;
use std::sync::Arc;

use crate::repository::customer::change_log_repository::ChangeLogRepositoryImpl;
use crate::repository::customer::customer_repository::CustomerRepositoryImpl;
use crate::service::lifecycle::CustomerLifecycleImpl;

pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Create the customer repositories sharing the connection pool.
    ///
    /// Each repository call checks one connection out of the pool for its
    /// duration; no state is shared between invocations outside Postgres.
    pub fn create_customer_repositories(&self) -> CustomerRepositories {
        CustomerRepositories {
            customer_repository: Arc::new(CustomerRepositoryImpl::new(self.pool.clone())),
            change_log_repository: Arc::new(ChangeLogRepositoryImpl::new(self.pool.clone())),
        }
    }

    /// Create a lifecycle engine wired to fresh repositories.
    pub fn create_lifecycle(&self) -> CustomerLifecycleImpl {
        let repos = self.create_customer_repositories();
        CustomerLifecycleImpl::new(repos.customer_repository, repos.change_log_repository)
    }
}

pub struct CustomerRepositories {
    pub customer_repository: Arc<CustomerRepositoryImpl>,
    pub change_log_repository: Arc<ChangeLogRepositoryImpl>,
}
