use crate::domain::{errors::AppError, models::IpInfoRecord};
use futures::future::BoxFuture;

/// A geolocation backend that normalizes its answer into an [`IpInfoRecord`].
///
/// Object safe; the fallback chain holds `Arc<dyn IpInfoProvider>`.
pub trait IpInfoProvider: Send + Sync + 'static {
    /// Identifier reported as `information_source`.
    fn name(&self) -> &str;

    fn lookup<'a>(&'a self, ip: &'a str) -> BoxFuture<'a, Result<IpInfoRecord, AppError>>;
}
