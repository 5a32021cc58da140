use crate::errors::Anticip8Result;

/// Read access to precomputed artifacts stored as opaque strings.
pub trait IArtifactStore: Send + Sync {
    fn get_artifact(&self, key: &str) -> Anticip8Result<Option<String>>;
}

impl<T: IArtifactStore + ?Sized> IArtifactStore for std::sync::Arc<T> {
    fn get_artifact(&self, key: &str) -> Anticip8Result<Option<String>> {
        (**self).get_artifact(key)
    }
}

/// Write access to precomputed artifacts, used by offline publishers.
pub trait IArtifactWriter: Send + Sync {
    fn put_artifact(&self, key: &str, payload: &str) -> Anticip8Result<()>;
}

impl<T: IArtifactWriter + ?Sized> IArtifactWriter for std::sync::Arc<T> {
    fn put_artifact(&self, key: &str, payload: &str) -> Anticip8Result<()> {
        (**self).put_artifact(key, payload)
    }
}
