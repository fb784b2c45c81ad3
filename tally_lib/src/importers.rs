use crate::repositories::Repository;
use anyhow::Result;
use std::future::Future;
use std::path::Path;

pub trait Importer {
    /// Import the whole file, reporting regularly how many records have been
    /// processed so far, and how many there are in total.
    fn import_file(
        &mut self,
        path: &Path,
        report_progress: impl Fn(u64, u64),
    ) -> impl Future<Output = Result<Repository>>;
}
