// rayon-based thread pool selection

use crate::error::ColoringError;

/// Number of worker threads `install` would use for `num_threads`.
pub fn pool_size(num_threads: Option<usize>) -> usize {
    match num_threads {
        None => rayon::current_num_threads(),
        Some(0) => num_cpus::get(),
        Some(k) => k,
    }
}

/// Run `f` on the pool selected by `num_threads`.
///
/// `None` runs on the global rayon pool. `Some(k)` builds a dedicated pool of
/// `k` threads for this call only (`Some(0)`: one thread per CPU); it is torn
/// down when `f` returns.
pub fn install<R, F>(num_threads: Option<usize>, f: F) -> Result<R, ColoringError>
where
    R: Send,
    F: FnOnce() -> R + Send,
{
    match num_threads {
        None => Ok(f()),
        Some(_) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(pool_size(num_threads))
                .build()
                .map_err(|e| ColoringError::ThreadPool(e.to_string()))?;
            Ok(pool.install(f))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedicated_pool_has_requested_size() {
        let seen = install(Some(3), rayon::current_num_threads).unwrap();
        assert_eq!(seen, 3);
        assert_eq!(pool_size(Some(2)), 2);
        assert_eq!(pool_size(Some(0)), num_cpus::get());
    }

    #[test]
    fn global_pool_runs_inline() {
        let v = install(None, || 41 + 1).unwrap();
        assert_eq!(v, 42);
    }
}
