//! Browser-only task spawning.
//!
//! Backend calls only make sense after hydration. During SSR the future is
//! dropped unpolled, so pages can wire handlers without `cfg` blocks.

use std::future::Future;

pub fn spawn_browser_task<F>(task: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "hydrate"))]
    drop(task);
}
