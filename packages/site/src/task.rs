use std::future::Future;

/// Run a future on the current thread without blocking the caller.
///
/// In the browser this is the microtask queue; natively it needs to be called
/// from inside a `tokio::task::LocalSet`.
pub fn spawn_local<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(future);

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::task::spawn_local(future);
    }
}
