//! Detached execution of event invocations.

use std::future::Future;

/// Run `task` to completion without anyone waiting for it.
///
/// Uses the current Tokio runtime when there is one, otherwise a dedicated
/// thread running its own single-threaded runtime, so handlers can still use
/// Tokio timers and IO. No handle is kept either way.
pub(crate) fn detach<F>(task: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            let _ = handle.spawn(task);
        }
        Err(_) => {
            let spawned = std::thread::Builder::new()
                .name("fakelambda-event".into())
                .spawn(move || run_on_own_runtime(task));
            if let Err(_err) = spawned {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_err, "Failed to start event invocation thread");
            }
        }
    }
}

fn run_on_own_runtime<F: Future<Output = ()>>(task: F) {
    match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime.block_on(task),
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_err, "Failed to build event invocation runtime");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::detach;
    use std::{sync::mpsc, time::Duration};

    #[test]
    fn test_detach_without_runtime() {
        let (tx, rx) = mpsc::channel();
        detach(async move {
            tx.send(7).unwrap();
        });
        assert_eq!(rx.recv_timeout(Duration::from_secs(5)).unwrap(), 7);
    }

    #[test]
    fn test_detach_without_runtime_drives_timers() {
        let (tx, rx) = mpsc::channel();
        detach(async move {
            tokio::time::sleep(Duration::from_millis(1)).await;
            tx.send("slept").unwrap();
        });
        assert_eq!(rx.recv_timeout(Duration::from_secs(5)).unwrap(), "slept");
    }

    #[tokio::test]
    async fn test_detach_on_runtime() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        detach(async move {
            tx.send("done").unwrap();
        });
        assert_eq!(rx.await.unwrap(), "done");
    }
}
