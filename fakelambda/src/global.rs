//! Process-wide invocation backend.
//!
//! The backend is picked once at startup: either the in-memory [`Fake`] or
//! any other [`Serverless`] implementation, such as a real service client.
//! The first initialisation wins; later calls change nothing and return
//! `false`.
//!
//! ```rust,ignore
//! if cfg.use_fake {
//!     fakelambda::init_fake([with_function("resize", resize)]);
//! } else {
//!     fakelambda::init_backend(RemoteClient::new(region));
//! }
//!
//! let out = fakelambda::serverless()
//!     .expect("backend initialised")
//!     .invoke_dyn(Some(InvokeInput::new("resize")))
//!     .await?;
//! ```

use fakelambda_core::{DynServerless, Serverless};
use fakelambda_std::{Fake, FakeOption};
use std::sync::OnceLock;

static BACKEND: OnceLock<Box<dyn DynServerless>> = OnceLock::new();

/// Install a [`Fake`] built from `options` as the process backend.
///
/// Returns `false` if a backend was already installed; `options` are then
/// dropped without being applied.
pub fn init_fake(options: impl IntoIterator<Item = FakeOption>) -> bool {
    let mut installed = false;
    BACKEND.get_or_init(|| {
        installed = true;
        Box::new(Fake::new(options))
    });
    log_init(installed, "fake");
    installed
}

/// Install any [`Serverless`] implementation as the process backend.
///
/// Returns `false` if a backend was already installed.
pub fn init_backend<S: Serverless>(backend: S) -> bool {
    let installed = BACKEND.set(Box::new(backend)).is_ok();
    log_init(installed, std::any::type_name::<S>());
    installed
}

/// The process backend, if one was installed.
pub fn serverless() -> Option<&'static dyn DynServerless> {
    BACKEND.get().map(|backend| backend.as_ref())
}

fn log_init(installed: bool, backend: &str) {
    #[cfg(feature = "tracing")]
    {
        if installed {
            tracing::debug!(backend, "Installed invocation backend");
        } else {
            tracing::debug!(backend, "Invocation backend already installed, ignoring");
        }
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = (installed, backend);
    }
}
