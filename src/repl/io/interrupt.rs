//! # Interrupt Watcher
//!
//! Ctrl+C typed at the raw-mode prompt arrives as a key event. Everywhere
//! else it arrives as SIGINT: during a lookup, while a retry backs off, or
//! whenever stdin is piped. The watcher listens for that signal on its own
//! thread and runs a callback in place of the default handler.

use anyhow::{Context, Result};
use std::thread;
use tokio::runtime::{Builder, Runtime};

/// Run `on_interrupt` when the process receives Ctrl+C
///
/// The signal is registered before this returns, so an interrupt sent right
/// after installation is not lost.
pub fn install_interrupt_handler<F>(on_interrupt: F) -> Result<()>
where
    F: FnOnce() + Send + 'static,
{
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create signal runtime")?;
    let listener = Listener::register(&runtime)?;

    thread::Builder::new()
        .name("interrupt-watcher".into())
        .spawn(move || {
            if runtime.block_on(listener.recv()) {
                tracing::debug!("Received interrupt signal");
                on_interrupt();
            }
        })
        .context("Failed to spawn interrupt watcher")?;

    tracing::debug!("Interrupt watcher installed");
    Ok(())
}

#[cfg(unix)]
struct Listener(tokio::signal::unix::Signal);

#[cfg(unix)]
impl Listener {
    fn register(runtime: &Runtime) -> Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        let _guard = runtime.enter();
        let signal = signal(SignalKind::interrupt()).context("Failed to register SIGINT handler")?;
        Ok(Self(signal))
    }

    async fn recv(mut self) -> bool {
        self.0.recv().await.is_some()
    }
}

#[cfg(windows)]
struct Listener(tokio::signal::windows::CtrlC);

#[cfg(windows)]
impl Listener {
    fn register(runtime: &Runtime) -> Result<Self> {
        let _guard = runtime.enter();
        let ctrl_c = tokio::signal::windows::ctrl_c().context("Failed to register Ctrl+C handler")?;
        Ok(Self(ctrl_c))
    }

    async fn recv(mut self) -> bool {
        self.0.recv().await.is_some()
    }
}
