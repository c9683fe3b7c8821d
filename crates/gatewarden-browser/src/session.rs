use std::time::{Duration, Instant};

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::{
    EventJavascriptDialogOpening, HandleJavaScriptDialogParams,
};
use chromiumoxide::{Element, Page};
use futures::StreamExt;
use gatewarden_core::RouterConfig;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::{ChromeFinder, Error, Result};

const SELECTOR_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// One shared Chrome instance, reused across operations.
///
/// Each operation opens its own page and closes it when done; only the
/// browser process itself is long-lived. If Chrome dies between requests
/// the next `new_page` call relaunches it, so callers never see a dead
/// handle.
pub struct BrowserSession {
    config: RouterConfig,
    inner: Mutex<Option<LiveBrowser>>,
}

struct LiveBrowser {
    browser: Browser,
    handler_task: JoinHandle<()>,
    // Throwaway profile; removed when the session is replaced or dropped.
    _profile_dir: tempfile::TempDir,
}

impl BrowserSession {
    pub fn new(config: RouterConfig) -> Self {
        Self {
            config,
            inner: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Open a fresh page, launching or relaunching Chrome as needed.
    ///
    /// Every page gets a listener that auto-accepts JavaScript dialogs; the
    /// router confirms deletes and reboots with `confirm()` and a pending
    /// dialog would otherwise hang the script.
    pub async fn new_page(&self) -> Result<Page> {
        let mut guard = self.inner.lock().await;

        let alive = match guard.as_ref() {
            Some(live) => live.browser.version().await.is_ok(),
            None => false,
        };

        if !alive {
            if let Some(old) = guard.take() {
                tracing::warn!("browser disconnected, launching new instance");
                old.handler_task.abort();
            }
            *guard = Some(self.launch().await?);
        }

        let live = guard.as_ref().ok_or_else(|| {
            Error::Browser("browser unavailable after launch".to_string())
        })?;

        let page = live.browser.new_page("about:blank").await?;
        auto_accept_dialogs(&page).await?;
        Ok(page)
    }

    async fn launch(&self) -> Result<LiveBrowser> {
        let chrome_path = ChromeFinder::new(self.config.chrome_path.clone()).find()?;
        let profile_dir = tempfile::tempdir()?;

        tracing::info!(
            chrome = %chrome_path.display(),
            headless = self.config.headless,
            "launching browser"
        );

        let mut builder = BrowserConfig::builder()
            .chrome_executable(&chrome_path)
            .user_data_dir(profile_dir.path())
            .no_sandbox()
            .arg("--disable-setuid-sandbox")
            .arg("--disable-dev-shm-usage");

        if !self.config.headless {
            builder = builder.with_head();
        }

        let browser_config = builder.build().map_err(Error::Browser)?;

        let (browser, mut handler) = Browser::launch(browser_config).await?;

        // The handler stream must be polled for any CDP command to complete.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("CDP handler event error (continuing): {}", e);
                }
            }
        });

        tracing::info!("browser launched successfully");

        Ok(LiveBrowser {
            browser,
            handler_task,
            _profile_dir: profile_dir,
        })
    }

    /// Close the browser process if one is running.
    pub async fn shutdown(&self) {
        let mut guard = self.inner.lock().await;
        if let Some(mut live) = guard.take() {
            if let Err(e) = live.browser.close().await {
                tracing::debug!("error closing browser: {}", e);
            }
            let _ = live.browser.wait().await;
            live.handler_task.abort();
            tracing::info!("browser shut down");
        }
    }
}

async fn auto_accept_dialogs(page: &Page) -> Result<()> {
    let mut dialogs = page
        .event_listener::<EventJavascriptDialogOpening>()
        .await?;
    let page = page.clone();
    tokio::spawn(async move {
        while let Some(dialog) = dialogs.next().await {
            tracing::debug!("accepting dialog: {}", dialog.message);
            let params = HandleJavaScriptDialogParams::builder()
                .accept(true)
                .build()
                .expect("accept is the only required field");
            if let Err(e) = page.execute(params).await {
                tracing::debug!("failed to accept dialog: {}", e);
            }
        }
    });
    Ok(())
}

/// Poll for a selector until it appears or the deadline passes.
///
/// chromiumoxide has no built-in selector wait; the admin pages build their
/// tables from inline scripts after load, so a plain `find_element` right
/// after navigation races them.
pub async fn wait_for_selector(page: &Page, selector: &str, timeout: Duration) -> Result<Element> {
    let deadline = Instant::now() + timeout;
    loop {
        match page.find_element(selector).await {
            Ok(element) => return Ok(element),
            Err(_) if Instant::now() < deadline => {
                tokio::time::sleep(SELECTOR_POLL_INTERVAL).await;
            }
            Err(_) => return Err(Error::SelectorTimeout(selector.to_string())),
        }
    }
}

/// Wait for a navigation that may legitimately never happen.
///
/// The firmware submits several forms without a full page load; the
/// original console swallows those timeouts and carries on, and so do we.
pub async fn tolerant_navigation_wait(page: &Page, timeout: Duration) {
    match tokio::time::timeout(timeout, page.wait_for_navigation()).await {
        Ok(Ok(_)) => {}
        Ok(Err(e)) => tracing::debug!("navigation wait error (continuing): {}", e),
        Err(_) => tracing::warn!("navigation timeout occurred, but continuing"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_without_browser() {
        let config = RouterConfig::new("192.168.100.1").unwrap();
        let session = BrowserSession::new(config);
        assert!(session.inner.try_lock().unwrap().is_none());
    }

    // Launch/relaunch behavior needs a Chrome binary and is covered by the
    // CLI integration tests when one is installed.
}
