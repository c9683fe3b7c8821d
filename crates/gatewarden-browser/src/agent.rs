use chromiumoxide::Page;
use gatewarden_core::{AdminPage, BlockedDevice, ConnectedDevice, Credentials, RouterConfig};

use crate::pages;
use crate::scrape::{RawDeviceRow, RawFilterRow, RawOutcome};
use crate::session::{BrowserSession, tolerant_navigation_wait, wait_for_selector};
use crate::{Error, Result};

/// Result of a form submit that the router answers with a banner.
#[derive(Debug, Clone)]
pub struct OperationOutcome {
    pub message: Option<String>,
}

/// Scripted driver for the router's admin console.
///
/// Every operation is a straight-line script: open a page, log in, navigate
/// to a fixed URL, interact with known elements, scrape, close the page.
/// The router session lives and dies with each page; only the Chrome
/// process is shared.
pub struct RouterAgent {
    session: BrowserSession,
}

impl RouterAgent {
    pub fn new(config: RouterConfig) -> Self {
        Self {
            session: BrowserSession::new(config),
        }
    }

    pub fn config(&self) -> &RouterConfig {
        self.session.config()
    }

    /// Verify credentials by performing a full login round-trip.
    pub async fn login(&self, creds: &Credentials) -> Result<()> {
        let page = self.session.new_page().await?;
        let result = self.login_on(&page, creds).await;
        close_page(page).await;
        result
    }

    /// Scrape the connected-device table.
    pub async fn connected_devices(&self, creds: &Credentials) -> Result<Vec<ConnectedDevice>> {
        let page = self.session.new_page().await?;
        let result = self.connected_devices_on(&page, creds).await;
        close_page(page).await;
        result
    }

    /// Scrape the wireless MAC filter table.
    pub async fn blocked_devices(&self, creds: &Credentials) -> Result<Vec<BlockedDevice>> {
        let page = self.session.new_page().await?;
        let result = self.blocked_devices_on(&page, creds).await;
        close_page(page).await;
        result
    }

    /// Add a device to the MAC filter list.
    pub async fn block_device(&self, creds: &Credentials, mac: &str, name: &str) -> Result<()> {
        let page = self.session.new_page().await?;
        let result = self.block_device_on(&page, creds, mac, name).await;
        close_page(page).await;
        result
    }

    /// Remove a device from the MAC filter list.
    pub async fn unblock_device(&self, creds: &Credentials, mac: &str) -> Result<()> {
        let page = self.session.new_page().await?;
        let result = self.unblock_device_on(&page, creds, mac).await;
        close_page(page).await;
        result
    }

    /// Change the 2.4 GHz Wi-Fi password. The current password is checked
    /// against what the settings form holds before anything is submitted.
    pub async fn change_wifi_password(
        &self,
        creds: &Credentials,
        current: &str,
        new: &str,
    ) -> Result<()> {
        let page = self.session.new_page().await?;
        let result = self.change_wifi_password_on(&page, creds, current, new).await;
        close_page(page).await;
        result
    }

    /// Change the admin console password through the account page.
    pub async fn change_admin_password(
        &self,
        creds: &Credentials,
        current: &str,
        new: &str,
        confirm: &str,
    ) -> Result<OperationOutcome> {
        let page = self.session.new_page().await?;
        let result = self
            .change_admin_password_on(&page, creds, current, new, confirm)
            .await;
        close_page(page).await;
        result
    }

    /// Trigger a router reboot.
    pub async fn reboot(&self, creds: &Credentials) -> Result<()> {
        let page = self.session.new_page().await?;
        let result = self.reboot_on(&page, creds).await;
        close_page(page).await;
        result
    }

    /// Close the shared browser process.
    pub async fn shutdown(&self) {
        self.session.shutdown().await;
    }

    async fn login_on(&self, page: &Page, creds: &Credentials) -> Result<()> {
        let config = self.session.config();
        let timeout = config.nav_timeout;

        tracing::debug!(username = %creds.username, "logging in to router");

        page.goto(config.base_url()).await?;

        let username = wait_for_selector(page, pages::LOGIN_USERNAME, timeout).await?;
        username.click().await?;
        username.type_str(&creds.username).await?;

        let password = page.find_element(pages::LOGIN_PASSWORD).await?;
        password.click().await?;
        password.type_str(&creds.password).await?;

        page.find_element(pages::LOGIN_BUTTON).await?.click().await?;

        match tokio::time::timeout(timeout, page.wait_for_navigation()).await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => return Err(e.into()),
            Err(_) => return Err(Error::NavigationTimeout(config.base_url())),
        }

        let landed = page.url().await?.unwrap_or_default();
        if landed == config.page_url(AdminPage::Index) {
            tracing::debug!("router login successful");
            Ok(())
        } else {
            Err(Error::AuthFailed(
                "router rejected the credentials".to_string(),
            ))
        }
    }

    async fn goto_admin_page(
        &self,
        page: &Page,
        creds: &Credentials,
        target: AdminPage,
    ) -> Result<()> {
        self.login_on(page, creds).await?;
        let url = self.session.config().page_url(target);
        tracing::debug!(%url, "navigating to admin page");
        page.goto(url).await?;
        Ok(())
    }

    async fn connected_devices_on(
        &self,
        page: &Page,
        creds: &Credentials,
    ) -> Result<Vec<ConnectedDevice>> {
        let timeout = self.session.config().nav_timeout;
        self.goto_admin_page(page, creds, AdminPage::DeviceList).await?;
        wait_for_selector(page, pages::DEVICE_TABLE, timeout).await?;

        let rows: Vec<RawDeviceRow> = page
            .evaluate(pages::scrape_device_rows_js())
            .await?
            .into_value()?;

        let devices: Vec<ConnectedDevice> =
            rows.into_iter().map(RawDeviceRow::into_device).collect();
        tracing::info!(count = devices.len(), "scraped connected devices");
        Ok(devices)
    }

    async fn blocked_devices_on(
        &self,
        page: &Page,
        creds: &Credentials,
    ) -> Result<Vec<BlockedDevice>> {
        self.goto_admin_page(page, creds, AdminPage::MacFilter).await?;
        let rows = self.scrape_filter_rows(page).await?;

        let blocked: Vec<BlockedDevice> =
            rows.into_iter().map(RawFilterRow::into_blocked).collect();
        tracing::info!(count = blocked.len(), "scraped MAC filter list");
        Ok(blocked)
    }

    async fn block_device_on(
        &self,
        page: &Page,
        creds: &Credentials,
        mac: &str,
        name: &str,
    ) -> Result<()> {
        let timeout = self.session.config().nav_timeout;
        self.goto_admin_page(page, creds, AdminPage::MacFilter).await?;
        wait_for_selector(page, pages::MAC_FILTER_TABLE, timeout).await?;

        wait_for_selector(page, pages::MAC_FILTER_ADD_BUTTON, timeout)
            .await?
            .click()
            .await?;

        let mac_input = wait_for_selector(page, pages::MAC_FILTER_MAC_INPUT, timeout).await?;
        mac_input.click().await?;
        mac_input.type_str(mac).await?;

        let name_input = page.find_element(pages::MAC_FILTER_NAME_INPUT).await?;
        name_input.click().await?;
        name_input.type_str(name).await?;

        page.find_element(pages::MAC_FILTER_APPLY_BUTTON)
            .await?
            .click()
            .await?;
        tolerant_navigation_wait(page, timeout).await;

        // The firmware re-renders the table after apply; verify the entry
        // actually landed.
        let rows = self.scrape_filter_rows(page).await?;
        if rows.iter().any(|row| row.mac.eq_ignore_ascii_case(mac)) {
            tracing::info!(%mac, "device blocked");
            Ok(())
        } else {
            Err(Error::OperationFailed(format!(
                "device {mac} did not appear in the filter list"
            )))
        }
    }

    async fn unblock_device_on(&self, page: &Page, creds: &Credentials, mac: &str) -> Result<()> {
        let timeout = self.session.config().nav_timeout;
        self.goto_admin_page(page, creds, AdminPage::MacFilter).await?;
        wait_for_selector(page, pages::MAC_FILTER_TABLE, timeout).await?;

        let found: bool = page
            .evaluate(pages::select_filter_row_js(mac))
            .await?
            .into_value()?;
        if !found {
            return Err(Error::DeviceNotFound(mac.to_string()));
        }

        page.find_element(pages::MAC_FILTER_DELETE_BUTTON)
            .await?
            .click()
            .await?;
        tolerant_navigation_wait(page, timeout).await;

        let rows = self.scrape_filter_rows(page).await?;
        if rows.iter().any(|row| row.mac.eq_ignore_ascii_case(mac)) {
            return Err(Error::OperationFailed(format!(
                "device {mac} is still present in the filter list"
            )));
        }

        tracing::info!(%mac, "device unblocked");
        Ok(())
    }

    async fn change_wifi_password_on(
        &self,
        page: &Page,
        creds: &Credentials,
        current: &str,
        new: &str,
    ) -> Result<()> {
        let timeout = self.session.config().nav_timeout;
        self.goto_admin_page(page, creds, AdminPage::WifiSettings).await?;
        wait_for_selector(page, pages::WIFI_PASSWORD_FIELD, timeout).await?;

        let stored: Option<String> = page
            .evaluate(pages::read_wifi_password_js())
            .await?
            .into_value()?;
        let stored = stored.ok_or_else(|| {
            Error::OperationFailed("Wi-Fi password field is missing from the page".to_string())
        })?;

        if stored != current {
            return Err(Error::AuthFailed(
                "current Wi-Fi password is incorrect".to_string(),
            ));
        }

        let submitted: bool = page
            .evaluate(pages::submit_wifi_password_js(new))
            .await?
            .into_value()?;
        if !submitted {
            return Err(Error::OperationFailed(
                "Wi-Fi settings page did not expose its submit handler".to_string(),
            ));
        }

        tolerant_navigation_wait(page, timeout).await;
        tracing::info!("Wi-Fi password changed");
        Ok(())
    }

    async fn change_admin_password_on(
        &self,
        page: &Page,
        creds: &Credentials,
        current: &str,
        new: &str,
        confirm: &str,
    ) -> Result<OperationOutcome> {
        let timeout = self.session.config().nav_timeout;
        self.goto_admin_page(page, creds, AdminPage::Account).await?;

        let old_field = wait_for_selector(page, pages::ADMIN_OLD_PASSWORD, timeout).await?;
        old_field.click().await?;
        old_field.type_str(current).await?;

        let new_field = page.find_element(pages::ADMIN_NEW_PASSWORD).await?;
        new_field.click().await?;
        new_field.type_str(new).await?;

        let confirm_field = page.find_element(pages::ADMIN_CONFIRM_PASSWORD).await?;
        confirm_field.click().await?;
        confirm_field.type_str(confirm).await?;

        page.find_element(pages::ADMIN_APPLY_BUTTON)
            .await?
            .click()
            .await?;
        tolerant_navigation_wait(page, timeout).await;

        let outcome: RawOutcome = page
            .evaluate(pages::read_outcome_js())
            .await?
            .into_value()?;

        if outcome.success {
            tracing::info!("admin password changed");
            Ok(OperationOutcome {
                message: outcome.message,
            })
        } else {
            Err(Error::Rejected(
                outcome
                    .message
                    .unwrap_or_else(|| "Failed to change login details".to_string()),
            ))
        }
    }

    async fn reboot_on(&self, page: &Page, creds: &Credentials) -> Result<()> {
        let timeout = self.session.config().nav_timeout;
        self.goto_admin_page(page, creds, AdminPage::Account).await?;

        // The confirm() dialog is auto-accepted by the page listener.
        wait_for_selector(page, pages::REBOOT_BUTTON, timeout)
            .await?
            .click()
            .await?;
        tolerant_navigation_wait(page, timeout).await;

        tracing::info!("router reboot initiated");
        Ok(())
    }

    async fn scrape_filter_rows(&self, page: &Page) -> Result<Vec<RawFilterRow>> {
        let rows: Vec<RawFilterRow> = page
            .evaluate(pages::scrape_filter_rows_js())
            .await?
            .into_value()?;
        Ok(rows)
    }
}

async fn close_page(page: Page) {
    if let Err(e) = page.close().await {
        tracing::debug!("error closing page: {}", e);
    }
}
