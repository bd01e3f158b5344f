//! Browser session pointed at a poker table.

use crate::config::{BrowserConfig, LiveSelectors, Selectors, TableConfig};
use crate::scrape::{RawTable, TableSnapshot, TableState};
use crate::{Error, Result};
use eoka::{Browser, Page};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

/// Viewport the table renders best at, used when the config sets none.
const VIEWPORT: (u32, u32) = (1920, 1080);

/// User agent presented to the site when the config sets none.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Find the element carrying a text - returns a CSS selector. Prefers
/// clickable elements; otherwise falls back to the last (innermost) match,
/// which is how SPA tabs without button semantics get hit.
const FIND_TAB_JS: &str = r#"(() => {
    const text = arguments[0].toLowerCase();
    const cssPath = (el) => {
        if (el.id) return '#' + el.id;
        const path = [];
        let node = el;
        while (node && node !== document.body) {
            let selector = node.tagName.toLowerCase();
            if (node.id) {
                path.unshift('#' + node.id);
                break;
            }
            const siblings = Array.from(node.parentNode?.children || []);
            const index = siblings.indexOf(node) + 1;
            if (siblings.length > 1) selector += ':nth-child(' + index + ')';
            path.unshift(selector);
            node = node.parentNode;
        }
        return path.join(' > ');
    };
    const walker = document.createTreeWalker(document.body, NodeFilter.SHOW_ELEMENT, null);
    let fallback = null;
    while (walker.nextNode()) {
        const el = walker.currentNode;
        if (el.textContent?.trim().toLowerCase().includes(text)) {
            if (el.matches('a, button, input, select, [role="button"], [onclick]')) {
                return cssPath(el);
            }
            fallback = el;
        }
    }
    return fallback ? cssPath(fallback) : null;
})()"#;

/// Read every seat and the community area in one pass. Placeholders are
/// replaced with JSON-encoded selectors before evaluation.
const TABLE_STATE_JS: &str = r#"(() => {
    const read = (el) => {
        const rank = el.querySelector(__RANK__);
        const path = el.querySelector('svg path');
        return {
            rank: rank ? rank.textContent.trim() : '',
            path: path ? (path.getAttribute('d') || '') : '',
            fill_rule: path ? (path.getAttribute('fill-rule') || '') : ''
        };
    };
    const cards = (root) => Array.from(root.querySelectorAll(__CARDS__)).map(read);
    const seats = __SEATS__.map(sel => {
        const seat = document.querySelector(sel);
        return seat ? cards(seat).slice(0, 2) : [];
    });
    const table = document.querySelector(__COMMUNITY__);
    return {seats: seats, community: table ? cards(table) : []};
})()"#;

/// A live browser session on the poker table.
pub struct Scout {
    browser: Browser,
    page: Page,
}

impl Scout {
    /// Launch a browser with the configured stealth profile.
    pub async fn launch(config: &BrowserConfig) -> Result<Self> {
        let stealth = eoka::StealthConfig {
            headless: config.headless,
            proxy: config.proxy.clone(),
            user_agent: Some(
                config
                    .user_agent
                    .clone()
                    .unwrap_or_else(|| USER_AGENT.to_string()),
            ),
            viewport_width: config.viewport.as_ref().map(|v| v.width).unwrap_or(VIEWPORT.0),
            viewport_height: config
                .viewport
                .as_ref()
                .map(|v| v.height)
                .unwrap_or(VIEWPORT.1),
            ..Default::default()
        };

        debug!(
            "Launching browser (headless: {}, proxy: {:?})",
            config.headless, config.proxy
        );
        let browser = Browser::launch_with_config(stealth).await?;
        let page = browser.new_page("about:blank").await?;

        Ok(Self { browser, page })
    }

    /// The underlying page, for driving the browser directly.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Navigate to the lobby and open the poker table.
    ///
    /// Waits for the tab text to show up, clicks whatever element carries
    /// it, then gives the table a fixed settle period to render.
    pub async fn open_table(&self, table: &TableConfig) -> Result<()> {
        info!("Navigating to: {}", table.url);
        self.page.goto(&table.url).await?;

        debug!(
            "Waiting up to {}ms for '{}'",
            table.tab_timeout_ms, table.tab_text
        );
        self.page
            .wait_for_text(&table.tab_text, table.tab_timeout_ms)
            .await?;

        let selector = self.find_by_text(&table.tab_text).await?.ok_or_else(|| {
            Error::ElementNotFound(format!("no element with text: {}", table.tab_text))
        })?;
        info!("Opening table via: {}", selector);
        self.page.click(&selector).await?;

        debug!("Settling for {}ms", table.settle_ms);
        self.page.wait(table.settle_ms).await;
        Ok(())
    }

    /// Resolve a text to the CSS selector of the element carrying it.
    async fn find_by_text(&self, text: &str) -> Result<Option<String>> {
        let js = FIND_TAB_JS.replace("arguments[0]", &serde_json::to_string(text).unwrap());
        let selector: Option<String> = self.page.evaluate(&js).await?;
        Ok(selector)
    }

    /// Evaluate a JS expression and deserialize its JSON-stringified result.
    pub async fn extract<T: serde::de::DeserializeOwned>(&self, js: &str) -> Result<T> {
        let wrapped = format!(
            "JSON.stringify(eval({}))",
            serde_json::to_string(js).unwrap()
        );
        let json: String = self.page.evaluate(&wrapped).await?;
        if json == "null" || json == "undefined" || json.is_empty() {
            return Err(Error::Scrape(format!(
                "nothing returned for: {}",
                if js.len() > 60 { &js[..60] } else { js }
            )));
        }
        serde_json::from_str(&json).map_err(|e| Error::Scrape(format!("parse error: {}", e)))
    }

    /// Trimmed textContent of every element matching a selector, in DOM
    /// order.
    pub async fn texts(&self, selector: &str) -> Result<Vec<String>> {
        self.extract(&texts_js(selector)).await
    }

    /// Pull the three raw text lists from the page.
    pub async fn snapshot(&self, selectors: &Selectors) -> Result<TableSnapshot> {
        Ok(TableSnapshot {
            cards: self.texts(&selectors.cards).await?,
            odds: self.texts(&selectors.odds).await?,
            players: self.texts(&selectors.players).await?,
        })
    }

    /// Scrape the live table into a decoded state.
    pub async fn table_state(&self, live: &LiveSelectors) -> Result<TableState> {
        let raw: RawTable = self.extract(&state_js(live)).await?;
        Ok(TableState::from_raw(&raw))
    }

    /// Block until the first seat container shows up, meaning a deal is
    /// underway.
    pub async fn wait_for_deal(&self, live: &LiveSelectors, timeout_ms: u64) -> Result<()> {
        let selector = format!("[data-qa=\"{}{}\"]", live.seat_prefix, live.first_seat);
        self.page.wait_for(&selector, timeout_ms).await?;
        Ok(())
    }

    /// Screenshot the page to a file. {timestamp} in the path is replaced
    /// with the current unix time.
    pub async fn save_screenshot(&self, path: &str) -> Result<String> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let path = path.replace("{timestamp}", &timestamp.to_string());
        let data = self.page.screenshot().await?;
        std::fs::write(&path, data)?;
        info!("Saved screenshot to: {}", path);
        Ok(path)
    }

    /// Close the browser.
    pub async fn close(self) -> Result<()> {
        self.browser.close().await?;
        Ok(())
    }
}

fn texts_js(selector: &str) -> String {
    format!(
        "Array.from(document.querySelectorAll({})).map(el => (el.textContent || '').trim())",
        serde_json::to_string(selector).unwrap()
    )
}

fn state_js(live: &LiveSelectors) -> String {
    let seats: Vec<String> = (0..live.seats)
        .map(|i| format!("[data-qa=\"{}{}\"]", live.seat_prefix, live.first_seat + i as u32))
        .collect();
    let cards = format!("[data-qa^=\"{}\"]", live.card_prefix);
    let community = format!("[data-qa=\"{}\"]", live.community);
    let rank = format!("span.{}", live.rank_class);
    TABLE_STATE_JS
        .replace("__SEATS__", &serde_json::to_string(&seats).unwrap())
        .replace("__CARDS__", &serde_json::to_string(&cards).unwrap())
        .replace("__COMMUNITY__", &serde_json::to_string(&community).unwrap())
        .replace("__RANK__", &serde_json::to_string(&rank).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LiveSelectors;

    #[test]
    fn test_texts_js_escapes_the_selector() {
        let js = texts_js(".odds, .win-prob");
        assert!(js.contains(r#"querySelectorAll(".odds, .win-prob")"#));

        // quotes in a selector must not break out of the JS string
        let js = texts_js(r#"[data-qa="cards"]"#);
        assert!(js.contains(r#"querySelectorAll("[data-qa=\"cards\"]")"#));
    }

    #[test]
    fn test_state_js_fills_every_placeholder() {
        let js = state_js(&LiveSelectors::default());
        assert!(!js.contains("__SEATS__"));
        assert!(!js.contains("__CARDS__"));
        assert!(!js.contains("__COMMUNITY__"));
        assert!(!js.contains("__RANK__"));
        assert!(js.contains("button-screen-odd-446"));
        assert!(js.contains("button-screen-odd-451"));
        assert!(!js.contains("button-screen-odd-452"));
        assert!(js.contains("area-table-cards"));
        assert!(js.contains("span.p9p7USKXMQo2_eEm"));
    }
}
