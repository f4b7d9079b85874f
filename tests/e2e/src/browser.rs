use anyhow::{Context, Result};
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::Duration;

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .context("failed to build launch options")?;

        let browser = ChromeBrowser::new(options)?;

        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    pub fn text(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let text = element.get_inner_text()?;
        Ok(text)
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        Ok(())
    }

    /// Evaluate a JavaScript expression and return its JSON value.
    pub fn eval(&self, expression: &str) -> Result<serde_json::Value> {
        let result = self.tab.evaluate(expression, false)?;
        Ok(result.value.unwrap_or(serde_json::Value::Null))
    }

    pub fn has_class(&self, selector: &str, class: &str) -> Result<bool> {
        let value = self.eval(&format!(
            "document.querySelector({selector:?}).classList.contains({class:?})"
        ))?;
        Ok(value.as_bool().unwrap_or(false))
    }

    /// Poll `selector`'s text until it equals `expected` or the timeout ends.
    pub fn wait_for_text(&self, selector: &str, expected: &str, timeout: Duration) -> Result<()> {
        let deadline = std::time::Instant::now() + timeout;
        loop {
            if self.text(selector)? == expected {
                return Ok(());
            }
            if std::time::Instant::now() >= deadline {
                anyhow::bail!("{selector} never read {expected:?}");
            }
            std::thread::sleep(Duration::from_millis(50));
        }
    }
}
