//! Banner plus ready-to-run `curl` commit/reveal lines.

use crate::constants::DEFAULT_ENDPOINT;
use crate::models::SubmissionPayloads;
use crate::output::OutputRenderer;

const RULE_WIDTH: usize = 99;

/// Renders the warning banner and the two submission commands.
#[derive(Debug, Clone)]
pub struct CurlRenderer {
    endpoint: String,
}

impl CurlRenderer {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    fn curl_line(&self, payload: &str) -> String {
        format!(
            "    curl -i -X POST -H 'Content-Type: application/json' -d '{payload}' {}\n",
            self.endpoint
        )
    }
}

impl Default for CurlRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl OutputRenderer for CurlRenderer {
    fn render(&self, payloads: &SubmissionPayloads) -> String {
        let rule = "*".repeat(RULE_WIDTH);
        let mut out = String::new();

        out.push_str(&format!("{rule}\n"));
        out.push_str("*\n");
        out.push_str("*   WARNING:  You are making an FERChain entry with the following data:\n");
        out.push_str("*\n");
        out.push_str(&format!("*      {}\n", payloads.commit_payload));
        out.push_str("*   Implied factoid price:\n");
        out.push_str("*\n");
        out.push_str(&format!("*      ${:.2}\n", payloads.implied_price));
        out.push_str(&format!("{rule}\n"));
        out.push('\n');
        out.push_str(&format!(
            "Entry Credit Address that pays for this Entry: {}\n",
            payloads.paying_address
        ));
        out.push_str(&format!("{rule}\n"));
        out.push('\n');
        out.push_str(&self.curl_line(&payloads.commit_payload));
        out.push('\n');
        out.push_str(&self.curl_line(&payloads.reveal_payload));
        out.push_str("Done\n");
        out.push('\n');

        out
    }
}
